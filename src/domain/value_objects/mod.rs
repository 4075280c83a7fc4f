//! Value Objects
//!
//! Immutable types validated on construction.

mod config_warning;
mod exclusion_set;
mod workspace_root;

pub use config_warning::ConfigWarning;
pub use exclusion_set::{ExclusionCategory, ExclusionMatcher, ExclusionPattern, ExclusionSet};
pub use workspace_root::WorkspaceRoot;

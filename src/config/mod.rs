//! Configuration module for ntr
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NTR_*, NO_COLOR)
//! 3. Workspace config (`<root>/ntr.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{load_for_root, load_with_warnings, with_env_overrides, CONFIG_FILE_NAME};
pub use types::{ColorMode, Config, OutputConfig, PackageConfig, ToolsConfig, WorkspaceConfig};

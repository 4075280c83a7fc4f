//! Cleanup use case

mod options;
mod result;
mod use_case;

pub use options::CleanupOptions;
pub use result::{CleanupReport, FailedRemoval};
pub use use_case::CleanupEngine;

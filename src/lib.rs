//! ntr - workspace lifecycle manager for the NTR monorepo
//!
//! Provisions a fresh checkout (dependencies, environment files, formatter,
//! git hooks, lint-staging, editor settings), returns it to a clean state,
//! and packages it as a dated, distributable archive.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use application::{CleanupOptions, CleanupOutcome, Orchestrator, PackageOutcome, PipelineReport};
pub use config::Config;
pub use domain::value_objects::WorkspaceRoot;
pub use error::{ErrorClass, WorkspaceError, WorkspaceResult};

//! Application Layer
//!
//! Components that act on the workspace through domain ports, and the
//! pipelines that sequence them.
//!
//! ## Components
//!
//! - `ConfigWriter` - applies config artifacts (write-if-absent, overwrite, merge)
//! - `EnvironmentLinker` - per-app `.env` references
//! - `GitHookInstaller` - hook manager plus pre-commit script
//! - `CleanupEngine` - removes cleanup targets
//! - `PackagingEngine` - dated snapshot archives
//! - `Orchestrator` - the provision and cleanup pipelines

pub mod clean;
pub mod config_writer;
pub mod env_linker;
pub mod git_hooks;
pub mod orchestrator;
pub mod package;
pub mod pipeline;

pub use clean::{CleanupEngine, CleanupOptions, CleanupReport, FailedRemoval};
pub use config_writer::{ConfigWriter, WriteOutcome};
pub use env_linker::{EnvironmentLinker, LinkOutcome};
pub use git_hooks::GitHookInstaller;
pub use orchestrator::{CleanupOutcome, Orchestrator, PackageOutcome};
pub use package::PackagingEngine;
pub use pipeline::{FailurePolicy, Pipeline, PipelineReport, Step, StepFailure};

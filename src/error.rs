//! Error types for ntr
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for workspace operations
pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

/// How a failure is treated by the pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Dependency install or an unrecoverable config merge; aborts provisioning
    FatalSetup,
    /// Developer tooling (git hooks); logged and skipped
    RecoverableTooling,
    /// Archive creation; aborts the cleanup invocation
    FatalPackaging,
    /// Anything else (I/O, configuration, boundary violations)
    Other,
}

/// Main error type for workspace operations
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// The dependency installer could not be run or exited non-zero
    #[error("dependency installation failed ({command}): {reason}")]
    DependencyInstall { command: String, reason: String },

    /// An existing structured document could not be parsed for merging
    #[error("cannot merge into {file}: {message}")]
    MergeParse { file: PathBuf, message: String },

    /// The document to merge into does not exist
    #[error("cannot merge into {file}: file does not exist")]
    MergeTargetMissing { file: PathBuf },

    /// The git hook manager could not be run or exited non-zero
    #[error("git hook installation failed ({command}): {reason}")]
    HookInstall { command: String, reason: String },

    /// An external command could not be started or exited non-zero
    #[error("command '{command}' failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// Archive creation failed
    #[error("package creation failed for {archive}: {reason}")]
    Packaging { archive: PathBuf, reason: String },

    /// Path escapes the workspace root (security issue)
    #[error("path '{path}' escapes workspace root '{root}'")]
    PathEscape { path: PathBuf, root: PathBuf },

    /// The workspace root itself cannot be used
    #[error("workspace root {path} is not readable: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error with the path it happened on
    #[error("{action} {path}: {source}")]
    PathIo {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An exclusion pattern failed to compile
    #[error("invalid exclusion pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Invalid configuration file or value
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl WorkspaceError {
    /// Attach a path and an action verb to an I/O error.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WorkspaceError::PathIo {
            action,
            path: path.into(),
            source,
        }
    }

    /// Classify the error according to the failure taxonomy.
    pub fn class(&self) -> ErrorClass {
        match self {
            WorkspaceError::DependencyInstall { .. }
            | WorkspaceError::MergeParse { .. }
            | WorkspaceError::MergeTargetMissing { .. } => ErrorClass::FatalSetup,
            WorkspaceError::HookInstall { .. } => ErrorClass::RecoverableTooling,
            WorkspaceError::Packaging { .. } => ErrorClass::FatalPackaging,
            _ => ErrorClass::Other,
        }
    }
}

//! CleanupTarget entity - one entry in the fixed cleanup sweep

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ExclusionCategory;

/// A thing the cleanup sweep removes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupTarget {
    /// Directory removed recursively
    Directory { path: PathBuf, description: String },
    /// Single file (or link) removed
    File { path: PathBuf, description: String },
    /// Every file under the root matching the category's exclusion patterns
    Glob {
        category: ExclusionCategory,
        description: String,
    },
}

impl CleanupTarget {
    pub fn directory(path: impl Into<PathBuf>, description: impl Into<String>) -> Self {
        CleanupTarget::Directory {
            path: path.into(),
            description: description.into(),
        }
    }

    pub fn file(path: impl Into<PathBuf>, description: impl Into<String>) -> Self {
        CleanupTarget::File {
            path: path.into(),
            description: description.into(),
        }
    }

    pub fn glob(category: ExclusionCategory, description: impl Into<String>) -> Self {
        CleanupTarget::Glob {
            category,
            description: description.into(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            CleanupTarget::Directory { description, .. }
            | CleanupTarget::File { description, .. }
            | CleanupTarget::Glob { description, .. } => description,
        }
    }

    /// Workspace-relative path for directory and file targets
    pub fn path(&self) -> Option<&Path> {
        match self {
            CleanupTarget::Directory { path, .. } | CleanupTarget::File { path, .. } => {
                Some(path)
            }
            CleanupTarget::Glob { .. } => None,
        }
    }
}

impl fmt::Display for CleanupTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanupTarget::Directory { path, description }
            | CleanupTarget::File { path, description } => {
                write!(f, "{}: {}", description, path.display())
            }
            CleanupTarget::Glob {
                category,
                description,
            } => write!(f, "{} ({} patterns)", description, category),
        }
    }
}

/// An ordered group of targets announced under one heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupPhase {
    pub heading: String,
    pub targets: Vec<CleanupTarget>,
}

impl CleanupPhase {
    pub fn new(heading: impl Into<String>, targets: Vec<CleanupTarget>) -> Self {
        Self {
            heading: heading.into(),
            targets,
        }
    }
}

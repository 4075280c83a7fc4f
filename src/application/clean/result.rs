//! Cleanup result types

use std::path::PathBuf;

/// A target that could not be removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRemoval {
    pub path: PathBuf,
    pub error: String,
}

/// Result of a cleanup run; paths are workspace-relative
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    /// Paths that were removed
    pub removed: Vec<PathBuf>,
    /// Targets that did not exist
    pub missing: Vec<PathBuf>,
    /// Targets whose removal failed
    pub failed: Vec<FailedRemoval>,
}

impl CleanupReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_removed(&mut self, path: PathBuf) {
        self.removed.push(path);
    }

    pub fn add_missing(&mut self, path: PathBuf) {
        self.missing.push(path);
    }

    pub fn add_failed(&mut self, path: PathBuf, error: String) {
        self.failed.push(FailedRemoval { path, error });
    }

    /// Fold another report into this one
    pub fn merge(&mut self, other: CleanupReport) {
        self.removed.extend(other.removed);
        self.missing.extend(other.missing);
        self.failed.extend(other.failed);
    }

    /// Get total count of targets considered
    pub fn total_count(&self) -> usize {
        self.removed.len() + self.missing.len() + self.failed.len()
    }

    /// Whether every removal that was attempted succeeded
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

//! Archiver port - produces a compressed snapshot of the workspace

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ExclusionMatcher;
use crate::error::WorkspaceResult;

/// What to archive and where
#[derive(Debug)]
pub struct ArchiveRequest {
    pub root: PathBuf,
    /// Final archive path (inside `root`)
    pub output: PathBuf,
    /// Paths matching this are left out, together with everything below them
    pub exclusions: ExclusionMatcher,
}

impl ArchiveRequest {
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>, exclusions: ExclusionMatcher) -> Self {
        Self {
            root: root.into(),
            output: output.into(),
            exclusions,
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

/// Writes the archive described by the request and returns its size in bytes.
///
/// The archive is never included in itself.
pub trait Archiver {
    fn create(&self, request: &ArchiveRequest) -> WorkspaceResult<u64>;
}

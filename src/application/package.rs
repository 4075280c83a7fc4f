//! Packaging engine
//!
//! Produces `<prefix>-<date>.tar.gz` at the workspace root, leaving out the
//! exclusion set and earlier snapshots.

use chrono::NaiveDate;

use crate::domain::entities::{archive_file_name, archive_glob, PackageManifest};
use crate::domain::ports::{ArchiveRequest, Archiver};
use crate::domain::value_objects::{ExclusionCategory, ExclusionSet, WorkspaceRoot};
use crate::error::{WorkspaceError, WorkspaceResult};

pub struct PackagingEngine<'a, A: Archiver + ?Sized> {
    archiver: &'a A,
}

impl<'a, A: Archiver + ?Sized> PackagingEngine<'a, A> {
    pub fn new(archiver: &'a A) -> Self {
        Self { archiver }
    }

    pub fn create(
        &self,
        root: &WorkspaceRoot,
        prefix: &str,
        date: NaiveDate,
    ) -> WorkspaceResult<PackageManifest> {
        let file_name = archive_file_name(prefix, date);
        let output = root.resolve(&file_name)?;

        let exclusions = ExclusionSet::standard()
            .with_pattern(archive_glob(prefix), ExclusionCategory::Snapshot)
            .matcher()
            .map_err(|e| WorkspaceError::Packaging {
                archive: output.clone(),
                reason: e.to_string(),
            })?;
        let request = ArchiveRequest::new(root.path(), &output, exclusions);

        let size = self.archiver.create(&request).map_err(|e| match e {
            WorkspaceError::Packaging { .. } => e,
            other => WorkspaceError::Packaging {
                archive: output.clone(),
                reason: other.to_string(),
            },
        })?;

        Ok(PackageManifest::new(file_name, output, size))
    }
}

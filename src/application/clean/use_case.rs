//! Cleanup Engine
//!
//! Removes cleanup targets inside the workspace root. Individual removal
//! failures are reported and skipped; only an unreadable root is fatal.

use std::path::{Path, PathBuf};

use crate::domain::entities::{CleanupPhase, CleanupTarget};
use crate::domain::ports::{FileSystem, Reporter};
use crate::domain::value_objects::{ExclusionCategory, ExclusionSet, WorkspaceRoot};
use crate::error::{WorkspaceError, WorkspaceResult};

use super::result::CleanupReport;

pub struct CleanupEngine<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem + ?Sized> CleanupEngine<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    /// Fail if the root cannot be listed.
    pub fn check_root(&self, root: &WorkspaceRoot) -> WorkspaceResult<()> {
        match self.fs.read_dir(root.path()) {
            Ok(_) => Ok(()),
            Err(WorkspaceError::PathIo { source, .. }) => Err(WorkspaceError::RootUnreadable {
                path: root.path().to_path_buf(),
                source,
            }),
            Err(other) => Err(other),
        }
    }

    /// Run every phase in order.
    pub fn run(
        &self,
        root: &WorkspaceRoot,
        phases: &[CleanupPhase],
        reporter: &dyn Reporter,
    ) -> WorkspaceResult<CleanupReport> {
        self.check_root(root)?;
        let mut report = CleanupReport::new();
        for phase in phases {
            report.merge(self.run_phase(root, phase, reporter)?);
        }
        Ok(report)
    }

    /// Run one phase: a heading, then each target.
    pub fn run_phase(
        &self,
        root: &WorkspaceRoot,
        phase: &CleanupPhase,
        reporter: &dyn Reporter,
    ) -> WorkspaceResult<CleanupReport> {
        reporter.heading(&phase.heading);
        let mut report = CleanupReport::new();
        for target in &phase.targets {
            match target {
                CleanupTarget::Directory { path, description }
                | CleanupTarget::File { path, description } => {
                    self.remove_path(root, path, description, reporter, &mut report);
                }
                CleanupTarget::Glob {
                    category,
                    description,
                } => {
                    self.sweep(root, *category, description, reporter, &mut report)?;
                }
            }
        }
        Ok(report)
    }

    fn remove_path(
        &self,
        root: &WorkspaceRoot,
        rel: &Path,
        description: &str,
        reporter: &dyn Reporter,
        report: &mut CleanupReport,
    ) {
        let abs = match root.resolve(rel) {
            Ok(abs) => abs,
            Err(e) => {
                reporter.warning(&format!("Failed to remove {}: {}", description, e));
                report.add_failed(rel.to_path_buf(), e.to_string());
                return;
            }
        };

        if !self.fs.exists(&abs) {
            reporter.info(&format!("{} not found: {}", description, rel.display()));
            report.add_missing(rel.to_path_buf());
            return;
        }

        match self.remove(&abs) {
            Ok(()) => {
                reporter.success(&format!("Removed {}: {}", description, rel.display()));
                report.add_removed(rel.to_path_buf());
            }
            Err(e) => {
                reporter.warning(&format!("Failed to remove {}: {}", description, e));
                report.add_failed(rel.to_path_buf(), e.to_string());
            }
        }
    }

    fn remove(&self, abs: &Path) -> WorkspaceResult<()> {
        if self.fs.is_dir(abs) {
            self.fs.remove_dir_all(abs)
        } else {
            self.fs.remove_file(abs)
        }
    }

    /// Delete every file under the root matching the category's patterns.
    fn sweep(
        &self,
        root: &WorkspaceRoot,
        category: ExclusionCategory,
        description: &str,
        reporter: &dyn Reporter,
        report: &mut CleanupReport,
    ) -> WorkspaceResult<()> {
        let matcher = ExclusionSet::standard().matcher_for(&[category])?;
        let mut matched: Vec<PathBuf> = Vec::new();

        for entry in walkdir::WalkDir::new(root.path()).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(WorkspaceError::RootUnreadable {
                        path: root.path().to_path_buf(),
                        source: err
                            .into_io_error()
                            .unwrap_or_else(|| std::io::Error::other("walk failed")),
                    });
                }
                Err(err) => {
                    reporter.warning(&format!("Skipping unreadable path: {}", err));
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }
            let Some(rel) = root.relative(entry.path()) else {
                continue;
            };
            if matcher.matches_entry(rel, false) {
                matched.push(rel.to_path_buf());
            }
        }

        let mut failures = 0;
        for rel in matched {
            match self.fs.remove_file(&root.path().join(&rel)) {
                Ok(()) => {
                    reporter.detail(&format!("Removed {}", rel.display()));
                    report.add_removed(rel);
                }
                Err(e) => {
                    failures += 1;
                    reporter.warning(&format!("Failed to remove {}: {}", description, e));
                    report.add_failed(rel, e.to_string());
                }
            }
        }

        if failures == 0 {
            reporter.success(&format!("Cleaned up {}", description));
        }
        Ok(())
    }
}

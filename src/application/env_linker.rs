//! Environment linker
//!
//! Points every application's `.env` at the root one. A symbolic link is
//! preferred; where the platform refuses, the root file is copied instead.

use crate::domain::entities::{AppTarget, ENV_FILE_NAME};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::WorkspaceRoot;
use crate::error::WorkspaceResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Linked,
    /// Symlink creation failed for `reason`; the root file was copied
    Copied { reason: String },
}

pub struct EnvironmentLinker<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem + ?Sized> EnvironmentLinker<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    /// Replace `app`'s environment file with a reference to the root one.
    ///
    /// The root `.env` must already exist. The app directory is created if
    /// missing.
    pub fn link(&self, root: &WorkspaceRoot, app: &AppTarget) -> WorkspaceResult<LinkOutcome> {
        let app_dir = root.resolve(app.path())?;
        let env_path = root.resolve(app.env_path())?;

        self.fs.create_dir_all(&app_dir)?;
        if self.fs.is_dir(&env_path) {
            self.fs.remove_dir_all(&env_path)?;
        } else if self.fs.exists(&env_path) {
            self.fs.remove_file(&env_path)?;
        }

        let reason = match self.fs.symlink(&app.link_target(), &env_path) {
            Ok(()) => return Ok(LinkOutcome::Linked),
            Err(e) => e.to_string(),
        };

        let root_env = root.resolve(ENV_FILE_NAME)?;
        let bytes = self.fs.read_bytes(&root_env)?;
        self.fs.write_bytes(&env_path, &bytes)?;
        Ok(LinkOutcome::Copied { reason })
    }
}

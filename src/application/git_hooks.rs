//! Git hook installer

use std::path::{Path, PathBuf};

use crate::domain::ports::{CommandRunner, FileSystem, Invocation};
use crate::domain::services::artifacts;
use crate::domain::value_objects::WorkspaceRoot;
use crate::error::{WorkspaceError, WorkspaceResult};

use super::config_writer::ConfigWriter;

pub struct GitHookInstaller<'a, FS, R>
where
    FS: FileSystem + ?Sized,
    R: CommandRunner + ?Sized,
{
    fs: &'a FS,
    runner: &'a R,
}

impl<'a, FS, R> GitHookInstaller<'a, FS, R>
where
    FS: FileSystem + ?Sized,
    R: CommandRunner + ?Sized,
{
    pub fn new(fs: &'a FS, runner: &'a R) -> Self {
        Self { fs, runner }
    }

    /// Run the hook manager, then write an executable pre-commit hook that
    /// runs `lint_staged_command`.
    ///
    /// A hook manager failure is returned as `HookInstall` before anything is
    /// written.
    pub fn install(
        &self,
        root: &WorkspaceRoot,
        hook_manager: &str,
        hook_dir: &Path,
        lint_staged_command: &str,
    ) -> WorkspaceResult<PathBuf> {
        let invocation =
            Invocation::parse(hook_manager).ok_or_else(|| WorkspaceError::HookInstall {
                command: hook_manager.to_string(),
                reason: "empty command".to_string(),
            })?;

        self.runner
            .run(&invocation, root.path())
            .map_err(|e| match e {
                WorkspaceError::CommandFailed { command, reason } => {
                    WorkspaceError::HookInstall { command, reason }
                }
                other => WorkspaceError::HookInstall {
                    command: invocation.to_string(),
                    reason: other.to_string(),
                },
            })?;

        let hook = artifacts::pre_commit_hook(hook_dir, lint_staged_command);
        ConfigWriter::new(self.fs).write(root, &hook)?;

        let hook_path = root.resolve(hook.path())?;
        self.fs.set_executable(&hook_path)?;
        Ok(hook_path)
    }
}

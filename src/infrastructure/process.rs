//! External command execution

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{CommandRunner, Invocation};
use crate::error::{WorkspaceError, WorkspaceResult};

/// Runs commands as child processes and waits for them.
///
/// Output is inherited in text mode and discarded in quiet (JSON) mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner {
    quiet: bool,
}

impl SystemCommandRunner {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn command(invocation: &Invocation) -> Command {
        if cfg!(windows) {
            // npm and npx are .cmd shims
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(invocation.program()).args(invocation.args());
            cmd
        } else {
            let mut cmd = Command::new(invocation.program());
            cmd.args(invocation.args());
            cmd
        }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, invocation: &Invocation, cwd: &Path) -> WorkspaceResult<()> {
        let mut cmd = Self::command(invocation);
        cmd.current_dir(cwd);
        if self.quiet {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
        }

        let failed = |reason: String| WorkspaceError::CommandFailed {
            command: invocation.to_string(),
            reason,
        };

        let status = cmd.status().map_err(|e| failed(e.to_string()))?;
        if status.success() {
            return Ok(());
        }
        Err(failed(match status.code() {
            Some(code) => format!("exited with status {}", code),
            None => "terminated by signal".to_string(),
        }))
    }
}

//! CommandRunner port - runs external developer tools

use std::fmt;
use std::path::Path;

use crate::error::WorkspaceResult;

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a configured command line on whitespace.
    ///
    /// Returns `None` for a blank line. Quoting is not interpreted.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program, parts))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs a command to completion in `cwd`.
///
/// A spawn failure or a non-zero exit status is an `Err`
/// (`WorkspaceError::CommandFailed`).
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation, cwd: &Path) -> WorkspaceResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_program_and_args() {
        let inv = Invocation::parse("npx husky install").unwrap();
        assert_eq!(inv.program(), "npx");
        assert_eq!(inv.args(), &["husky".to_string(), "install".to_string()]);
        assert_eq!(inv.to_string(), "npx husky install");
    }

    #[test]
    fn parse_blank_is_none() {
        assert!(Invocation::parse("   ").is_none());
    }
}

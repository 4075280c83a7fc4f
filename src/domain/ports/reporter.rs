//! Reporter port
//!
//! Every human-facing message goes through here, tagged with a level. The
//! console, JSON and recording sinks live in `infrastructure::events`.

use std::fmt;

/// Message severity and role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Section or banner line
    Heading,
    Success,
    Info,
    Warning,
    Error,
    /// Per-path detail, shown in verbose mode
    Detail,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Heading => "heading",
            Level::Success => "success",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Detail => "detail",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives progress and outcome messages
pub trait Reporter {
    fn report(&self, level: Level, message: &str);

    /// Emitted once at the end of a command
    fn complete(&self, _command: &str, _success: bool) {}

    fn heading(&self, message: &str) {
        self.report(Level::Heading, message);
    }

    fn success(&self, message: &str) {
        self.report(Level::Success, message);
    }

    fn info(&self, message: &str) {
        self.report(Level::Info, message);
    }

    fn warning(&self, message: &str) {
        self.report(Level::Warning, message);
    }

    fn error(&self, message: &str) {
        self.report(Level::Error, message);
    }

    fn detail(&self, message: &str) {
        self.report(Level::Detail, message);
    }
}

//! JSON Reporter
//!
//! Outputs reporter messages as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{Level, Reporter};

/// Reporter that writes one JSON object per line
pub struct JsonReporter {
    command: String,
    /// Mutex to ensure whole-line writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonReporter {
    /// Create a new JSON reporter writing to stdout
    pub fn stdout(command: impl Into<String>) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON reporter writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(command: impl Into<String>, writer: W) -> Self {
        Self {
            command: command.into(),
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl Reporter for JsonReporter {
    fn report(&self, level: Level, message: &str) {
        self.write_event(serde_json::json!({
            "event": "log",
            "command": self.command,
            "level": level.as_str(),
            "message": message,
        }));
    }

    fn complete(&self, command: &str, success: bool) {
        self.write_event(serde_json::json!({
            "event": "complete",
            "command": command,
            "success": success,
        }));
    }
}

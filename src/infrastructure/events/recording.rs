//! In-memory reporter for tests and embedding

use std::sync::Mutex;

use crate::domain::ports::{Level, Reporter};

/// Keeps every message it receives
#[derive(Debug, Default)]
pub struct RecordingReporter {
    entries: Mutex<Vec<(Level, String)>>,
    completed: Mutex<Option<(String, bool)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Messages at one level, in order
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    /// Whether any message at `level` contains `needle`
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.messages(level).iter().any(|m| m.contains(needle))
    }

    pub fn completion(&self) -> Option<(String, bool)> {
        self.completed.lock().ok().and_then(|c| c.clone())
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, level: Level, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((level, message.to_string()));
        }
    }

    fn complete(&self, command: &str, success: bool) {
        if let Ok(mut completed) = self.completed.lock() {
            *completed = Some((command.to_string(), success));
        }
    }
}

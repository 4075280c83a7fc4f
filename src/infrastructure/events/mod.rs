//! Reporter Implementations
//!
//! - ConsoleReporter: styled terminal lines
//! - JsonReporter: NDJSON output for CI/automation
//! - RecordingReporter: in-memory capture

mod console;
mod json;
mod recording;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use recording::RecordingReporter;

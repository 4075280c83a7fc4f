//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `process` - External command runner
//! - `archive/` - tar.gz archiver
//! - `events/` - Reporter sinks (console, JSON, recording)

pub mod archive;
pub mod events;
pub mod fs;
pub mod process;

pub use archive::TarGzArchiver;
pub use events::{ConsoleReporter, JsonReporter, RecordingReporter};
pub use fs::LocalFs;
pub use process::SystemCommandRunner;

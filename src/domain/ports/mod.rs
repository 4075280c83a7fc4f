//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod archiver;
pub mod command_runner;
pub mod file_system;
pub mod reporter;

pub use archiver::{ArchiveRequest, Archiver};
pub use command_runner::{CommandRunner, Invocation};
pub use file_system::FileSystem;
pub use reporter::{Level, Reporter};

//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the application components touch the workspace without depending on
//! the local implementation, so tests can substitute failing or recording
//! file systems.

use std::path::{Path, PathBuf};

use crate::error::WorkspaceResult;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test doubles that deny specific operations
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> WorkspaceResult<String>;

    /// Read raw bytes
    fn read_bytes(&self, path: &Path) -> WorkspaceResult<Vec<u8>>;

    /// Write content to file atomically, creating parent directories
    fn write(&self, path: &Path, content: &str) -> WorkspaceResult<()>;

    /// Write raw bytes atomically, creating parent directories
    fn write_bytes(&self, path: &Path, content: &[u8]) -> WorkspaceResult<()>;

    /// Whether anything exists at `path`, without following a final symlink
    /// (a dangling link exists)
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is a real directory (a symlink to a directory is not)
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a file or symlink
    fn remove_file(&self, path: &Path) -> WorkspaceResult<()>;

    /// Remove a directory tree
    fn remove_dir_all(&self, path: &Path) -> WorkspaceResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> WorkspaceResult<()>;

    /// List the entries of a directory
    fn read_dir(&self, path: &Path) -> WorkspaceResult<Vec<PathBuf>>;

    /// Create a symbolic link at `link` pointing at `target`
    fn symlink(&self, target: &Path, link: &Path) -> WorkspaceResult<()>;

    /// Mark a file executable (0755 on Unix; no-op elsewhere)
    fn set_executable(&self, path: &Path) -> WorkspaceResult<()>;
}

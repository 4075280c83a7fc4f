//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::error::{WorkspaceError, WorkspaceResult};

/// Local file system implementation
///
/// Writes go through a temp file in the target directory and are renamed
/// into place.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> WorkspaceResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)
            .map_err(|e| WorkspaceError::io("failed to create directory", parent, e))?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)
            .map_err(|e| WorkspaceError::io("failed to create temp file in", parent, e))?;
        tmp.write_all(content)
            .and_then(|_| tmp.flush())
            .map_err(|e| WorkspaceError::io("failed to write", path, e))?;
        tmp.persist(path)
            .map_err(|e| WorkspaceError::io("failed to write", path, e.error))?;
        Ok(())
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> WorkspaceResult<String> {
        std::fs::read_to_string(path).map_err(|e| WorkspaceError::io("failed to read", path, e))
    }

    fn read_bytes(&self, path: &Path) -> WorkspaceResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| WorkspaceError::io("failed to read", path, e))
    }

    fn write(&self, path: &Path, content: &str) -> WorkspaceResult<()> {
        self.write_atomic(path, content.as_bytes())
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> WorkspaceResult<()> {
        self.write_atomic(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path)
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }

    fn remove_file(&self, path: &Path) -> WorkspaceResult<()> {
        std::fs::remove_file(path).map_err(|e| WorkspaceError::io("failed to remove", path, e))
    }

    fn remove_dir_all(&self, path: &Path) -> WorkspaceResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| WorkspaceError::io("failed to remove", path, e))
    }

    fn create_dir_all(&self, path: &Path) -> WorkspaceResult<()> {
        std::fs::create_dir_all(path)
            .map_err(|e| WorkspaceError::io("failed to create directory", path, e))
    }

    fn read_dir(&self, path: &Path) -> WorkspaceResult<Vec<PathBuf>> {
        let read_err = |e| WorkspaceError::io("failed to read directory", path, e);
        std::fs::read_dir(path)
            .map_err(read_err)?
            .map(|entry| entry.map(|e| e.path()).map_err(read_err))
            .collect()
    }

    #[cfg(unix)]
    fn symlink(&self, target: &Path, link: &Path) -> WorkspaceResult<()> {
        std::os::unix::fs::symlink(target, link)
            .map_err(|e| WorkspaceError::io("failed to create symlink", link, e))
    }

    #[cfg(windows)]
    fn symlink(&self, target: &Path, link: &Path) -> WorkspaceResult<()> {
        std::os::windows::fs::symlink_file(target, link)
            .map_err(|e| WorkspaceError::io("failed to create symlink", link, e))
    }

    #[cfg(not(any(unix, windows)))]
    fn symlink(&self, _target: &Path, link: &Path) -> WorkspaceResult<()> {
        Err(WorkspaceError::io(
            "failed to create symlink",
            link,
            std::io::Error::new(std::io::ErrorKind::Unsupported, "symlinks not supported"),
        ))
    }

    #[cfg(unix)]
    fn set_executable(&self, path: &Path) -> WorkspaceResult<()> {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
            .map_err(|e| WorkspaceError::io("failed to set permissions on", path, e))
    }

    #[cfg(not(unix))]
    fn set_executable(&self, _path: &Path) -> WorkspaceResult<()> {
        Ok(())
    }
}

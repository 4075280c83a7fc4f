//! Workspace Root Value Object
//!
//! The absolute directory every operation is anchored to. Resolution through
//! this type guarantees:
//! - No absolute or traversal (`..`) components in relative targets
//! - Parent directories that are symlinks cannot smuggle a target outside
//! - The final component is never followed (removing a link removes the link)

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{WorkspaceError, WorkspaceResult};

/// Canonical, absolute workspace root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkspaceRoot(PathBuf);

impl WorkspaceRoot {
    /// Anchor at an existing directory.
    ///
    /// Relative inputs are resolved against the current directory and the
    /// result is canonicalized, so later prefix checks compare like with like.
    pub fn new<P: AsRef<Path>>(path: P) -> WorkspaceResult<Self> {
        let path = path.as_ref();
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };

        let canonical = absolute
            .canonicalize()
            .map_err(|source| WorkspaceError::RootUnreadable {
                path: absolute.clone(),
                source,
            })?;

        if !canonical.is_dir() {
            return Err(WorkspaceError::RootUnreadable {
                path: canonical,
                source: std::io::Error::other("not a directory"),
            });
        }

        Ok(Self(canonical))
    }

    /// The absolute root path
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Resolve a root-relative path to an absolute one inside the root.
    pub fn resolve<P: AsRef<Path>>(&self, relative: P) -> WorkspaceResult<PathBuf> {
        let relative = relative.as_ref();
        let escape = || WorkspaceError::PathEscape {
            path: relative.to_path_buf(),
            root: self.0.clone(),
        };

        let mut resolved = self.0.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(escape());
                }
            }
        }

        if resolved == self.0 {
            return Err(escape());
        }

        // Only the parent chain is checked; the leaf may legitimately be a link.
        if let Some(ancestor) = resolved.parent().and_then(existing_ancestor) {
            let canonical = ancestor.canonicalize()?;
            if !canonical.starts_with(&self.0) {
                return Err(escape());
            }
        }

        Ok(resolved)
    }

    /// Whether an absolute path lies inside the root (lexically).
    pub fn contains(&self, path: &Path) -> bool {
        path.starts_with(&self.0)
            && !path
                .components()
                .any(|component| matches!(component, Component::ParentDir))
    }

    /// Strip the root prefix from an absolute path inside the root.
    pub fn relative<'a>(&self, path: &'a Path) -> Option<&'a Path> {
        path.strip_prefix(&self.0).ok()
    }
}

fn existing_ancestor(path: &Path) -> Option<&Path> {
    path.ancestors().find(|candidate| candidate.exists())
}

impl fmt::Display for WorkspaceRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for WorkspaceRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn resolves_nested_relative_path() {
        let dir = tempdir().unwrap();
        let root = WorkspaceRoot::new(dir.path()).unwrap();

        let resolved = root.resolve("apps/api/node_modules").unwrap();

        assert!(resolved.starts_with(root.path()));
        assert!(resolved.ends_with("apps/api/node_modules"));
    }

    #[test]
    fn ignores_current_dir_components() {
        let dir = tempdir().unwrap();
        let root = WorkspaceRoot::new(dir.path()).unwrap();

        let resolved = root.resolve("./apps/./web/.env").unwrap();
        assert_eq!(resolved, root.path().join("apps/web/.env"));
    }

    #[test]
    fn rejects_traversal() {
        let dir = tempdir().unwrap();
        let root = WorkspaceRoot::new(dir.path()).unwrap();

        let result = root.resolve("apps/../../escape");
        assert!(matches!(result, Err(WorkspaceError::PathEscape { .. })));
    }

    #[test]
    fn rejects_absolute() {
        let dir = tempdir().unwrap();
        let root = WorkspaceRoot::new(dir.path()).unwrap();

        #[cfg(windows)]
        let absolute_path = "C:\\Windows\\System32";
        #[cfg(not(windows))]
        let absolute_path = "/etc/passwd";

        let result = root.resolve(absolute_path);
        assert!(matches!(result, Err(WorkspaceError::PathEscape { .. })));
    }

    #[test]
    fn rejects_root_itself() {
        let dir = tempdir().unwrap();
        let root = WorkspaceRoot::new(dir.path()).unwrap();

        assert!(root.resolve("").is_err());
        assert!(root.resolve(".").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn rejects_symlinked_parent_outside_root() {
        let dir = tempdir().unwrap();
        let outside = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("apps")).unwrap();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("apps/api")).unwrap();

        let root = WorkspaceRoot::new(dir.path()).unwrap();
        let result = root.resolve("apps/api/node_modules");

        assert!(matches!(result, Err(WorkspaceError::PathEscape { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn allows_symlink_leaf() {
        let dir = tempdir().unwrap();
        let outside = tempdir().unwrap();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("node_modules")).unwrap();

        let root = WorkspaceRoot::new(dir.path()).unwrap();
        assert!(root.resolve("node_modules").is_ok());
    }

    #[test]
    fn missing_root_is_unreadable() {
        let dir = tempdir().unwrap();
        let result = WorkspaceRoot::new(dir.path().join("missing"));
        assert!(matches!(result, Err(WorkspaceError::RootUnreadable { .. })));
    }

    #[test]
    fn file_root_is_unreadable() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();

        let result = WorkspaceRoot::new(&file);
        assert!(matches!(result, Err(WorkspaceError::RootUnreadable { .. })));
    }

    #[test]
    fn contains_and_relative() {
        let dir = tempdir().unwrap();
        let root = WorkspaceRoot::new(dir.path()).unwrap();
        let inside = root.path().join("apps/web");

        assert!(root.contains(&inside));
        assert!(!root.contains(&root.path().join("../other")));
        assert_eq!(root.relative(&inside), Some(Path::new("apps/web")));
    }
}

//! AppTarget entity - one sub-application that receives an environment reference

use std::path::{Component, Path, PathBuf};

/// File name of every environment file (root and per app)
pub const ENV_FILE_NAME: &str = ".env";

/// A sub-application whose `.env` mirrors the root one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppTarget {
    name: String,
    path: PathBuf,
    env_path: PathBuf,
}

impl AppTarget {
    /// Build from a workspace-relative application directory (e.g. `apps/api`).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let env_path = path.join(ENV_FILE_NAME);
        Self {
            name,
            path,
            env_path,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Workspace-relative application directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Workspace-relative environment file path
    pub fn env_path(&self) -> &Path {
        &self.env_path
    }

    /// Link target for the environment reference, relative to the app directory.
    ///
    /// `apps/api` yields `../../.env`.
    pub fn link_target(&self) -> PathBuf {
        let depth = self
            .path
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .count();
        let mut target = PathBuf::new();
        for _ in 0..depth {
            target.push("..");
        }
        target.push(ENV_FILE_NAME);
        target
    }
}

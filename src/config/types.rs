//! Configuration type definitions

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{WorkspaceError, WorkspaceResult};

/// Workspace members
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Application directories; each gets an environment reference
    #[serde(default = "default_apps")]
    pub apps: Vec<PathBuf>,

    /// Shared package directories
    #[serde(default = "default_packages")]
    pub packages: Vec<PathBuf>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            apps: default_apps(),
            packages: default_packages(),
        }
    }
}

fn default_apps() -> Vec<PathBuf> {
    vec![PathBuf::from("apps/api"), PathBuf::from("apps/web")]
}

fn default_packages() -> Vec<PathBuf> {
    vec![
        PathBuf::from("packages/eslint-config"),
        PathBuf::from("packages/typescript-config"),
    ]
}

/// External tool command lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_install")]
    pub install: String,

    #[serde(default = "default_hooks")]
    pub hooks: String,

    #[serde(default = "default_lint_staged")]
    pub lint_staged: String,

    #[serde(default = "default_hook_dir")]
    pub hook_dir: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            install: default_install(),
            hooks: default_hooks(),
            lint_staged: default_lint_staged(),
            hook_dir: default_hook_dir(),
        }
    }
}

fn default_install() -> String {
    "npm install".to_string()
}

fn default_hooks() -> String {
    "npx husky install".to_string()
}

fn default_lint_staged() -> String {
    "npx lint-staged".to_string()
}

fn default_hook_dir() -> PathBuf {
    PathBuf::from(".husky")
}

/// Packaging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

fn default_prefix() -> String {
    "ntr-clean".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub workspace: WorkspaceConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Reject member paths that could leave the workspace and unusable values.
    pub fn validate(&self, file: &Path) -> WorkspaceResult<()> {
        let invalid = |message: String| WorkspaceError::InvalidConfig {
            file: file.to_path_buf(),
            message,
        };

        let members = self
            .workspace
            .apps
            .iter()
            .map(|p| ("workspace.apps", p))
            .chain(self.workspace.packages.iter().map(|p| ("workspace.packages", p)))
            .chain(std::iter::once(("tools.hook_dir", &self.tools.hook_dir)));
        for (key, path) in members {
            if !is_plain_relative(path) {
                return Err(invalid(format!(
                    "{} entry '{}' must be a relative path inside the workspace",
                    key,
                    path.display()
                )));
            }
        }

        let prefix = &self.package.prefix;
        if prefix.is_empty() || prefix.contains(['/', '\\']) || prefix.starts_with('.') {
            return Err(invalid(format!(
                "package.prefix '{}' must be a plain file name",
                prefix
            )));
        }
        if prefix.contains(['*', '?', '[', ']', '!']) {
            return Err(invalid(format!(
                "package.prefix '{}' must not contain glob characters",
                prefix
            )));
        }

        if self.tools.install.trim().is_empty() {
            return Err(invalid("tools.install must not be empty".to_string()));
        }

        Ok(())
    }
}

fn is_plain_relative(path: &Path) -> bool {
    let mut normal = 0;
    for component in path.components() {
        match component {
            Component::Normal(_) => normal += 1,
            Component::CurDir => {}
            _ => return false,
        }
    }
    normal > 0
}

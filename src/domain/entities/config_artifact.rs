//! ConfigArtifact entity - a configuration file the workspace provisions

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::WorkspaceResult;

/// Whether user edits to the artifact survive a re-run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Written once; never overwritten
    Template,
    /// Regenerated or merged on every run
    Derived,
}

/// How the artifact reaches disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WritePolicy {
    /// Write only when the target path does not exist
    IfAbsent,
    /// Always replace the whole file
    Overwrite,
    /// Set one top-level key inside an existing document
    MergeKey(String),
}

/// Generated content
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactContent {
    Text(String),
    Json(Value),
}

impl ArtifactContent {
    /// Render to file bytes. JSON is pretty-printed (two spaces) with a trailing newline.
    pub fn render(&self) -> WorkspaceResult<String> {
        match self {
            ArtifactContent::Text(text) => Ok(text.clone()),
            ArtifactContent::Json(value) => {
                let mut out = serde_json::to_string_pretty(value)?;
                out.push('\n');
                Ok(out)
            }
        }
    }
}

/// A configuration file provisioned inside the workspace
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigArtifact {
    path: PathBuf,
    policy: WritePolicy,
    content: ArtifactContent,
}

impl ConfigArtifact {
    /// A write-if-absent artifact
    pub fn template(path: impl Into<PathBuf>, content: ArtifactContent) -> Self {
        Self {
            path: path.into(),
            policy: WritePolicy::IfAbsent,
            content,
        }
    }

    /// An always-rewritten artifact
    pub fn derived(path: impl Into<PathBuf>, content: ArtifactContent) -> Self {
        Self {
            path: path.into(),
            policy: WritePolicy::Overwrite,
            content,
        }
    }

    /// A single key merged into an existing JSON document
    pub fn merged(path: impl Into<PathBuf>, key: impl Into<String>, value: Value) -> Self {
        Self {
            path: path.into(),
            policy: WritePolicy::MergeKey(key.into()),
            content: ArtifactContent::Json(value),
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        match self.policy {
            WritePolicy::IfAbsent => ArtifactKind::Template,
            WritePolicy::Overwrite | WritePolicy::MergeKey(_) => ArtifactKind::Derived,
        }
    }

    /// Workspace-relative target path
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> &WritePolicy {
        &self.policy
    }

    pub fn content(&self) -> &ArtifactContent {
        &self.content
    }
}

//! Config writer
//!
//! Applies a `ConfigArtifact` to the workspace according to its write policy.

use serde_json::Value;

use crate::domain::entities::{ArtifactContent, ConfigArtifact, WritePolicy};
use crate::domain::ports::FileSystem;
use crate::domain::services::OrderedDocument;
use crate::domain::value_objects::WorkspaceRoot;
use crate::error::{WorkspaceError, WorkspaceResult};

/// What happened to an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist and was written
    Created,
    /// A write-if-absent file already existed and was left alone
    Preserved,
    /// An existing file was replaced
    Rewritten,
    /// One key was set inside an existing document
    Merged,
}

pub struct ConfigWriter<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem + ?Sized> ConfigWriter<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    pub fn write(
        &self,
        root: &WorkspaceRoot,
        artifact: &ConfigArtifact,
    ) -> WorkspaceResult<WriteOutcome> {
        let path = root.resolve(artifact.path())?;
        let existed = self.fs.exists(&path);

        match artifact.policy() {
            WritePolicy::IfAbsent if existed => Ok(WriteOutcome::Preserved),
            WritePolicy::IfAbsent => {
                self.fs.write(&path, &artifact.content().render()?)?;
                Ok(WriteOutcome::Created)
            }
            WritePolicy::Overwrite => {
                self.fs.write(&path, &artifact.content().render()?)?;
                Ok(if existed {
                    WriteOutcome::Rewritten
                } else {
                    WriteOutcome::Created
                })
            }
            WritePolicy::MergeKey(key) => {
                if !existed {
                    return Err(WorkspaceError::MergeTargetMissing {
                        file: artifact.path().to_path_buf(),
                    });
                }
                let text = self.fs.read(&path)?;
                let mut document =
                    OrderedDocument::parse(&text).map_err(|e| WorkspaceError::MergeParse {
                        file: artifact.path().to_path_buf(),
                        message: e.to_string(),
                    })?;

                let value = match artifact.content() {
                    ArtifactContent::Json(value) => value.clone(),
                    ArtifactContent::Text(text) => Value::String(text.clone()),
                };
                document.set(key.as_str(), value);

                self.fs.write(&path, &document.to_pretty_string()?)?;
                Ok(WriteOutcome::Merged)
            }
        }
    }
}

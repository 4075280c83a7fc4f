//! Domain Entities
//!
//! Derived fresh on every invocation; nothing here is persisted on its own.

mod app_target;
mod cleanup_target;
mod config_artifact;
mod package_manifest;

pub use app_target::{AppTarget, ENV_FILE_NAME};
pub use cleanup_target::{CleanupPhase, CleanupTarget};
pub use config_artifact::{ArtifactContent, ArtifactKind, ConfigArtifact, WritePolicy};
pub use package_manifest::{archive_file_name, archive_glob, PackageManifest, ARCHIVE_EXTENSION};

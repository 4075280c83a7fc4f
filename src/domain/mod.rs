//! Domain Layer
//!
//! Workspace model and rules, free of direct I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - WorkspaceRoot, ExclusionSet
//! - `entities/` - AppTarget, ConfigArtifact, CleanupTarget, PackageManifest
//! - `services/` - artifact catalog, cleanup plan, ordered documents
//! - `ports/` - FileSystem, CommandRunner, Archiver, Reporter

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

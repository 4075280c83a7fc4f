//! Gzip-compressed tar archiver

use std::fs;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::domain::ports::{ArchiveRequest, Archiver};
use crate::error::{WorkspaceError, WorkspaceResult};

/// Builds `.tar.gz` snapshots in-process
#[derive(Debug, Clone, Copy, Default)]
pub struct TarGzArchiver;

impl TarGzArchiver {
    pub fn new() -> Self {
        Self
    }
}

fn entry_name(rel: &Path) -> String {
    rel.to_string_lossy().replace('\\', "/")
}

impl Archiver for TarGzArchiver {
    fn create(&self, request: &ArchiveRequest) -> WorkspaceResult<u64> {
        let root = request.root.as_path();
        let output = request.output();
        let failed = |reason: String| WorkspaceError::Packaging {
            archive: output.to_path_buf(),
            reason,
        };

        let out_dir = output.parent().unwrap_or(root);
        let tmp = tempfile::Builder::new()
            .prefix(".ntr-archive-")
            .suffix(".tmp")
            .tempfile_in(out_dir)
            .map_err(|e| failed(format!("cannot create temp file: {}", e)))?;
        let tmp_path = tmp.path().to_path_buf();

        let encoder = GzEncoder::new(tmp.as_file(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        builder.follow_symlinks(false);

        let walker = walkdir::WalkDir::new(root)
            .follow_links(false)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let path = entry.path();
                if path == tmp_path || path == output {
                    return false;
                }
                match path.strip_prefix(root) {
                    Ok(rel) => !request
                        .exclusions
                        .is_excluded(rel, entry.file_type().is_dir()),
                    Err(_) => false,
                }
            });

        for entry in walker {
            let entry = entry.map_err(|e| failed(e.to_string()))?;
            let path = entry.path();
            let rel = path
                .strip_prefix(root)
                .map_err(|e| failed(e.to_string()))?;
            let name = entry_name(rel);

            let result = if entry.file_type().is_dir() {
                builder.append_dir(&name, path)
            } else {
                builder.append_path_with_name(path, &name)
            };
            result.map_err(|e| failed(format!("{}: {}", name, e)))?;
        }

        builder
            .into_inner()
            .and_then(|encoder| encoder.finish())
            .map_err(|e| failed(e.to_string()))?;

        tmp.persist(output)
            .map_err(|e| failed(e.error.to_string()))?;

        fs::metadata(output)
            .map(|m| m.len())
            .map_err(|e| failed(e.to_string()))
    }
}

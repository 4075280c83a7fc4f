//! PackageManifest entity - the snapshot archive produced by packaging

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// Extension of every snapshot archive
pub const ARCHIVE_EXTENSION: &str = "tar.gz";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Archive file name for a prefix and calendar date: `<prefix>-<YYYY-MM-DD>.tar.gz`.
///
/// Two runs on the same date produce the same name; the later one overwrites.
pub fn archive_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.{}", prefix, date.format("%Y-%m-%d"), ARCHIVE_EXTENSION)
}

/// Glob matching every snapshot a prefix can produce
pub fn archive_glob(prefix: &str) -> String {
    format!("{}-*.{}", prefix, ARCHIVE_EXTENSION)
}

/// A created snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManifest {
    file_name: String,
    path: PathBuf,
    size_bytes: u64,
}

impl PackageManifest {
    pub fn new(file_name: impl Into<String>, path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            path: path.into(),
            size_bytes,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Absolute path of the archive
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Size in binary megabytes
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_MB
    }

    /// Size rounded to two decimals, e.g. `1.50 MB`
    pub fn display_size(&self) -> String {
        format!("{:.2} MB", self.size_mb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_embeds_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            archive_file_name("ntr-clean", date),
            "ntr-clean-2024-03-07.tar.gz"
        );
    }

    #[test]
    fn glob_covers_generated_names() {
        assert_eq!(archive_glob("ntr-clean"), "ntr-clean-*.tar.gz");
    }

    #[test]
    fn size_in_binary_megabytes() {
        let manifest = PackageManifest::new("a.tar.gz", "/tmp/a.tar.gz", 1_572_864);
        assert_eq!(manifest.display_size(), "1.50 MB");

        let small = PackageManifest::new("b.tar.gz", "/tmp/b.tar.gz", 2048);
        assert_eq!(small.display_size(), "0.00 MB");
        assert!(small.size_mb() > 0.0);
    }
}

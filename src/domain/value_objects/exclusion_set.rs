//! Exclusion set value object
//!
//! The single declared list of generated-artifact patterns. Cleanup sweeps a
//! subset of it (logs and OS artifacts); packaging excludes all of it.
//! Matching uses gitignore semantics from the `ignore` crate: a pattern
//! without a slash matches a file or directory name at any depth.

use std::fmt;
use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::{WorkspaceError, WorkspaceResult};

/// What kind of artifact a pattern describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExclusionCategory {
    DependencyCache,
    BuildOutput,
    ToolCache,
    Log,
    OsArtifact,
    Environment,
    TempDir,
    LockFile,
    /// Earlier snapshots produced by packaging
    Snapshot,
}

impl fmt::Display for ExclusionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExclusionCategory::DependencyCache => "dependency cache",
            ExclusionCategory::BuildOutput => "build output",
            ExclusionCategory::ToolCache => "tool cache",
            ExclusionCategory::Log => "log",
            ExclusionCategory::OsArtifact => "OS artifact",
            ExclusionCategory::Environment => "environment file",
            ExclusionCategory::TempDir => "temporary directory",
            ExclusionCategory::LockFile => "lock file",
            ExclusionCategory::Snapshot => "package snapshot",
        };
        write!(f, "{}", label)
    }
}

/// One pattern and its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionPattern {
    pub pattern: String,
    pub category: ExclusionCategory,
}

const STANDARD: &[(&str, ExclusionCategory)] = &[
    ("node_modules", ExclusionCategory::DependencyCache),
    ("dist", ExclusionCategory::BuildOutput),
    ("build", ExclusionCategory::BuildOutput),
    (".turbo", ExclusionCategory::ToolCache),
    (".next", ExclusionCategory::ToolCache),
    (".vite", ExclusionCategory::ToolCache),
    ("npm-debug.log*", ExclusionCategory::Log),
    ("yarn-debug.log*", ExclusionCategory::Log),
    ("yarn-error.log*", ExclusionCategory::Log),
    ("lerna-debug.log*", ExclusionCategory::Log),
    ("*.log", ExclusionCategory::Log),
    (".DS_Store", ExclusionCategory::OsArtifact),
    ("Thumbs.db", ExclusionCategory::OsArtifact),
    ("ehthumbs.db", ExclusionCategory::OsArtifact),
    ("*.tmp", ExclusionCategory::OsArtifact),
    ("*.temp", ExclusionCategory::OsArtifact),
    (".env", ExclusionCategory::Environment),
    ("tmp", ExclusionCategory::TempDir),
    ("temp", ExclusionCategory::TempDir),
    ("package-lock.json", ExclusionCategory::LockFile),
];

/// Ordered list of exclusion patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    patterns: Vec<ExclusionPattern>,
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl ExclusionSet {
    /// The workspace's declared exclusions.
    pub fn standard() -> Self {
        Self {
            patterns: STANDARD
                .iter()
                .map(|(pattern, category)| ExclusionPattern {
                    pattern: (*pattern).to_string(),
                    category: *category,
                })
                .collect(),
        }
    }

    /// An empty set (matches nothing).
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Append one more pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>, category: ExclusionCategory) -> Self {
        self.patterns.push(ExclusionPattern {
            pattern: pattern.into(),
            category,
        });
        self
    }

    pub fn patterns(&self) -> &[ExclusionPattern] {
        &self.patterns
    }

    /// Patterns belonging to any of the given categories, in declaration order.
    pub fn of_categories<'a>(
        &'a self,
        categories: &'a [ExclusionCategory],
    ) -> impl Iterator<Item = &'a ExclusionPattern> + 'a {
        self.patterns
            .iter()
            .filter(move |p| categories.contains(&p.category))
    }

    /// Compile every pattern into one matcher.
    pub fn matcher(&self) -> WorkspaceResult<ExclusionMatcher> {
        ExclusionMatcher::build(self.patterns.iter())
    }

    /// Compile only the patterns of the given categories.
    pub fn matcher_for(&self, categories: &[ExclusionCategory]) -> WorkspaceResult<ExclusionMatcher> {
        ExclusionMatcher::build(self.of_categories(categories))
    }
}

/// Compiled gitignore-style matcher over workspace-relative paths
#[derive(Debug)]
pub struct ExclusionMatcher {
    matcher: Gitignore,
    pattern_count: usize,
}

impl ExclusionMatcher {
    fn build<'a>(patterns: impl Iterator<Item = &'a ExclusionPattern>) -> WorkspaceResult<Self> {
        let mut builder = GitignoreBuilder::new("");
        let mut pattern_count = 0;

        for p in patterns {
            builder
                .add_line(None, &p.pattern)
                .map_err(|e| WorkspaceError::InvalidPattern {
                    pattern: p.pattern.clone(),
                    message: e.to_string(),
                })?;
            pattern_count += 1;
        }

        let matcher = builder
            .build()
            .map_err(|e| WorkspaceError::InvalidPattern {
                pattern: "<set>".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            matcher,
            pattern_count,
        })
    }

    /// Check a workspace-relative path (or any of its parents) against the set.
    pub fn is_excluded(&self, rel_path: &Path, is_dir: bool) -> bool {
        if rel_path.as_os_str().is_empty() || rel_path.has_root() {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }

    /// Check only the entry itself; a matching parent directory is ignored.
    pub fn matches_entry(&self, rel_path: &Path, is_dir: bool) -> bool {
        if rel_path.as_os_str().is_empty() || rel_path.has_root() {
            return false;
        }
        self.matcher.matched(rel_path, is_dir).is_ignore()
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }
}

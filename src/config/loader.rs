//! Configuration loading

use std::fs;
use std::path::Path;

use crate::domain::value_objects::ConfigWarning;
use crate::error::{WorkspaceError, WorkspaceResult};

use super::types::{ColorMode, Config};

/// Workspace configuration file, relative to the root
pub const CONFIG_FILE_NAME: &str = "ntr.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> WorkspaceResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| WorkspaceError::io("failed to read", path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| WorkspaceError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `<root>/ntr.toml` if present, apply environment overrides and validate.
pub fn load_for_root(root: &Path) -> WorkspaceResult<(Config, Vec<ConfigWarning>)> {
    let path = root.join(CONFIG_FILE_NAME);
    let (config, warnings) = if path.exists() {
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };

    let config = with_env_overrides(config, |key| std::env::var(key).ok());
    config.validate(&path)?;
    Ok((config, warnings))
}

/// Apply environment variable overrides
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    // NTR_ARCHIVE_PREFIX
    if let Some(prefix) = get_env("NTR_ARCHIVE_PREFIX") {
        let prefix = prefix.trim();
        if !prefix.is_empty() {
            config.package.prefix = prefix.to_string();
        }
    }

    // NTR_NO_COLOR / NO_COLOR (any value)
    if get_env("NTR_NO_COLOR").is_some() || get_env("NO_COLOR").is_some() {
        config.output.color = ColorMode::Never;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "workspace",
        "apps",
        "packages",
        "tools",
        "install",
        "hooks",
        "lint_staged",
        "hook_dir",
        "package",
        "prefix",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

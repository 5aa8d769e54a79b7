//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StagingError, StagingResult};

use super::types::StagingConfig;

/// Project config file, next to the build manifest
pub const PROJECT_CONFIG_FILE: &str = "stagedeploy.toml";

pub const ENV_PROFILE: &str = "STAGEDEPLOY_PROFILE";
pub const ENV_STAGING_ROOT: &str = "STAGEDEPLOY_STAGING_ROOT";
pub const ENV_REPOSITORY_ID: &str = "STAGEDEPLOY_REPOSITORY_ID";
pub const ENV_OFFLINE: &str = "STAGEDEPLOY_OFFLINE";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StagingResult<(StagingConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| StagingError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: StagingConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StagingError::InvalidConfig {
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

/// Locate and load configuration.
///
/// An explicit file wins; otherwise the project config next to the manifest,
/// then the user config, then defaults. Environment overrides are applied on
/// top and relative paths are anchored at `project_dir`.
pub fn load_layered(
    explicit: Option<&Path>,
    project_dir: &Path,
) -> StagingResult<(StagingConfig, Vec<ConfigWarning>)> {
    let candidates = match explicit {
        Some(path) => vec![path.to_path_buf()],
        None => {
            let mut candidates = vec![project_dir.join(PROJECT_CONFIG_FILE)];
            if let Some(user) = user_config_path() {
                candidates.push(user);
            }
            candidates
        }
    };

    let mut loaded = None;
    for path in &candidates {
        // an explicit file is read even when missing so the error surfaces
        if explicit.is_some() || path.is_file() {
            tracing::debug!(config = %path.display(), "loading configuration");
            loaded = Some(load_with_warnings(path)?);
            break;
        }
    }
    let (config, warnings) = loaded.unwrap_or_default();

    Ok((with_env_overrides(config).resolve_paths(project_dir), warnings))
}

/// `<config_dir>/stagedeploy/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stagedeploy").join("config.toml"))
}

/// Apply environment variable overrides (STAGEDEPLOY_* prefix)
pub fn with_env_overrides(config: StagingConfig) -> StagingConfig {
    apply_env(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_env<F>(mut config: StagingConfig, lookup: F) -> StagingConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(profile) = lookup(ENV_PROFILE).and_then(|v| v.parse().ok()) {
        config.staging.profile = profile;
    }

    if let Some(root) = lookup(ENV_STAGING_ROOT).filter(|v| !v.trim().is_empty()) {
        config.staging.root = PathBuf::from(root);
    }

    if let Some(id) = lookup(ENV_REPOSITORY_ID).filter(|v| !v.trim().is_empty()) {
        config.staging.repository_id = Some(id);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "staging",
        "root",
        "profile",
        "repository_id",
        "description",
        "repository",
        "id",
        "path",
        "manager",
        "profiles",
        "name",
        "groups",
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
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
pub(crate) fn suggest_key_for_tests(unknown: &str) -> Option<String> {
    suggest_key(unknown)
}

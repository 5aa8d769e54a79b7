//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ProfileSelection, StagingProfile};
use crate::error::StagingResult;

use super::loader::{self, ConfigWarning};

/// Local staging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingSection {
    #[serde(default = "default_staging_root")]
    pub root: PathBuf,

    #[serde(default)]
    pub profile: ProfileSelection,

    /// Deposit into this existing repository (unmanaged)
    #[serde(default)]
    pub repository_id: Option<String>,

    /// Description for repositories opened by a commit
    #[serde(default)]
    pub description: Option<String>,
}

impl Default for StagingSection {
    fn default() -> Self {
        Self {
            root: default_staging_root(),
            profile: ProfileSelection::Auto,
            repository_id: None,
            description: None,
        }
    }
}

fn default_staging_root() -> PathBuf {
    PathBuf::from("target/staging")
}

/// Direct-deploy target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySection {
    #[serde(default = "default_repository_id")]
    pub id: String,

    #[serde(default = "default_repository_path")]
    pub path: PathBuf,
}

impl Default for RepositorySection {
    fn default() -> Self {
        Self {
            id: default_repository_id(),
            path: default_repository_path(),
        }
    }
}

fn default_repository_id() -> String {
    "releases".to_string()
}

fn default_repository_path() -> PathBuf {
    PathBuf::from("target/repository")
}

/// Directory-backed repository manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerSection {
    #[serde(default = "default_manager_path")]
    pub path: PathBuf,
}

impl Default for ManagerSection {
    fn default() -> Self {
        Self {
            path: default_manager_path(),
        }
    }
}

fn default_manager_path() -> PathBuf {
    PathBuf::from("target/staging-manager")
}

/// One entry of the profile catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    /// `com.example` for an exact group, `org.acme.*` for a group tree
    #[serde(default)]
    pub groups: Vec<String>,
}

impl ProfileConfig {
    pub fn profile(&self) -> StagingProfile {
        StagingProfile::new(
            self.id.clone(),
            self.name.clone().unwrap_or_else(|| self.id.clone()),
        )
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingConfig {
    #[serde(default)]
    pub staging: StagingSection,

    #[serde(default)]
    pub repository: RepositorySection,

    #[serde(default)]
    pub manager: ManagerSection,

    #[serde(default)]
    pub profiles: Vec<ProfileConfig>,
}

impl StagingConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StagingResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> StagingResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (STAGEDEPLOY_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Anchor relative paths at `base` (the project directory)
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let anchor = |path: PathBuf| {
            if path.is_absolute() {
                path
            } else {
                base.join(path)
            }
        };
        self.staging.root = anchor(self.staging.root);
        self.repository.path = anchor(self.repository.path);
        self.manager.path = anchor(self.manager.path);
        self
    }
}

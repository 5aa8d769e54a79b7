//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (STAGEDEPLOY_*)
//! 3. Project config (`stagedeploy.toml` next to the build manifest)
//! 4. User config (`<config dir>/stagedeploy/config.toml`)
//! 5. Built-in defaults (lowest priority)
//!
//! Only the first config file found is read; files are not merged.

mod loader;
mod types;

pub use loader::{
    load_layered, user_config_path, ConfigWarning, ENV_OFFLINE, ENV_PROFILE, ENV_REPOSITORY_ID,
    ENV_STAGING_ROOT, PROJECT_CONFIG_FILE,
};
pub use types::{ManagerSection, ProfileConfig, RepositorySection, StagingConfig, StagingSection};

//! Command entry points
//!
//! Each command loads configuration, wires the coordinators through the
//! presentation factory and reports through the event sink.

mod commit;
mod deploy;
mod status;

use std::path::Path;

use anyhow::{Context, Result};

use stagedeploy::config::{self, StagingConfig};
use stagedeploy::presentation::cli::StoreArgs;

pub use commit::cmd_commit;
pub use deploy::cmd_deploy;
pub use status::cmd_status;

/// Layered configuration for a project rooted at `project_dir`, with the
/// shared CLI overrides applied
fn load_config(store: &StoreArgs, project_dir: &Path, json: bool) -> Result<StagingConfig> {
    let (mut config, warnings) = config::load_layered(store.config.as_deref(), project_dir)
        .context("failed to load configuration")?;

    for warning in &warnings {
        tracing::warn!(key = %warning.key, file = %warning.file.display(), "unknown config key");
        if !json {
            eprintln!("Warning: {}", warning);
        }
    }

    if let Some(root) = &store.staging_root {
        config.staging.root = root.clone();
    }
    Ok(config)
}

fn current_dir() -> Result<std::path::PathBuf> {
    std::env::current_dir().context("cannot determine the current directory")
}

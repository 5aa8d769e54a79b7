//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::{DeployDirectives, ProfileSelection};

/// stagedeploy - staged deployment for multi-module builds
#[derive(Parser, Debug)]
#[command(name = "stagedeploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy the modules of a build, staging releases locally
    Deploy(DeployArgs),

    /// List locally staged profiles and files
    Status(StatusArgs),

    /// Commit local staging content to the repository manager
    Commit(CommitArgs),
}

/// Settings shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Local staging root
    #[arg(long)]
    pub staging_root: Option<PathBuf>,

    /// Configuration file (default: stagedeploy.toml in the project directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct DeployArgs {
    /// Build manifest describing modules and their artifacts
    #[arg(short, long, default_value = "build.toml")]
    pub build: PathBuf,

    /// Deploy only this module (default: every module in build order)
    #[arg(short, long)]
    pub module: Option<String>,

    /// Bypass staged deploy entirely
    #[arg(long)]
    pub skip: bool,

    /// Deploy directly instead of staging locally
    #[arg(long)]
    pub skip_local_staging: bool,

    /// Stage locally but do not push to the repository manager
    #[arg(long)]
    pub skip_remote_staging: bool,

    /// Flag primary artifacts as releases
    #[arg(long)]
    pub mark_release: bool,

    /// Staging profile id, or "auto" to match by group
    #[arg(long)]
    pub profile: Option<ProfileSelection>,

    /// Deposit into this existing staging repository
    #[arg(long)]
    pub repository_id: Option<String>,

    /// The repository manager must not be contacted
    #[arg(long, env = "STAGEDEPLOY_OFFLINE")]
    pub offline: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

impl DeployArgs {
    pub fn directives(&self) -> DeployDirectives {
        DeployDirectives::new()
            .with_skip(self.skip)
            .with_skip_local_staging(self.skip_local_staging)
            .with_skip_remote_staging(self.skip_remote_staging)
            .with_mark_as_release(self.mark_release)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct StatusArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CommitArgs {
    /// Deposit into this existing staging repository
    #[arg(long)]
    pub repository_id: Option<String>,

    /// The repository manager must not be contacted
    #[arg(long, env = "STAGEDEPLOY_OFFLINE")]
    pub offline: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

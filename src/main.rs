//! stagedeploy CLI - staged deployment for multi-module builds
//!
//! Usage: stagedeploy <COMMAND>
//!
//! Commands:
//!   deploy  Deploy the modules of a build, staging releases locally
//!   status  List locally staged profiles and files
//!   commit  Commit local staging content to the repository manager

mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stagedeploy::presentation::{Cli, Commands};
use stagedeploy::StagingError;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Deploy(args) => commands::cmd_deploy(args, cli.json, cli.verbose),
        Commands::Status(args) => commands::cmd_status(args, cli.json, cli.verbose),
        Commands::Commit(args) => commands::cmd_commit(args, cli.json, cli.verbose),
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(exit_code(&err));
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the default level
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("stagedeploy={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Exit code of the first `StagingError` in the cause chain, 1 otherwise
fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<StagingError>())
        .map(StagingError::exit_code)
        .unwrap_or(1)
}

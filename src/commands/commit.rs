//! Commit command
//!
//! Pushes whatever the local staging store holds to the repository manager.

use anyhow::{Context, Result};

use stagedeploy::domain::value_objects::Connectivity;
use stagedeploy::presentation::cli::CommitArgs;
use stagedeploy::presentation::factory;

pub fn cmd_commit(args: &CommitArgs, json: bool, verbose: u8) -> Result<()> {
    let cwd = super::current_dir()?;
    let mut config = super::load_config(&args.store, &cwd, json)?;
    if let Some(id) = &args.repository_id {
        config.staging.repository_id = Some(id.clone());
    }

    Connectivity::from_offline_flag(args.offline).ensure_online("commit staged artifacts")?;

    let events = factory::create_event_sink(json, verbose, "commit");
    let store = factory::create_store(&config);
    let client = factory::create_client(&config);
    let report = factory::create_remote_coordinator(&store, &client, events)
        .commit(&factory::commit_options(&config))
        .with_context(|| format!("commit of {} failed", config.staging.root.display()))?;

    if !json && !report.is_empty() {
        println!(
            "Committed {} file(s) to {} staging repository(ies)",
            report.uploaded(),
            report.profiles.len()
        );
    }
    Ok(())
}

//! Status command
//!
//! Lists what the local staging store holds, e.g. content kept by
//! `--skip-remote-staging` or left behind by a failed commit.

use anyhow::{Context, Result};

use stagedeploy::domain::ports::StagingStore;
use stagedeploy::infrastructure::store::ProfileStatus;
use stagedeploy::presentation::cli::StatusArgs;
use stagedeploy::presentation::factory;

pub fn cmd_status(args: &StatusArgs, json: bool, verbose: u8) -> Result<()> {
    let cwd = super::current_dir()?;
    let config = super::load_config(&args.store, &cwd, json)?;
    let store = factory::create_store(&config);

    let profiles = store
        .profiles()
        .with_context(|| format!("cannot read staging root {}", store.root().display()))?;

    if json {
        emit_json(&store, &profiles);
        return Ok(());
    }

    if profiles.is_empty() {
        println!("Nothing staged in {}", store.root().display());
        return Ok(());
    }

    println!("Staging root: {}", store.root().display());
    for profile in &profiles {
        let state = match &profile.committed {
            Some(marker) => format!(
                "committed to {} at {}",
                marker.repository_id,
                marker.committed_at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            None => "pending".to_string(),
        };
        println!("  {:<24} {:>4} file(s)  {}", profile.profile_id, profile.files, state);

        if verbose > 0 && profile.committed.is_none() {
            for file in store.files(&profile.profile_id)? {
                println!("    {}", file.relative_path.display());
            }
        }
    }
    Ok(())
}

fn emit_json(store: &impl StagingStore, profiles: &[ProfileStatus]) {
    #[derive(serde::Serialize)]
    struct JsonProfile<'a> {
        profile: &'a str,
        files: usize,
        committed: bool,
        repository: Option<&'a str>,
        committed_at: Option<chrono::DateTime<chrono::Utc>>,
    }

    let items: Vec<JsonProfile> = profiles
        .iter()
        .map(|p| JsonProfile {
            profile: &p.profile_id,
            files: p.files,
            committed: p.committed.is_some(),
            repository: p.committed.as_ref().map(|m| m.repository_id.as_str()),
            committed_at: p.committed.as_ref().map(|m| m.committed_at),
        })
        .collect();

    let value = serde_json::json!({
        "event": "status",
        "command": "status",
        "staging_root": store.root().display().to_string(),
        "profiles": items,
    });
    println!("{}", value);
}

//! Deploy command
//!
//! Processes one module (`--module`, as a build tool invokes it per module)
//! or every module of the manifest in build order within one session.

use anyhow::{Context, Result};

use stagedeploy::application::{DeployOptions, ModuleReport, RemoteOutcome, StagingSession};
use stagedeploy::domain::value_objects::Connectivity;
use stagedeploy::infrastructure::BuildManifest;
use stagedeploy::presentation::cli::DeployArgs;
use stagedeploy::presentation::factory;

pub fn cmd_deploy(args: &DeployArgs, json: bool, verbose: u8) -> Result<()> {
    let manifest = BuildManifest::load(&args.build)
        .with_context(|| format!("cannot read build manifest {}", args.build.display()))?;

    let mut config = super::load_config(&args.store, manifest.dir(), json)?;
    if let Some(profile) = &args.profile {
        config.staging.profile = profile.clone();
    }
    if let Some(id) = &args.repository_id {
        config.staging.repository_id = Some(id.clone());
    }

    let events = factory::create_event_sink(json, verbose, "deploy");
    let coordinator = factory::create_deploy_coordinator(&config, events);
    let options = DeployOptions::new(factory::deployment_repository(&config))
        .with_directives(args.directives())
        .with_connectivity(Connectivity::from_offline_flag(args.offline))
        .with_profile(config.staging.profile.clone())
        .with_commit(factory::commit_options(&config));

    let mut units = match &args.module {
        Some(module) => vec![manifest.unit(module)?],
        None => manifest.units(),
    };

    let mut session = StagingSession::begin(manifest.sequence());
    let mut reports = Vec::with_capacity(units.len());
    for unit in &mut units {
        let report = coordinator
            .deploy_module(&mut session, unit, &options)
            .with_context(|| format!("deploy of module '{}' failed", unit.module()))?;
        reports.push(report);
    }
    let state = session.finish();
    tracing::debug!(?state, "deploy finished");

    if !json {
        print_summary(&reports);
    }
    Ok(())
}

fn print_summary(reports: &[ModuleReport]) {
    let dispatched: usize = reports.iter().map(|r| r.dispatched.len()).sum();
    let skipped = reports.iter().filter(|r| r.skipped).count();
    let mut line = format!(
        "Deploy complete: {} module(s), {} artifact(s)",
        reports.len(),
        dispatched
    );
    if skipped > 0 {
        line.push_str(&format!(", {} skipped", skipped));
    }
    println!("{}", line);

    for report in reports {
        match &report.remote {
            RemoteOutcome::Committed(commit) => println!(
                "Committed {} file(s) to {} staging repository(ies)",
                commit.uploaded(),
                commit.profiles.len()
            ),
            RemoteOutcome::Skipped { staging_root } => println!(
                "Run 'stagedeploy commit --staging-root {}' to push the staged content later",
                staging_root.display()
            ),
            RemoteOutcome::NotTriggered => {}
        }
    }
}

//! Coordinator Factory
//!
//! Creates coordinators with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{CommitOptions, DeployCoordinator, RemoteStagingCoordinator};
use crate::config::StagingConfig;
use crate::domain::ports::{DeploymentRepository, StagingEventSink};
use crate::infrastructure::{
    ConsoleEventSink, DirectoryStagingClient, FileRepositoryDeployer, JsonEventSink,
    LocalStagingStore, ProfileRule,
};

/// Type alias for the DeployCoordinator with all dependencies
pub type ConcreteDeployCoordinator =
    DeployCoordinator<FileRepositoryDeployer, LocalStagingStore, DirectoryStagingClient>;

/// NDJSON in `--json` mode, console lines otherwise
pub fn create_event_sink(json: bool, verbose: u8, command: &'static str) -> Arc<dyn StagingEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        Arc::new(ConsoleEventSink::stdout(verbose > 0))
    }
}

pub fn create_store(config: &StagingConfig) -> LocalStagingStore {
    LocalStagingStore::new(&config.staging.root)
}

/// Repository manager client with the configured profile catalog
pub fn create_client(config: &StagingConfig) -> DirectoryStagingClient {
    let rules = config
        .profiles
        .iter()
        .map(|p| ProfileRule::new(p.profile(), p.groups.clone()))
        .collect();
    DirectoryStagingClient::new(&config.manager.path, rules)
}

pub fn deployment_repository(config: &StagingConfig) -> DeploymentRepository {
    DeploymentRepository::new(&config.repository.id, &config.repository.path)
}

pub fn commit_options(config: &StagingConfig) -> CommitOptions {
    let options = CommitOptions::new().with_repository_id(config.staging.repository_id.clone());
    match &config.staging.description {
        Some(description) => options.with_description(description),
        None => options,
    }
}

/// Create a deploy coordinator with all dependencies wired up
pub fn create_deploy_coordinator(
    config: &StagingConfig,
    events: Arc<dyn StagingEventSink>,
) -> ConcreteDeployCoordinator {
    DeployCoordinator::new(
        FileRepositoryDeployer::new(),
        create_store(config),
        create_client(config),
    )
    .with_events(events)
}

/// Remote coordinator over borrowed collaborators
pub fn create_remote_coordinator<'a>(
    store: &'a LocalStagingStore,
    client: &'a DirectoryStagingClient,
    events: Arc<dyn StagingEventSink>,
) -> RemoteStagingCoordinator<'a, LocalStagingStore, DirectoryStagingClient> {
    RemoteStagingCoordinator::new(store, client).with_events(events)
}

//! Deploy Coordinator
//!
//! Orchestrates one module's contribution to the staged deploy:
//! 1. Honor `skip`, force direct deploy for snapshots, require connectivity
//! 2. Route the module: direct deploy or local staging under a profile
//! 3. Dispatch the primary deployable, then every attached artifact
//! 4. On the last staging module, commit (or keep) what this build staged
//!
//! Modules that do not run the staging logic are always deployed directly.
//!
//! The coordinator never writes anything itself; the deployer, the staging
//! store and the staging client do.

use std::path::Path;
use std::sync::Arc;

use crate::application::remote::{CommitOptions, CommitReport, RemoteStagingCoordinator};
use crate::application::session::StagingSession;
use crate::domain::entities::{Artifact, ArtifactMetadata, ProjectDeployUnit};
use crate::domain::ports::{
    ArtifactDeployer, DeployedArtifact, DeploymentRepository, NoopEventSink, StagingClient,
    StagingEvent, StagingEventSink, StagingStore, TransportError,
};
use crate::domain::services::StagingProfileSelector;
use crate::domain::value_objects::RoutingDecision;
use crate::error::{StagingError, StagingResult};

use super::options::DeployOptions;
use super::result::{DispatchRecord, ModuleReport, RemoteOutcome};

/// Deploy coordinator - drives one module at a time
///
/// Parameterized by its collaborators (ports) so tests can substitute fakes.
pub struct DeployCoordinator<D, S, C>
where
    D: ArtifactDeployer,
    S: StagingStore,
    C: StagingClient,
{
    deployer: D,
    store: S,
    client: C,
    events: Arc<dyn StagingEventSink>,
}

impl<D, S, C> DeployCoordinator<D, S, C>
where
    D: ArtifactDeployer,
    S: StagingStore,
    C: StagingClient,
{
    pub fn new(deployer: D, store: S, client: C) -> Self {
        Self {
            deployer,
            store,
            client,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn StagingEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn deployer(&self) -> &D {
        &self.deployer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Deploy one module of the build
    pub fn deploy_module(
        &self,
        session: &mut StagingSession,
        unit: &mut ProjectDeployUnit,
        options: &DeployOptions,
    ) -> StagingResult<ModuleReport> {
        let module = unit.module().to_string();
        let span = tracing::info_span!("deploy_module", module = %module);
        let _guard = span.enter();

        let mut report = ModuleReport::new(&module);
        let directives = options.directives;

        if directives.skip {
            tracing::info!("skipping staged deploy");
            self.events.on_event(StagingEvent::ModuleSkipped { module });
            report.skipped = true;
            return Ok(report);
        }

        let participates = session.runs_staging(&module)?;
        let skip_local_staging = !participates
            || directives.effective_skip_local_staging(unit.primary().is_snapshot());
        options.connectivity.ensure_online("deploy")?;
        report.last_module = session.is_last(&module)?;
        if session.is_first(&module)? {
            self.store.reset_build().map_err(|source| self.store_error(source))?;
        }
        if !participates {
            tracing::info!("module does not run the staged deploy");
        }

        let routing = self.route(unit, options, skip_local_staging)?;
        self.events.on_event(StagingEvent::RoutingDecided {
            module: module.clone(),
            routing: routing.clone(),
        });

        if !unit.packaging().is_descriptor_only() {
            let descriptor = unit.descriptor().to_path_buf();
            unit.primary_mut()
                .attach_metadata(ArtifactMetadata::Descriptor { file: descriptor });
        }
        if directives.mark_as_release {
            unit.primary_mut().mark_release();
        }

        self.deploy_primary(unit, options, &routing, &mut report)?;

        for attached in unit.attached() {
            let artifact = unit.attached_for_dispatch(attached);
            let file = artifact
                .file()
                .ok_or_else(|| StagingError::MissingFile {
                    artifact: artifact.id(),
                })?
                .to_path_buf();
            self.dispatch(&file, &artifact, options, &routing, &mut report)?;
        }

        if !routing.skips_local_staging() {
            session.record_staged(&module);
            self.store
                .record_staged_module(&module)
                .map_err(|source| self.store_error(source))?;
        }
        self.events.on_event(StagingEvent::ModuleCompleted {
            module,
            dispatched: report.dispatched.len(),
        });
        report.routing = Some(routing);

        if report.last_module {
            report.remote = self.finish_build(session, options)?;
        }
        Ok(report)
    }

    /// Commit local staging content; only once per session
    pub fn commit(
        &self,
        session: &mut StagingSession,
        options: &CommitOptions,
    ) -> StagingResult<CommitReport> {
        session.begin_commit()?;
        RemoteStagingCoordinator::new(&self.store, &self.client)
            .with_events(Arc::clone(&self.events))
            .commit(options)
    }

    /// Route `artifact` to exactly one of the deployer and the staging store
    pub fn do_deploy(
        &self,
        file: &Path,
        artifact: &Artifact,
        repository: &DeploymentRepository,
        routing: &RoutingDecision,
    ) -> StagingResult<DeployedArtifact> {
        match routing.staging_dir() {
            None => self
                .deployer
                .deploy(file, artifact, repository)
                .map_err(|source| StagingError::Deploy {
                    artifact: artifact.id(),
                    source,
                }),
            Some(staging_dir) => self
                .store
                .stage(file, artifact, staging_dir)
                .map_err(|source| StagingError::Stage {
                    artifact: artifact.id(),
                    source,
                }),
        }
    }

    fn route(
        &self,
        unit: &ProjectDeployUnit,
        options: &DeployOptions,
        skip_local_staging: bool,
    ) -> StagingResult<RoutingDecision> {
        if skip_local_staging {
            tracing::info!("performing ordinary deploy");
            return Ok(RoutingDecision::Direct);
        }

        let profile_id =
            StagingProfileSelector::new(&self.client).select(&options.profile, unit.coordinates())?;
        let staging_dir = self
            .store
            .prepare(&profile_id)
            .map_err(|source| self.store_error(source))?;
        tracing::info!(
            "staging locally (stagingDirectory=\"{}\")",
            staging_dir.display()
        );
        Ok(RoutingDecision::Staged {
            profile_id,
            staging_dir,
        })
    }

    fn deploy_primary(
        &self,
        unit: &mut ProjectDeployUnit,
        options: &DeployOptions,
        routing: &RoutingDecision,
        report: &mut ModuleReport,
    ) -> StagingResult<()> {
        let deployed = if unit.packaging().is_descriptor_only() {
            let descriptor = self.descriptor_artifact(unit, options);
            self.dispatch(unit.descriptor(), &descriptor, options, routing, report)?
        } else if let Some(file) = unit.primary().existing_file() {
            let file = file.to_path_buf();
            self.dispatch(&file, unit.primary(), options, routing, report)?
        } else if unit.attached().is_empty() {
            return Err(StagingError::NothingToDeploy {
                module: unit.module().to_string(),
            });
        } else {
            tracing::info!("no primary artifact to deploy, deploying attached artifacts instead");
            self.events.on_event(StagingEvent::NoPrimaryArtifact {
                module: unit.module().to_string(),
            });
            let descriptor = self.descriptor_artifact(unit, options);
            self.dispatch(unit.descriptor(), &descriptor, options, routing, report)?
        };

        unit.propagate_resolved_version(deployed.resolved_version);
        Ok(())
    }

    fn descriptor_artifact(&self, unit: &ProjectDeployUnit, options: &DeployOptions) -> Artifact {
        let mut artifact = Artifact::descriptor_only(unit.coordinates().clone(), unit.descriptor());
        if options.directives.mark_as_release {
            artifact.mark_release();
        }
        artifact
    }

    fn dispatch(
        &self,
        file: &Path,
        artifact: &Artifact,
        options: &DeployOptions,
        routing: &RoutingDecision,
        report: &mut ModuleReport,
    ) -> StagingResult<DeployedArtifact> {
        let deployed = self.do_deploy(file, artifact, &options.repository, routing)?;
        let staged = !routing.skips_local_staging();
        tracing::debug!(artifact = %artifact, location = %deployed.location.display(), staged);

        let mut dispatched = artifact.clone();
        dispatched.set_resolved_version(deployed.resolved_version.clone());
        let record = DispatchRecord {
            artifact: dispatched.id(),
            location: deployed.location.clone(),
            staged,
        };
        if self.events.wants_detailed_events() {
            self.events.on_event(StagingEvent::ArtifactDispatched {
                module: report.module.clone(),
                artifact: record.artifact.clone(),
                location: record.location.clone(),
                staged,
            });
        }
        report.dispatched.push(record);
        Ok(deployed)
    }

    fn finish_build(
        &self,
        session: &mut StagingSession,
        options: &DeployOptions,
    ) -> StagingResult<RemoteOutcome> {
        let staged_in_build = !session.staged_modules().is_empty()
            || !self
                .store
                .staged_modules()
                .map_err(|source| self.store_error(source))?
                .is_empty();
        if !staged_in_build {
            tracing::debug!("last module reached, this build staged nothing locally");
            return Ok(RemoteOutcome::NotTriggered);
        }

        let pending = self
            .store
            .profile_ids()
            .map_err(|source| self.store_error(source))?;
        if pending.is_empty() {
            tracing::debug!("last module reached with nothing pending in the staging store");
            self.end_build()?;
            return Ok(RemoteOutcome::NotTriggered);
        }

        let staging_root = self.store.root().to_path_buf();
        if options.directives.skip_remote_staging {
            tracing::info!(
                "artifacts locally staged in directory {}, skipping remote staging at user's demand",
                staging_root.display()
            );
            self.events.on_event(StagingEvent::RemoteStagingSkipped {
                staging_root: staging_root.clone(),
            });
            self.end_build()?;
            return Ok(RemoteOutcome::Skipped { staging_root });
        }

        options.connectivity.ensure_online("commit staged artifacts")?;
        let committed = self.commit(session, &options.commit)?;
        self.end_build()?;
        Ok(RemoteOutcome::Committed(committed))
    }

    fn end_build(&self) -> StagingResult<()> {
        self.store
            .reset_build()
            .map_err(|source| self.store_error(source))
    }

    fn store_error(&self, source: TransportError) -> StagingError {
        StagingError::Store {
            root: self.store.root().to_path_buf(),
            source,
        }
    }
}

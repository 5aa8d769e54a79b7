//! In-memory collaborators shared by the use case tests

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::entities::{Artifact, StagingRepository};
use crate::domain::ports::{
    ArtifactDeployer, DeployedArtifact, DeploymentRepository, OpenRepository, StagedFile,
    StagingClient, StagingEvent, StagingEventSink, StagingStore, TransportError, TransportResult,
};
use crate::domain::services::artifact_path;
use crate::domain::value_objects::{Coordinates, RepositoryState, StagingProfile};

/// Version a fake deployment resolves a snapshot to
pub fn timestamped(base_version: &str) -> String {
    format!(
        "{}-20261016.101500-1",
        base_version.trim_end_matches("-SNAPSHOT")
    )
}

#[derive(Default)]
pub struct FakeDeployer {
    pub deployed: RefCell<Vec<Artifact>>,
    pub fail_on: Option<String>,
}

impl FakeDeployer {
    pub fn failing_on(extension: &str) -> Self {
        Self {
            fail_on: Some(extension.to_string()),
            ..Self::default()
        }
    }

    pub fn versions(&self) -> Vec<String> {
        self.deployed
            .borrow()
            .iter()
            .map(|a| a.version().to_string())
            .collect()
    }
}

impl ArtifactDeployer for FakeDeployer {
    fn deploy(
        &self,
        _file: &Path,
        artifact: &Artifact,
        repository: &DeploymentRepository,
    ) -> TransportResult<DeployedArtifact> {
        if self.fail_on.as_deref() == Some(artifact.extension()) {
            return Err(TransportError::Rejected {
                reason: "deployer refused".to_string(),
            });
        }
        let resolved_version = match artifact.resolved_version() {
            Some(version) => version.to_string(),
            None if artifact.is_snapshot() => timestamped(artifact.base_version()),
            None => artifact.version().to_string(),
        };
        let mut recorded = artifact.clone();
        recorded.set_resolved_version(resolved_version.clone());
        let location = repository.location.join(artifact_path(&recorded));
        self.deployed.borrow_mut().push(recorded);
        Ok(DeployedArtifact {
            resolved_version,
            location,
        })
    }
}

pub struct FakeStore {
    root: PathBuf,
    pub prepared: RefCell<Vec<String>>,
    pub staged: RefCell<BTreeMap<String, Vec<StagedFile>>>,
    pub committed: RefCell<Vec<(String, String)>>,
    pub build_modules: RefCell<Vec<String>>,
    pub fail_stage: bool,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("/build/target/staging"),
            prepared: RefCell::new(Vec::new()),
            staged: RefCell::new(BTreeMap::new()),
            committed: RefCell::new(Vec::new()),
            build_modules: RefCell::new(Vec::new()),
            fail_stage: false,
        }
    }

    pub fn with_files(self, profile_id: &str, relative: &[&str]) -> Self {
        let files = relative
            .iter()
            .map(|rel| StagedFile {
                relative_path: PathBuf::from(rel),
                path: self.root.join(profile_id).join(rel),
            })
            .collect();
        self.staged.borrow_mut().insert(profile_id.to_string(), files);
        self
    }

    /// Modules an earlier process of the same build staged
    pub fn with_build_modules(self, modules: &[&str]) -> Self {
        self.build_modules
            .borrow_mut()
            .extend(modules.iter().map(|m| m.to_string()));
        self
    }

    pub fn staged_count(&self) -> usize {
        self.staged.borrow().values().map(Vec::len).sum()
    }
}

impl StagingStore for FakeStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn prepare(&self, profile_id: &str) -> TransportResult<PathBuf> {
        self.prepared.borrow_mut().push(profile_id.to_string());
        Ok(self.root.join(profile_id))
    }

    fn stage(
        &self,
        _file: &Path,
        artifact: &Artifact,
        staging_dir: &Path,
    ) -> TransportResult<DeployedArtifact> {
        if self.fail_stage {
            return Err(TransportError::io(
                staging_dir,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }
        let profile_id = staging_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let relative_path = artifact_path(artifact);
        let path = staging_dir.join(&relative_path);
        let mut staged = self.staged.borrow_mut();
        let files = staged.entry(profile_id).or_default();
        files.retain(|f| f.relative_path != relative_path);
        files.push(StagedFile {
            relative_path,
            path: path.clone(),
        });
        Ok(DeployedArtifact {
            resolved_version: artifact.version().to_string(),
            location: path,
        })
    }

    fn profile_ids(&self) -> TransportResult<Vec<String>> {
        let committed = self.committed.borrow();
        Ok(self
            .staged
            .borrow()
            .keys()
            .filter(|id| !committed.iter().any(|(p, _)| p == *id))
            .cloned()
            .collect())
    }

    fn files(&self, profile_id: &str) -> TransportResult<Vec<StagedFile>> {
        let mut files = self
            .staged
            .borrow()
            .get(profile_id)
            .cloned()
            .unwrap_or_default();
        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    fn mark_committed(&self, profile_id: &str, repository_id: &str) -> TransportResult<()> {
        self.committed
            .borrow_mut()
            .push((profile_id.to_string(), repository_id.to_string()));
        Ok(())
    }

    fn reset_build(&self) -> TransportResult<()> {
        self.build_modules.borrow_mut().clear();
        Ok(())
    }

    fn record_staged_module(&self, module: &str) -> TransportResult<()> {
        let mut modules = self.build_modules.borrow_mut();
        if !modules.iter().any(|m| m == module) {
            modules.push(module.to_string());
        }
        Ok(())
    }

    fn staged_modules(&self) -> TransportResult<Vec<String>> {
        Ok(self.build_modules.borrow().clone())
    }
}

/// Repository manager double with a fixed profile catalog
pub struct FakeClient {
    pub profiles: Vec<StagingProfile>,
    pub queries: Cell<usize>,
    pub opened: RefCell<Vec<OpenRepository>>,
    pub uploads: RefCell<Vec<(String, PathBuf)>>,
    pub closed: RefCell<Vec<String>>,
    pub fail_upload_after: Option<usize>,
    pub close_state: RepositoryState,
}

impl FakeClient {
    pub fn with_profiles(ids: &[&str]) -> Self {
        Self {
            profiles: ids.iter().map(|id| StagingProfile::new(*id, *id)).collect(),
            queries: Cell::new(0),
            opened: RefCell::new(Vec::new()),
            uploads: RefCell::new(Vec::new()),
            closed: RefCell::new(Vec::new()),
            fail_upload_after: None,
            close_state: RepositoryState::Closed,
        }
    }

    pub fn uploaded_paths(&self) -> Vec<String> {
        self.uploads
            .borrow()
            .iter()
            .map(|(_, p)| p.to_string_lossy().replace('\\', "/"))
            .collect()
    }
}

impl StagingClient for FakeClient {
    fn list_profiles_matching(
        &self,
        _coordinates: &Coordinates,
    ) -> TransportResult<Vec<StagingProfile>> {
        self.queries.set(self.queries.get() + 1);
        Ok(self.profiles.clone())
    }

    fn open_repository(&self, request: &OpenRepository) -> TransportResult<StagingRepository> {
        self.opened.borrow_mut().push(request.clone());
        let profile = StagingProfile::new(request.profile_id(), request.profile_id());
        match request {
            OpenRepository::New { profile_id, .. } => {
                let sequence = self.opened.borrow().len();
                Ok(StagingRepository::new(
                    profile,
                    format!("{}-{:04}", profile_id, sequence),
                    true,
                ))
            }
            OpenRepository::Existing { repository_id, .. } => {
                // echo managed=true to check the coordinator does not trust it
                Ok(StagingRepository::new(profile, repository_id.clone(), true))
            }
        }
    }

    fn upload(
        &self,
        repository_id: &str,
        relative_path: &Path,
        _file: &Path,
    ) -> TransportResult<()> {
        if let Some(limit) = self.fail_upload_after {
            if self.uploads.borrow().len() >= limit {
                return Err(TransportError::Unreachable {
                    endpoint: "repository manager".to_string(),
                });
            }
        }
        self.uploads
            .borrow_mut()
            .push((repository_id.to_string(), relative_path.to_path_buf()));
        Ok(())
    }

    fn close(&self, repository_id: &str) -> TransportResult<RepositoryState> {
        self.closed.borrow_mut().push(repository_id.to_string());
        Ok(self.close_state.clone())
    }
}

/// Sink that keeps every event for later assertions
#[derive(Clone, Default)]
pub struct RecordingEventSink {
    events: Arc<Mutex<Vec<StagingEvent>>>,
}

impl RecordingEventSink {
    pub fn events(&self) -> Vec<StagingEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl StagingEventSink for RecordingEventSink {
    fn on_event(&self, event: StagingEvent) {
        self.events.lock().unwrap().push(event);
    }
}

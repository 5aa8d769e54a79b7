//! Remote Staging Coordinator
//!
//! For each profile with uncommitted local content:
//! 1. Open a new (managed) repository or reuse the explicit one (unmanaged)
//! 2. Upload every staged file under its relative path
//! 3. Close managed repositories; leave unmanaged ones untouched
//!
//! Failures abort the profile's transaction. Nothing is rolled back: a managed
//! repository that fails mid-upload is reported as needing manual cleanup.

use std::sync::Arc;

use crate::domain::entities::StagingRepository;
use crate::domain::ports::{
    NoopEventSink, OpenRepository, StagedFile, StagingClient, StagingEvent, StagingEventSink,
    StagingStore,
};
use crate::domain::value_objects::RepositoryState;
use crate::error::{StagingError, StagingResult};

use super::options::CommitOptions;
use super::result::{CommitReport, ProfileCommit};

pub struct RemoteStagingCoordinator<'a, S, C>
where
    S: StagingStore,
    C: StagingClient,
{
    store: &'a S,
    client: &'a C,
    events: Arc<dyn StagingEventSink>,
}

impl<'a, S, C> RemoteStagingCoordinator<'a, S, C>
where
    S: StagingStore,
    C: StagingClient,
{
    pub fn new(store: &'a S, client: &'a C) -> Self {
        Self {
            store,
            client,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn StagingEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Commit all uncommitted profiles in the store
    pub fn commit(&self, options: &CommitOptions) -> StagingResult<CommitReport> {
        let profiles = self.store.profile_ids().map_err(|source| StagingError::Store {
            root: self.store.root().to_path_buf(),
            source,
        })?;

        if profiles.is_empty() {
            tracing::info!("nothing staged locally, skipping remote commit");
            self.events.on_event(StagingEvent::NothingToCommit);
            return Ok(CommitReport::default());
        }

        if let Some(repository_id) = &options.repository_id {
            if profiles.len() > 1 {
                return Err(StagingError::RepositoryConflict {
                    repository_id: repository_id.clone(),
                    profiles,
                });
            }
        }

        let mut report = CommitReport::default();
        for profile_id in &profiles {
            report.profiles.push(self.commit_profile(profile_id, options)?);
        }
        Ok(report)
    }

    fn commit_profile(
        &self,
        profile_id: &str,
        options: &CommitOptions,
    ) -> StagingResult<ProfileCommit> {
        let span = tracing::info_span!("commit_profile", profile = %profile_id);
        let _guard = span.enter();

        let files = self.store.files(profile_id).map_err(|source| StagingError::Store {
            root: self.store.root().to_path_buf(),
            source,
        })?;

        let repository = self.open(profile_id, options)?;
        self.events.on_event(StagingEvent::RepositoryOpened {
            profile_id: profile_id.to_string(),
            repository_id: repository.repository_id().to_string(),
            managed: repository.is_managed(),
        });

        self.upload_all(&repository, &files)?;

        let state = if repository.is_managed() {
            Some(self.close(&repository)?)
        } else {
            tracing::info!(
                repository = repository.repository_id(),
                "repository was given explicitly, leaving it open"
            );
            self.events.on_event(StagingEvent::RepositoryLeftOpen {
                repository_id: repository.repository_id().to_string(),
            });
            None
        };

        self.store
            .mark_committed(profile_id, repository.repository_id())
            .map_err(|source| StagingError::Store {
                root: self.store.root().to_path_buf(),
                source,
            })?;

        Ok(ProfileCommit {
            profile_id: profile_id.to_string(),
            repository_id: repository.repository_id().to_string(),
            managed: repository.is_managed(),
            uploaded: files.len(),
            state,
        })
    }

    fn open(&self, profile_id: &str, options: &CommitOptions) -> StagingResult<StagingRepository> {
        let request = match &options.repository_id {
            Some(repository_id) => OpenRepository::Existing {
                profile_id: profile_id.to_string(),
                repository_id: repository_id.clone(),
            },
            None => OpenRepository::New {
                profile_id: profile_id.to_string(),
                description: options.description.clone(),
            },
        };
        let managed = matches!(request, OpenRepository::New { .. });

        let opened = self
            .client
            .open_repository(&request)
            .map_err(|source| StagingError::Open {
                profile_id: profile_id.to_string(),
                source,
            })?;

        tracing::info!(
            repository = opened.repository_id(),
            managed,
            "staging repository ready"
        );
        // managed-ness is decided by how we asked, not by what the manager echoes
        Ok(StagingRepository::new(
            opened.profile().clone(),
            opened.repository_id(),
            managed,
        ))
    }

    fn upload_all(&self, repository: &StagingRepository, files: &[StagedFile]) -> StagingResult<()> {
        let detailed = self.events.wants_detailed_events();
        for file in files {
            self.client
                .upload(repository.repository_id(), &file.relative_path, &file.path)
                .map_err(|source| {
                    if repository.is_managed() {
                        tracing::warn!(
                            repository = repository.repository_id(),
                            "upload failed; repository left open for manual cleanup"
                        );
                    }
                    StagingError::Upload {
                        repository_id: repository.repository_id().to_string(),
                        path: file.relative_path.clone(),
                        managed: repository.is_managed(),
                        source,
                    }
                })?;
            if detailed {
                self.events.on_event(StagingEvent::FileUploaded {
                    repository_id: repository.repository_id().to_string(),
                    path: file.relative_path.clone(),
                });
            }
        }
        Ok(())
    }

    fn close(&self, repository: &StagingRepository) -> StagingResult<RepositoryState> {
        let state = self
            .client
            .close(repository.repository_id())
            .map_err(|source| StagingError::Close {
                repository_id: repository.repository_id().to_string(),
                source,
            })?;

        self.events.on_event(StagingEvent::RepositoryClosed {
            repository_id: repository.repository_id().to_string(),
            state: state.clone(),
        });

        if let RepositoryState::Failed { reason } = &state {
            return Err(StagingError::CloseRejected {
                repository_id: repository.repository_id().to_string(),
                reason: reason.clone(),
            });
        }
        Ok(state)
    }
}

//! Directory-backed repository manager
//!
//! ```text
//! <manager>/repositories/<profileId>-<NNNN>/repository.toml
//! <manager>/repositories/<profileId>-<NNNN>/content/<relative path>
//! ```
//!
//! The manager is reachable when its directory exists.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::StagingRepository;
use crate::domain::ports::{OpenRepository, StagingClient, TransportError, TransportResult};
use crate::domain::services::ensure_relative_path;
use crate::domain::value_objects::{Coordinates, RepositoryState, StagingProfile};
use crate::infrastructure::fs::{atomic_copy, atomic_write};

const REPOSITORIES_DIR: &str = "repositories";
const RECORD_FILE: &str = "repository.toml";
const CONTENT_DIR: &str = "content";

/// A profile and the groups it claims
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRule {
    pub profile: StagingProfile,
    pub groups: Vec<String>,
}

impl ProfileRule {
    pub fn new(profile: StagingProfile, groups: Vec<String>) -> Self {
        Self { profile, groups }
    }

    /// `com.example` matches exactly; `org.acme.*` matches `org.acme` and below
    pub fn matches(&self, group_id: &str) -> bool {
        self.groups.iter().any(|pattern| match pattern.strip_suffix(".*") {
            Some(prefix) => {
                group_id == prefix
                    || group_id
                        .strip_prefix(prefix)
                        .is_some_and(|rest| rest.starts_with('.'))
            }
            None => group_id == pattern,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct RepositoryRecord {
    profile_id: String,
    description: String,
    created_at: DateTime<Utc>,
    status: RepositoryState,
}

#[derive(Debug, Clone)]
pub struct DirectoryStagingClient {
    root: PathBuf,
    rules: Vec<ProfileRule>,
}

impl DirectoryStagingClient {
    pub fn new(root: impl Into<PathBuf>, rules: Vec<ProfileRule>) -> Self {
        Self {
            root: root.into(),
            rules,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_reachable(&self) -> TransportResult<()> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(TransportError::Unreachable {
                endpoint: format!("repository manager at {}", self.root.display()),
            })
        }
    }

    fn repository_dir(&self, repository_id: &str) -> TransportResult<PathBuf> {
        let relative = Path::new(repository_id);
        if repository_id.is_empty()
            || relative.components().count() != 1
            || ensure_relative_path(relative).is_err()
        {
            return Err(TransportError::NotFound {
                what: format!("staging repository '{}'", repository_id),
            });
        }
        Ok(self.root.join(REPOSITORIES_DIR).join(repository_id))
    }

    fn rule(&self, profile_id: &str) -> Option<&ProfileRule> {
        self.rules.iter().find(|r| r.profile.id == profile_id)
    }

    fn read_record(&self, repository_id: &str) -> TransportResult<RepositoryRecord> {
        let path = self.repository_dir(repository_id)?.join(RECORD_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TransportError::NotFound {
                    what: format!("staging repository '{}'", repository_id),
                })
            }
            Err(e) => return Err(TransportError::io(&path, e)),
        };
        toml::from_str(&content).map_err(|e| TransportError::Rejected {
            reason: format!("corrupt repository record {}: {}", path.display(), e),
        })
    }

    fn write_record(&self, repository_id: &str, record: &RepositoryRecord) -> TransportResult<()> {
        let path = self.repository_dir(repository_id)?.join(RECORD_FILE);
        let content = toml::to_string(record).map_err(|e| TransportError::Rejected {
            reason: format!("cannot serialize repository record: {}", e),
        })?;
        atomic_write(&path, content.as_bytes())
    }

    /// Next free `<profileId>-<NNNN>`
    fn allocate_id(&self, profile_id: &str) -> TransportResult<String> {
        let dir = self.root.join(REPOSITORIES_DIR);
        let prefix = format!("{}-", profile_id);
        let mut highest = 0u32;
        if dir.is_dir() {
            let entries = std::fs::read_dir(&dir).map_err(|e| TransportError::io(&dir, e))?;
            for entry in entries.filter_map(|e| e.ok()) {
                let name = entry.file_name().to_string_lossy().into_owned();
                if let Some(n) = name
                    .strip_prefix(&prefix)
                    .and_then(|suffix| suffix.parse::<u32>().ok())
                {
                    highest = highest.max(n);
                }
            }
        }
        Ok(format!("{}{:04}", prefix, highest + 1))
    }

    fn profile_of(&self, profile_id: &str) -> StagingProfile {
        self.rule(profile_id)
            .map(|r| r.profile.clone())
            .unwrap_or_else(|| StagingProfile::new(profile_id, profile_id))
    }

    /// Current state of a repository
    pub fn state(&self, repository_id: &str) -> TransportResult<RepositoryState> {
        self.read_record(repository_id).map(|r| r.status)
    }
}

impl StagingClient for DirectoryStagingClient {
    fn list_profiles_matching(
        &self,
        coordinates: &Coordinates,
    ) -> TransportResult<Vec<StagingProfile>> {
        self.ensure_reachable()?;
        Ok(self
            .rules
            .iter()
            .filter(|rule| rule.matches(&coordinates.group_id))
            .map(|rule| rule.profile.clone())
            .collect())
    }

    fn open_repository(&self, request: &OpenRepository) -> TransportResult<StagingRepository> {
        self.ensure_reachable()?;
        match request {
            OpenRepository::New {
                profile_id,
                description,
            } => {
                let Some(rule) = self.rule(profile_id) else {
                    return Err(TransportError::NotFound {
                        what: format!("staging profile '{}'", profile_id),
                    });
                };
                let repository_id = self.allocate_id(profile_id)?;
                let content = self.repository_dir(&repository_id)?.join(CONTENT_DIR);
                std::fs::create_dir_all(&content).map_err(|e| TransportError::io(&content, e))?;
                self.write_record(
                    &repository_id,
                    &RepositoryRecord {
                        profile_id: profile_id.clone(),
                        description: description.clone(),
                        created_at: Utc::now(),
                        status: RepositoryState::Open,
                    },
                )?;
                tracing::debug!(repository = %repository_id, "created staging repository");
                Ok(StagingRepository::new(
                    rule.profile.clone(),
                    repository_id,
                    true,
                ))
            }
            OpenRepository::Existing {
                profile_id,
                repository_id,
            } => {
                let record = self.read_record(repository_id)?;
                if record.status != RepositoryState::Open {
                    return Err(TransportError::Rejected {
                        reason: format!(
                            "staging repository '{}' is {}, not open",
                            repository_id, record.status
                        ),
                    });
                }
                Ok(StagingRepository::new(
                    self.profile_of(profile_id),
                    repository_id.clone(),
                    false,
                ))
            }
        }
    }

    fn upload(
        &self,
        repository_id: &str,
        relative_path: &Path,
        file: &Path,
    ) -> TransportResult<()> {
        self.ensure_reachable()?;
        ensure_relative_path(relative_path).map_err(|reason| TransportError::Rejected { reason })?;
        let record = self.read_record(repository_id)?;
        if record.status != RepositoryState::Open {
            return Err(TransportError::Rejected {
                reason: format!("staging repository '{}' is {}", repository_id, record.status),
            });
        }
        let target = self
            .repository_dir(repository_id)?
            .join(CONTENT_DIR)
            .join(relative_path);
        atomic_copy(file, &target)
    }

    fn close(&self, repository_id: &str) -> TransportResult<RepositoryState> {
        self.ensure_reachable()?;
        let mut record = self.read_record(repository_id)?;
        if record.status != RepositoryState::Open {
            return Err(TransportError::Rejected {
                reason: format!(
                    "cannot close staging repository '{}': it is {}",
                    repository_id, record.status
                ),
            });
        }

        record.status = RepositoryState::Closing;
        self.write_record(repository_id, &record)?;

        let content = self.repository_dir(repository_id)?.join(CONTENT_DIR);
        let has_content = std::fs::read_dir(&content)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false);
        record.status = if has_content {
            RepositoryState::Closed
        } else {
            RepositoryState::Failed {
                reason: "repository has no content".to_string(),
            }
        };
        self.write_record(repository_id, &record)?;
        Ok(record.status)
    }
}

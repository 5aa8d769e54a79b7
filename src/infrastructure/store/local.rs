//! Filesystem staging store
//!
//! `root/<profileId>/<repository layout path>`. A profile directory that has
//! been committed carries a `.committed` marker; the next build that stages
//! into it starts from an empty directory.
//!
//! `root/.build.toml` lists the modules that staged since the current build
//! started, so the last module can tell whether this build staged anything
//! even when every module runs in its own process.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Artifact;
use crate::domain::ports::{
    DeployedArtifact, StagedFile, StagingStore, TransportError, TransportResult,
};
use crate::domain::services::{artifact_path, descriptor_path, ensure_relative_path};
use crate::infrastructure::fs::{atomic_copy, atomic_write};

/// Marker file written into a profile directory after a successful commit
pub const COMMIT_MARKER: &str = ".committed";

/// Modules that staged in the current build
pub const BUILD_RECORD: &str = ".build.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct BuildRecord {
    started_at: DateTime<Utc>,
    #[serde(default)]
    modules: Vec<String>,
}

/// Contents of the commit marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitMarker {
    pub repository_id: String,
    pub committed_at: DateTime<Utc>,
}

/// Per-profile summary for `status`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStatus {
    pub profile_id: String,
    pub files: usize,
    pub committed: Option<CommitMarker>,
}

#[derive(Debug, Clone)]
pub struct LocalStagingStore {
    root: PathBuf,
}

impl LocalStagingStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn profile_dir(&self, profile_id: &str) -> TransportResult<PathBuf> {
        let relative = Path::new(profile_id);
        let single = relative.components().count() == 1;
        if profile_id.is_empty() || !single || ensure_relative_path(relative).is_err() {
            return Err(TransportError::Rejected {
                reason: format!("invalid staging profile id '{}'", profile_id),
            });
        }
        Ok(self.root.join(profile_id))
    }

    /// Every profile directory, committed or not
    pub fn profiles(&self) -> TransportResult<Vec<ProfileStatus>> {
        let mut statuses = Vec::new();
        for profile_id in self.all_profile_ids()? {
            let dir = self.root.join(&profile_id);
            statuses.push(ProfileStatus {
                files: collect_files(&dir)?.len(),
                committed: read_marker(&dir)?,
                profile_id,
            });
        }
        Ok(statuses)
    }

    fn all_profile_ids(&self) -> TransportResult<Vec<String>> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(TransportError::io(&self.root, e)),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| TransportError::io(&self.root, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| TransportError::io(entry.path(), e))?;
            if file_type.is_dir() {
                ids.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        ids.sort();
        Ok(ids)
    }
}

impl StagingStore for LocalStagingStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn prepare(&self, profile_id: &str) -> TransportResult<PathBuf> {
        let dir = self.profile_dir(profile_id)?;
        discard_committed(&dir)?;
        std::fs::create_dir_all(&dir).map_err(|e| TransportError::io(&dir, e))?;
        Ok(dir)
    }

    fn stage(
        &self,
        file: &Path,
        artifact: &Artifact,
        staging_dir: &Path,
    ) -> TransportResult<DeployedArtifact> {
        discard_committed(staging_dir)?;

        let location = staging_dir.join(artifact_path(artifact));
        atomic_copy(file, &location)?;
        if let Some(descriptor) = artifact.descriptor() {
            atomic_copy(descriptor, &staging_dir.join(descriptor_path(artifact)))?;
        }

        Ok(DeployedArtifact {
            resolved_version: artifact.version().to_string(),
            location,
        })
    }

    fn profile_ids(&self) -> TransportResult<Vec<String>> {
        let mut pending = Vec::new();
        for profile_id in self.all_profile_ids()? {
            let dir = self.root.join(&profile_id);
            if dir.join(COMMIT_MARKER).exists() {
                continue;
            }
            if !collect_files(&dir)?.is_empty() {
                pending.push(profile_id);
            }
        }
        Ok(pending)
    }

    fn files(&self, profile_id: &str) -> TransportResult<Vec<StagedFile>> {
        collect_files(&self.profile_dir(profile_id)?)
    }

    fn mark_committed(&self, profile_id: &str, repository_id: &str) -> TransportResult<()> {
        let dir = self.profile_dir(profile_id)?;
        let marker = CommitMarker {
            repository_id: repository_id.to_string(),
            committed_at: Utc::now(),
        };
        let content = toml::to_string(&marker).map_err(|e| TransportError::Rejected {
            reason: format!("cannot serialize commit marker: {}", e),
        })?;
        atomic_write(&dir.join(COMMIT_MARKER), content.as_bytes())
    }

    fn reset_build(&self) -> TransportResult<()> {
        let path = self.root.join(BUILD_RECORD);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(record = %path.display(), "build record cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TransportError::io(&path, e)),
        }
    }

    fn record_staged_module(&self, module: &str) -> TransportResult<()> {
        let path = self.root.join(BUILD_RECORD);
        let mut record = read_build_record(&path)?.unwrap_or_else(|| BuildRecord {
            started_at: Utc::now(),
            modules: Vec::new(),
        });
        if record.modules.iter().any(|m| m == module) {
            return Ok(());
        }
        record.modules.push(module.to_string());
        let content = toml::to_string(&record).map_err(|e| TransportError::Rejected {
            reason: format!("cannot serialize build record: {}", e),
        })?;
        atomic_write(&path, content.as_bytes())
    }

    fn staged_modules(&self) -> TransportResult<Vec<String>> {
        Ok(read_build_record(&self.root.join(BUILD_RECORD))?
            .map(|record| record.modules)
            .unwrap_or_default())
    }
}

/// Empty a committed profile directory so its old content is never uploaded twice
fn discard_committed(dir: &Path) -> TransportResult<()> {
    if !dir.join(COMMIT_MARKER).is_file() {
        return Ok(());
    }
    tracing::debug!(dir = %dir.display(), "staging over committed content, discarding it");
    std::fs::remove_dir_all(dir).map_err(|e| TransportError::io(dir, e))?;
    std::fs::create_dir_all(dir).map_err(|e| TransportError::io(dir, e))
}

fn read_build_record(path: &Path) -> TransportResult<Option<BuildRecord>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(TransportError::io(path, e)),
    };
    toml::from_str(&content)
        .map(Some)
        .map_err(|e| TransportError::Rejected {
            reason: format!("corrupt build record {}: {}", path.display(), e),
        })
}

fn read_marker(dir: &Path) -> TransportResult<Option<CommitMarker>> {
    let path = dir.join(COMMIT_MARKER);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(TransportError::io(&path, e)),
    };
    toml::from_str(&content)
        .map(Some)
        .map_err(|e| TransportError::Rejected {
            reason: format!("corrupt commit marker {}: {}", path.display(), e),
        })
}

/// Regular files below `dir`, sorted by relative path; the marker is excluded
fn collect_files(dir: &Path) -> TransportResult<Vec<StagedFile>> {
    let mut files = Vec::new();
    if dir.is_dir() {
        walk(dir, dir, &mut files)?;
    }
    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(files)
}

fn walk(base: &Path, dir: &Path, files: &mut Vec<StagedFile>) -> TransportResult<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| TransportError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| TransportError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| TransportError::io(&path, e))?;
        if file_type.is_dir() {
            walk(base, &path, files)?;
        } else if file_type.is_file() {
            let Ok(relative_path) = path.strip_prefix(base).map(Path::to_path_buf) else {
                continue;
            };
            if relative_path == Path::new(COMMIT_MARKER) {
                continue;
            }
            files.push(StagedFile {
                relative_path,
                path,
            });
        }
    }
    Ok(())
}

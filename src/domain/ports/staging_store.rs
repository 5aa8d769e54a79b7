//! Local staging store port
//!
//! Accumulates artifacts per staging profile until the remote commit.

use std::path::{Path, PathBuf};

use super::artifact_deployer::DeployedArtifact;
use super::transport::TransportResult;
use crate::domain::entities::Artifact;

/// A file waiting in the local staging area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    /// Path relative to the profile directory (repository layout)
    pub relative_path: PathBuf,
    /// Absolute path on disk
    pub path: PathBuf,
}

/// Trait for local staging areas
///
/// Not safe for concurrent writers; modules are processed sequentially.
pub trait StagingStore {
    /// Root of the staging area
    fn root(&self) -> &Path;

    /// Create (idempotently) and return the directory for `profile_id`
    fn prepare(&self, profile_id: &str) -> TransportResult<PathBuf>;

    /// Write `file` as `artifact` under `staging_dir`, overwriting silently
    fn stage(
        &self,
        file: &Path,
        artifact: &Artifact,
        staging_dir: &Path,
    ) -> TransportResult<DeployedArtifact>;

    /// Profile ids with uncommitted content, sorted
    fn profile_ids(&self) -> TransportResult<Vec<String>>;

    /// Files staged under `profile_id`, in stable order
    fn files(&self, profile_id: &str) -> TransportResult<Vec<StagedFile>>;

    /// Record that `profile_id` has been committed to `repository_id`
    fn mark_committed(&self, profile_id: &str, repository_id: &str) -> TransportResult<()>;

    /// Forget which modules staged in the current build
    fn reset_build(&self) -> TransportResult<()>;

    /// Remember that `module` staged locally in the current build
    fn record_staged_module(&self, module: &str) -> TransportResult<()>;

    /// Modules that staged since the current build started, in staging order
    ///
    /// Survives the process, so builds that invoke one process per module
    /// see what earlier modules did.
    fn staged_modules(&self) -> TransportResult<Vec<String>>;
}

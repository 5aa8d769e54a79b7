//! Direct-deploy port
//!
//! Publishes an artifact immediately to its final repository.

use std::path::{Path, PathBuf};

use super::transport::TransportResult;
use crate::domain::entities::Artifact;

/// Where direct deploys go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRepository {
    pub id: String,
    pub location: PathBuf,
}

impl DeploymentRepository {
    pub fn new(id: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
        }
    }
}

/// Outcome of a successful deploy or local stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedArtifact {
    /// Version the artifact was written under (e.g. a timestamped snapshot)
    pub resolved_version: String,
    /// Where the artifact file ended up
    pub location: PathBuf,
}

/// Trait for direct-deploy transports
pub trait ArtifactDeployer {
    /// Deploy `file` as `artifact` into `repository`
    fn deploy(
        &self,
        file: &Path,
        artifact: &Artifact,
        repository: &DeploymentRepository,
    ) -> TransportResult<DeployedArtifact>;
}

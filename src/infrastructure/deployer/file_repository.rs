//! Direct deploy into a repository directory
//!
//! Artifacts are written in repository layout. Snapshots get a timestamped
//! version whose build number is tracked per version directory in
//! `snapshot.toml`. Artifact-level versions are kept in `metadata.toml` and
//! rendered to `maven-metadata.xml` after every deploy.

use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Artifact;
use crate::domain::ports::{
    ArtifactDeployer, DeployedArtifact, DeploymentRepository, TransportError, TransportResult,
};
use crate::domain::services::{
    artifact_dir, artifact_path, compare_versions, descriptor_path, max_version, version_dir,
};
use crate::domain::value_objects::SNAPSHOT_SUFFIX;
use crate::infrastructure::fs::{atomic_copy, atomic_write};

const SNAPSHOT_RECORD: &str = "snapshot.toml";
const METADATA_FILE: &str = "maven-metadata.xml";
const METADATA_RECORD: &str = "metadata.toml";
const TIMESTAMP_FORMAT: &str = "%Y%m%d.%H%M%S";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct SnapshotRecord {
    timestamp: String,
    build_number: u32,
}

/// Artifact-level versioning; `maven-metadata.xml` is rendered from it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct MetadataRecord {
    #[serde(default)]
    latest: Option<String>,
    #[serde(default)]
    release: Option<String>,
    #[serde(default)]
    versions: Vec<String>,
}

impl MetadataRecord {
    /// `latest` and `release` only move forward in version order
    fn with_deployed(mut self, version: &str, release: bool) -> Self {
        self.latest = Some(advance(self.latest.as_deref(), version));
        if release {
            self.release = Some(advance(self.release.as_deref(), version));
        }
        if !self.versions.iter().any(|v| v == version) {
            self.versions.push(version.to_string());
        }
        self.versions.sort_by(|a, b| compare_versions(a, b));
        self
    }
}

fn advance(current: Option<&str>, deployed: &str) -> String {
    current
        .map_or(deployed, |current| max_version(current, deployed))
        .to_string()
}

/// `ArtifactDeployer` writing into a local repository directory
#[derive(Debug, Clone, Copy, Default)]
pub struct FileRepositoryDeployer;

impl FileRepositoryDeployer {
    pub fn new() -> Self {
        Self
    }

    fn resolve_version(&self, root: &Path, artifact: &Artifact) -> TransportResult<String> {
        if let Some(version) = artifact.resolved_version() {
            return Ok(version.to_string());
        }
        if !artifact.is_snapshot() {
            return Ok(artifact.version().to_string());
        }

        let record_path = root.join(version_dir(artifact)).join(SNAPSHOT_RECORD);
        let previous = read_snapshot_record(&record_path)?;
        let record = SnapshotRecord {
            timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            build_number: previous.map(|r| r.build_number).unwrap_or(0) + 1,
        };
        let content = toml::to_string(&record).map_err(|e| TransportError::Rejected {
            reason: format!("cannot serialize snapshot record: {}", e),
        })?;
        atomic_write(&record_path, content.as_bytes())?;

        let base = artifact
            .base_version()
            .trim_end_matches(SNAPSHOT_SUFFIX);
        Ok(format!("{}-{}-{}", base, record.timestamp, record.build_number))
    }

    fn write_metadata(&self, root: &Path, artifact: &Artifact) -> TransportResult<()> {
        let dir = root.join(artifact_dir(artifact));
        let record_path = dir.join(METADATA_RECORD);
        let record = read_metadata_record(&record_path)?
            .unwrap_or_default()
            .with_deployed(artifact.base_version(), artifact.is_release());

        let content = toml::to_string(&record).map_err(|e| TransportError::Rejected {
            reason: format!("cannot serialize metadata record: {}", e),
        })?;
        atomic_write(&record_path, content.as_bytes())?;

        let xml = render_metadata(artifact, &record);
        atomic_write(&dir.join(METADATA_FILE), xml.as_bytes())
    }
}

impl ArtifactDeployer for FileRepositoryDeployer {
    fn deploy(
        &self,
        file: &Path,
        artifact: &Artifact,
        repository: &DeploymentRepository,
    ) -> TransportResult<DeployedArtifact> {
        let root = &repository.location;
        if !root.is_dir() {
            return Err(TransportError::Unreachable {
                endpoint: format!("repository '{}' at {}", repository.id, root.display()),
            });
        }

        let resolved_version = self.resolve_version(root, artifact)?;
        let mut resolved = artifact.clone();
        resolved.set_resolved_version(resolved_version.clone());

        let location = root.join(artifact_path(&resolved));
        atomic_copy(file, &location)?;
        if let Some(descriptor) = resolved.descriptor() {
            atomic_copy(descriptor, &root.join(descriptor_path(&resolved)))?;
        }
        self.write_metadata(root, &resolved)?;

        tracing::debug!(
            repository = %repository.id,
            artifact = %resolved,
            "deployed"
        );
        Ok(DeployedArtifact {
            resolved_version,
            location,
        })
    }
}

fn read_snapshot_record(path: &Path) -> TransportResult<Option<SnapshotRecord>> {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content)
            .map(Some)
            .map_err(|e| TransportError::Rejected {
                reason: format!("corrupt snapshot record {}: {}", path.display(), e),
            }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(TransportError::io(path, e)),
    }
}

fn read_metadata_record(path: &Path) -> TransportResult<Option<MetadataRecord>> {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content)
            .map(Some)
            .map_err(|e| TransportError::Rejected {
                reason: format!("corrupt metadata record {}: {}", path.display(), e),
            }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(TransportError::io(path, e)),
    }
}

fn render_metadata(artifact: &Artifact, record: &MetadataRecord) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<metadata>\n");
    xml.push_str(&format!("  <groupId>{}</groupId>\n", artifact.group_id()));
    xml.push_str(&format!("  <artifactId>{}</artifactId>\n", artifact.artifact_id()));
    xml.push_str("  <versioning>\n");
    if let Some(latest) = &record.latest {
        xml.push_str(&format!("    <latest>{}</latest>\n", latest));
    }
    if let Some(release) = &record.release {
        xml.push_str(&format!("    <release>{}</release>\n", release));
    }
    xml.push_str("    <versions>\n");
    for version in &record.versions {
        xml.push_str(&format!("      <version>{}</version>\n", version));
    }
    xml.push_str("    </versions>\n");
    xml.push_str(&format!(
        "    <lastUpdated>{}</lastUpdated>\n",
        Utc::now().format("%Y%m%d%H%M%S")
    ));
    xml.push_str("  </versioning>\n</metadata>\n");
    xml
}

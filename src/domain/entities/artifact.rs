//! Artifact entity
//!
//! An artifact is routed, never rewritten: the coordinator only attaches a
//! descriptor, flags releases and records the version a deployment resolved.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::Coordinates;

/// Metadata that travels with an artifact into the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactMetadata {
    /// Companion descriptor file deployed next to the artifact
    Descriptor { file: PathBuf },
}

/// A single deployable unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    coordinates: Coordinates,
    classifier: Option<String>,
    extension: String,
    file: Option<PathBuf>,
    snapshot: bool,
    release: bool,
    resolved_version: Option<String>,
    metadata: Vec<ArtifactMetadata>,
}

impl Artifact {
    pub fn new(coordinates: Coordinates, extension: impl Into<String>) -> Self {
        let snapshot = coordinates.is_snapshot();
        Self {
            coordinates,
            classifier: None,
            extension: extension.into(),
            file: None,
            snapshot,
            release: false,
            resolved_version: None,
            metadata: Vec::new(),
        }
    }

    /// Descriptor-only pseudo-artifact for the given coordinates
    pub fn descriptor_only(coordinates: Coordinates, descriptor: impl Into<PathBuf>) -> Self {
        Self::new(coordinates, "pom").with_file(descriptor)
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        let classifier = classifier.into();
        self.classifier = if classifier.is_empty() {
            None
        } else {
            Some(classifier)
        };
        self
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    pub fn group_id(&self) -> &str {
        &self.coordinates.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.coordinates.artifact_id
    }

    /// Version as declared by the build (e.g. `1.0-SNAPSHOT`)
    pub fn base_version(&self) -> &str {
        &self.coordinates.version
    }

    /// Version the artifact is deployed under (resolved if known)
    pub fn version(&self) -> &str {
        self.resolved_version
            .as_deref()
            .unwrap_or(&self.coordinates.version)
    }

    pub fn resolved_version(&self) -> Option<&str> {
        self.resolved_version.as_deref()
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// The artifact's file, if one was assigned and it exists as a regular file
    pub fn existing_file(&self) -> Option<&Path> {
        self.file().filter(|f| f.is_file())
    }

    pub fn is_snapshot(&self) -> bool {
        self.snapshot
    }

    pub fn is_release(&self) -> bool {
        self.release
    }

    pub fn metadata(&self) -> &[ArtifactMetadata] {
        &self.metadata
    }

    /// Descriptor attached as metadata, if any
    pub fn descriptor(&self) -> Option<&Path> {
        self.metadata.iter().find_map(|m| match m {
            ArtifactMetadata::Descriptor { file } => Some(file.as_path()),
        })
    }

    /// Attach metadata once; a second descriptor replaces nothing
    pub fn attach_metadata(&mut self, metadata: ArtifactMetadata) {
        if !self.metadata.contains(&metadata) && self.descriptor().is_none() {
            self.metadata.push(metadata);
        }
    }

    pub fn mark_release(&mut self) {
        self.release = true;
    }

    pub fn set_resolved_version(&mut self, version: impl Into<String>) {
        self.resolved_version = Some(version.into());
    }

    /// `group:artifact:extension[:classifier]:version`
    pub fn id(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!(
                "{}:{}:{}:{}:{}",
                self.group_id(),
                self.artifact_id(),
                self.extension,
                classifier,
                self.version()
            ),
            None => format!(
                "{}:{}:{}:{}",
                self.group_id(),
                self.artifact_id(),
                self.extension,
                self.version()
            ),
        }
    }
}

impl std::fmt::Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id())
    }
}

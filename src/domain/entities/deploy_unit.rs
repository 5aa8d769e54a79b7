//! The deployables of one module

use std::path::{Path, PathBuf};

use super::artifact::Artifact;
use crate::domain::value_objects::{Coordinates, Packaging};

/// Everything one module deploys: primary artifact, descriptor and attachments.
///
/// Read-only to the coordinator apart from the resolved version of the
/// primary artifact, which is written back after the first deployable.
#[derive(Debug, Clone)]
pub struct ProjectDeployUnit {
    module: String,
    primary: Artifact,
    packaging: Packaging,
    descriptor: PathBuf,
    attached: Vec<Artifact>,
}

impl ProjectDeployUnit {
    pub fn new(
        module: impl Into<String>,
        primary: Artifact,
        packaging: Packaging,
        descriptor: impl Into<PathBuf>,
    ) -> Self {
        Self {
            module: module.into(),
            primary,
            packaging,
            descriptor: descriptor.into(),
            attached: Vec::new(),
        }
    }

    pub fn with_attached(mut self, attached: Vec<Artifact>) -> Self {
        self.attached = attached;
        self
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn coordinates(&self) -> &Coordinates {
        self.primary.coordinates()
    }

    pub fn primary(&self) -> &Artifact {
        &self.primary
    }

    pub(crate) fn primary_mut(&mut self) -> &mut Artifact {
        &mut self.primary
    }

    pub fn packaging(&self) -> &Packaging {
        &self.packaging
    }

    pub fn descriptor(&self) -> &Path {
        &self.descriptor
    }

    pub fn attached(&self) -> &[Artifact] {
        &self.attached
    }

    /// Record the version the first deployable resolved to
    pub fn propagate_resolved_version(&mut self, version: impl Into<String>) {
        self.primary.set_resolved_version(version);
    }

    /// Attached artifact as it is dispatched: same coordinate as the primary
    /// shares the primary's resolved version.
    pub fn attached_for_dispatch(&self, attached: &Artifact) -> Artifact {
        let mut artifact = attached.clone();
        if artifact.resolved_version().is_none()
            && artifact.coordinates() == self.primary.coordinates()
        {
            if let Some(version) = self.primary.resolved_version() {
                artifact.set_resolved_version(version);
            }
        }
        artifact
    }
}

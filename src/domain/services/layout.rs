//! Repository layout
//!
//! `<group/path>/<artifactId>/<baseVersion>/<artifactId>-<version>[-<classifier>].<ext>`

use std::path::{Component, Path, PathBuf};

use crate::domain::entities::Artifact;

/// Relative path of an artifact in repository layout
pub fn artifact_path(artifact: &Artifact) -> PathBuf {
    version_dir(artifact).join(file_name(artifact))
}

/// Relative path of the descriptor deployed next to `artifact`
pub fn descriptor_path(artifact: &Artifact) -> PathBuf {
    version_dir(artifact).join(format!("{}-{}.pom", artifact.artifact_id(), artifact.version()))
}

/// `<group/path>/<artifactId>/<baseVersion>`
pub fn version_dir(artifact: &Artifact) -> PathBuf {
    artifact_dir(artifact).join(artifact.base_version())
}

/// `<group/path>/<artifactId>`
pub fn artifact_dir(artifact: &Artifact) -> PathBuf {
    PathBuf::from(artifact.coordinates().group_path()).join(artifact.artifact_id())
}

fn file_name(artifact: &Artifact) -> String {
    match artifact.classifier() {
        Some(classifier) => format!(
            "{}-{}-{}.{}",
            artifact.artifact_id(),
            artifact.version(),
            classifier,
            artifact.extension()
        ),
        None => format!(
            "{}-{}.{}",
            artifact.artifact_id(),
            artifact.version(),
            artifact.extension()
        ),
    }
}

/// Reject absolute paths and `..` components
pub fn ensure_relative_path(path: &Path) -> Result<(), String> {
    if path.is_absolute() {
        return Err(format!("absolute path not allowed: {}", path.display()));
    }
    for component in path.components() {
        match component {
            Component::ParentDir => {
                return Err(format!("path traversal not allowed: {}", path.display()))
            }
            Component::Prefix(_) | Component::RootDir => {
                return Err(format!("absolute path not allowed: {}", path.display()))
            }
            _ => {}
        }
    }
    Ok(())
}

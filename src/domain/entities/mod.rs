//! Domain Entities
//!
//! - `Artifact` - a single deployable unit produced by the build
//! - `ProjectDeployUnit` - everything one module deploys
//! - `ModuleSequence` - the ordered module list of a build
//! - `StagingRepository` - a remote repository opened for staging

mod artifact;
mod deploy_unit;
mod module_sequence;
mod staging_repository;

pub use artifact::{Artifact, ArtifactMetadata};
pub use deploy_unit::ProjectDeployUnit;
pub use module_sequence::{ModuleEntry, ModuleSequence};
pub use staging_repository::StagingRepository;

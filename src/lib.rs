//! stagedeploy - staged deployment coordinator for multi-module builds
//!
//! Release artifacts of every module are collected into a local staging area
//! grouped by staging profile. When the last module of the build is reached,
//! the staged content is pushed to the repository manager in one pass: one
//! staging repository per profile, opened, uploaded and closed. Snapshots and
//! modules that opt out are deployed directly.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CommitOptions, CommitReport, DeployCoordinator, DeployOptions, ModuleReport, RemoteOutcome,
    RemoteStagingCoordinator, StagingSession,
};
pub use config::StagingConfig;
pub use domain::entities::{Artifact, ModuleSequence, ProjectDeployUnit, StagingRepository};
pub use domain::value_objects::{Connectivity, Coordinates, DeployDirectives, ProfileSelection};
pub use error::{ErrorCategory, StagingError, StagingResult};

//! Application Layer
//!
//! Use cases that orchestrate the staged deploy.
//! This layer:
//! - Depends on the Domain layer (entities, services, ports)
//! - Coordinates collaborators, never performs I/O itself
//!
//! ## Use Cases
//!
//! - `DeployCoordinator` - one module's contribution: skip, direct deploy or local staging
//! - `RemoteStagingCoordinator` - commits locally staged content to the repository manager
//! - `StagingSession` - coordination context shared by the modules of one build

pub mod deploy;
pub mod remote;
pub mod session;

#[cfg(test)]
pub(crate) mod fakes;

pub use deploy::{DeployCoordinator, DeployOptions, DispatchRecord, ModuleReport, RemoteOutcome};
pub use remote::{CommitOptions, CommitReport, ProfileCommit, RemoteStagingCoordinator};
pub use session::{SessionState, StagingSession};

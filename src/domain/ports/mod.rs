//! Domain Ports (Interfaces)
//!
//! These traits are the collaborators of the coordinators. Infrastructure
//! provides the concrete implementations; tests substitute fakes.

pub mod artifact_deployer;
pub mod staging_client;
pub mod staging_events;
pub mod staging_store;
pub mod transport;

pub use artifact_deployer::{ArtifactDeployer, DeployedArtifact, DeploymentRepository};
pub use staging_client::{OpenRepository, StagingClient};
pub use staging_events::{NoopEventSink, StagingEvent, StagingEventSink};
pub use staging_store::{StagedFile, StagingStore};
pub use transport::{TransportError, TransportResult};

//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `deployer/` - Direct deploy into a file-backed repository
//! - `store/` - Local staging store
//! - `staging/` - Directory-backed repository manager client
//! - `events/` - Console and NDJSON event sinks
//! - `manifest/` - TOML build manifest
//! - `fs/` - Atomic file writes

pub mod deployer;
pub mod events;
pub mod fs;
pub mod manifest;
pub mod staging;
pub mod store;

// Re-export for convenience
pub use deployer::FileRepositoryDeployer;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use manifest::BuildManifest;
pub use staging::{DirectoryStagingClient, ProfileRule};
pub use store::LocalStagingStore;

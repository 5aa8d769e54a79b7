//! Staging client implementations

mod directory_client;

pub use directory_client::{DirectoryStagingClient, ProfileRule};

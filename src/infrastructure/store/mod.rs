//! Local staging store implementation

mod local;

pub use local::{CommitMarker, LocalStagingStore, ProfileStatus, COMMIT_MARKER};

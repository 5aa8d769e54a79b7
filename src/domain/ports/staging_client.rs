//! Staging client port
//!
//! The narrow slice of the repository manager the coordinators consume:
//! profile matching and the staging repository lifecycle.

use std::path::Path;

use super::transport::TransportResult;
use crate::domain::entities::StagingRepository;
use crate::domain::value_objects::{Coordinates, RepositoryState, StagingProfile};

/// How to obtain the repository for a profile's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenRepository {
    /// Create a fresh repository under the profile (managed)
    New {
        profile_id: String,
        description: String,
    },
    /// Deposit into a repository the user named (unmanaged)
    Existing {
        profile_id: String,
        repository_id: String,
    },
}

impl OpenRepository {
    pub fn profile_id(&self) -> &str {
        match self {
            OpenRepository::New { profile_id, .. } | OpenRepository::Existing { profile_id, .. } => {
                profile_id
            }
        }
    }
}

/// Trait for repository manager clients
pub trait StagingClient {
    /// Profiles whose matching rules apply to `coordinates`
    fn list_profiles_matching(
        &self,
        coordinates: &Coordinates,
    ) -> TransportResult<Vec<StagingProfile>>;

    /// Create or look up the staging repository described by `request`
    fn open_repository(&self, request: &OpenRepository) -> TransportResult<StagingRepository>;

    /// Upload one file to `relative_path` inside the repository
    fn upload(&self, repository_id: &str, relative_path: &Path, file: &Path)
        -> TransportResult<()>;

    /// Request the `open -> closing` transition and report the resulting state
    fn close(&self, repository_id: &str) -> TransportResult<RepositoryState>;
}

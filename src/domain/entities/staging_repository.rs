//! Staging repository entity
//!
//! Exists only for the duration of one remote commit; never persisted.

use crate::domain::value_objects::StagingProfile;

/// A remote repository opened for staging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingRepository {
    profile: StagingProfile,
    repository_id: String,
    managed: bool,
}

impl StagingRepository {
    pub fn new(profile: StagingProfile, repository_id: impl Into<String>, managed: bool) -> Self {
        Self {
            profile,
            repository_id: repository_id.into(),
            managed,
        }
    }

    pub fn profile(&self) -> &StagingProfile {
        &self.profile
    }

    pub fn repository_id(&self) -> &str {
        &self.repository_id
    }

    /// True if this workflow created the repository and owns its lifecycle
    pub fn is_managed(&self) -> bool {
        self.managed
    }
}

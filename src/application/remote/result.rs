//! Commit Result

use crate::domain::value_objects::RepositoryState;

/// Outcome of committing one profile's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCommit {
    pub profile_id: String,
    pub repository_id: String,
    pub managed: bool,
    /// Number of files uploaded
    pub uploaded: usize,
    /// State reported after close; `None` for unmanaged repositories
    pub state: Option<RepositoryState>,
}

/// Outcome of a remote commit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitReport {
    pub profiles: Vec<ProfileCommit>,
}

impl CommitReport {
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn uploaded(&self) -> usize {
        self.profiles.iter().map(|p| p.uploaded).sum()
    }
}

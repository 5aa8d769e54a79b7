//! Remote staging repository state, as observed from the manager

use serde::{Deserialize, Serialize};

/// `open -> closing -> closed`, or `closing -> failed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum RepositoryState {
    Open,
    Closing,
    Closed,
    Failed { reason: String },
}

impl RepositoryState {
    /// True once the manager reports a final state
    pub fn is_terminal(&self) -> bool {
        matches!(self, RepositoryState::Closed | RepositoryState::Failed { .. })
    }
}

impl std::fmt::Display for RepositoryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryState::Open => write!(f, "open"),
            RepositoryState::Closing => write!(f, "closing"),
            RepositoryState::Closed => write!(f, "closed"),
            RepositoryState::Failed { reason } => write!(f, "failed ({})", reason),
        }
    }
}

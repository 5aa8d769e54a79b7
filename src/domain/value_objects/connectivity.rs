//! Connectivity mode supplied by the invoking build tool

use crate::error::{StagingError, StagingResult};

/// Whether the repository manager may be contacted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    #[default]
    Online,
    Offline,
}

impl Connectivity {
    pub fn from_offline_flag(offline: bool) -> Self {
        if offline {
            Connectivity::Offline
        } else {
            Connectivity::Online
        }
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, Connectivity::Offline)
    }

    /// Fail with a connectivity error when offline
    pub fn ensure_online(&self, operation: &str) -> StagingResult<()> {
        match self {
            Connectivity::Online => Ok(()),
            Connectivity::Offline => Err(StagingError::Offline {
                operation: operation.to_string(),
            }),
        }
    }
}

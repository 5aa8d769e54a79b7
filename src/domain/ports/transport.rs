//! Transport failures reported by collaborators

use std::path::PathBuf;

use thiserror::Error;

/// Result type for collaborator operations
pub type TransportResult<T> = Result<T, TransportError>;

/// Failure of a deployer, store or staging client
#[derive(Error, Debug)]
pub enum TransportError {
    /// Local or remote I/O failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The remote side could not be reached
    #[error("{endpoint} is unreachable")]
    Unreachable { endpoint: String },

    /// A referenced profile, repository or file does not exist
    #[error("{what} not found")]
    NotFound { what: String },

    /// The remote side refused the request
    #[error("request rejected: {reason}")]
    Rejected { reason: String },
}

impl TransportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TransportError::Io {
            path: path.into(),
            source,
        }
    }
}

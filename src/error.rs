//! Error types for stagedeploy
//!
//! Library errors use `thiserror`. Every variant belongs to one of the
//! categories in [`ErrorCategory`], which also decides the process exit code.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ports::TransportError;
use crate::domain::value_objects::Coordinates;

/// Result type alias for stagedeploy operations
pub type StagingResult<T> = Result<T, StagingError>;

/// Failure categories surfaced to the invoking build tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Profile selection, missing deployables, invalid files
    Configuration,
    /// Offline mode while the repository manager is required
    Connectivity,
    /// Local write or remote upload/close failure
    Transport,
}

impl ErrorCategory {
    /// Process exit code for this category
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Connectivity => 3,
            ErrorCategory::Transport => 4,
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Configuration => write!(f, "configuration"),
            ErrorCategory::Connectivity => write!(f, "connectivity"),
            ErrorCategory::Transport => write!(f, "transport"),
        }
    }
}

/// Main error type for staging operations
#[derive(Error, Debug)]
pub enum StagingError {
    /// The profile catalog has no profile for these coordinates
    #[error("no staging profile matches {coordinates}")]
    NoMatchingProfile { coordinates: Coordinates },

    /// More than one profile matched; we never guess
    #[error(
        "ambiguous staging profile for {coordinates}: candidates are {}",
        candidates.join(", ")
    )]
    AmbiguousProfile {
        coordinates: Coordinates,
        candidates: Vec<String>,
    },

    /// Neither a primary file nor attached artifacts
    #[error(
        "the packaging for module '{module}' did not assign a file to the build artifact \
         and there are no attached artifacts"
    )]
    NothingToDeploy { module: String },

    /// An attached artifact was declared without a file
    #[error("attached artifact {artifact} has no file")]
    MissingFile { artifact: String },

    /// Module id not present in the build's module list
    #[error("module '{module}' is not part of the build")]
    UnknownModule { module: String },

    /// An explicit repository id cannot receive several profiles at once
    #[error(
        "repository '{repository_id}' was given explicitly but local staging holds {} profiles: {}",
        profiles.len(),
        profiles.join(", ")
    )]
    RepositoryConflict {
        repository_id: String,
        profiles: Vec<String>,
    },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Invalid build manifest
    #[error("invalid build manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// The workflow needs the repository manager but we are offline
    #[error("cannot {operation} in offline mode: staging requires the repository manager to be reachable")]
    Offline { operation: String },

    /// Direct deploy failed
    #[error("failed to deploy {artifact}")]
    Deploy {
        artifact: String,
        #[source]
        source: TransportError,
    },

    /// Writing into the local staging store failed
    #[error("failed to stage {artifact} locally")]
    Stage {
        artifact: String,
        #[source]
        source: TransportError,
    },

    /// Local staging store could not be read or prepared
    #[error("local staging store at {root} is unusable")]
    Store {
        root: PathBuf,
        #[source]
        source: TransportError,
    },

    /// Profile catalog query failed
    #[error("failed to query staging profiles for {coordinates}")]
    ProfileQuery {
        coordinates: Coordinates,
        #[source]
        source: TransportError,
    },

    /// Opening (or reusing) a staging repository failed
    #[error("failed to open staging repository for profile '{profile_id}'")]
    Open {
        profile_id: String,
        #[source]
        source: TransportError,
    },

    /// Upload into an opened staging repository failed
    #[error(
        "upload of {} to staging repository '{repository_id}' failed{}",
        path.display(),
        if *managed { "; the repository was left open and needs manual cleanup" } else { "" }
    )]
    Upload {
        repository_id: String,
        path: PathBuf,
        managed: bool,
        #[source]
        source: TransportError,
    },

    /// Close request could not be delivered
    #[error("failed to close staging repository '{repository_id}'")]
    Close {
        repository_id: String,
        #[source]
        source: TransportError,
    },

    /// The remote side reported the close transition as failed
    #[error("staging repository '{repository_id}' failed to close: {reason}")]
    CloseRejected {
        repository_id: String,
        reason: String,
    },

    /// Local staging content may be committed once per session
    #[error("local staging content was already committed in this session")]
    AlreadyCommitted,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StagingError {
    /// Classify this error for reporting and exit codes
    pub fn category(&self) -> ErrorCategory {
        match self {
            StagingError::NoMatchingProfile { .. }
            | StagingError::AmbiguousProfile { .. }
            | StagingError::NothingToDeploy { .. }
            | StagingError::MissingFile { .. }
            | StagingError::UnknownModule { .. }
            | StagingError::RepositoryConflict { .. }
            | StagingError::InvalidConfig { .. }
            | StagingError::InvalidManifest { .. }
            | StagingError::AlreadyCommitted => ErrorCategory::Configuration,
            StagingError::Offline { .. } => ErrorCategory::Connectivity,
            StagingError::Open {
                source: TransportError::NotFound { .. },
                ..
            } => ErrorCategory::Configuration,
            StagingError::Deploy { .. }
            | StagingError::Stage { .. }
            | StagingError::Store { .. }
            | StagingError::ProfileQuery { .. }
            | StagingError::Open { .. }
            | StagingError::Upload { .. }
            | StagingError::Close { .. }
            | StagingError::CloseRejected { .. }
            | StagingError::Io(_) => ErrorCategory::Transport,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }
}

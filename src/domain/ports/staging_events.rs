//! Staging Event Port
//!
//! Provides an observable interface for deploy and commit operations.
//! Enables console progress, NDJSON event streams for CI, and test recording.

use std::path::PathBuf;

use crate::domain::value_objects::{RepositoryState, RoutingDecision};

/// Event emitted while deploying modules or committing staged content
#[derive(Debug, Clone, PartialEq)]
pub enum StagingEvent {
    /// Skip directive short-circuited the module
    ModuleSkipped { module: String },

    /// Routing for a module was decided
    RoutingDecided {
        module: String,
        routing: RoutingDecision,
    },

    /// No primary file; the descriptor is deployed in its place
    NoPrimaryArtifact { module: String },

    /// A deployable was dispatched
    ArtifactDispatched {
        module: String,
        artifact: String,
        location: PathBuf,
        staged: bool,
    },

    /// All deployables of a module were dispatched
    ModuleCompleted { module: String, dispatched: usize },

    /// Last module reached but remote staging was skipped on request
    RemoteStagingSkipped { staging_root: PathBuf },

    /// A staging repository was opened or reused
    RepositoryOpened {
        profile_id: String,
        repository_id: String,
        managed: bool,
    },

    /// One staged file reached the repository
    FileUploaded {
        repository_id: String,
        path: PathBuf,
    },

    /// Close was requested; the manager answered with `state`
    RepositoryClosed {
        repository_id: String,
        state: RepositoryState,
    },

    /// Unmanaged repository left as the user intended
    RepositoryLeftOpen { repository_id: String },

    /// Nothing staged locally, nothing to commit
    NothingToCommit,
}

/// Trait for receiving staging events
///
/// Implementations:
/// - `ConsoleEventSink`: human readable progress
/// - `JsonEventSink`: NDJSON for CI
/// - `NoopEventSink`: silent operation
pub trait StagingEventSink {
    /// Handle a staging event
    fn on_event(&self, event: StagingEvent);

    /// Whether this sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl StagingEventSink for NoopEventSink {
    fn on_event(&self, _event: StagingEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

//! JSON Event Sink
//!
//! Outputs staging events as NDJSON for CI/automation consumption.

use crate::domain::ports::{StagingEvent, StagingEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl StagingEventSink for JsonEventSink {
    fn on_event(&self, event: StagingEvent) {
        let command = self.command;
        let json = match event {
            StagingEvent::ModuleSkipped { module } => serde_json::json!({
                "event": "module_skipped",
                "command": command,
                "module": module,
            }),

            StagingEvent::RoutingDecided { module, routing } => serde_json::json!({
                "event": "routing",
                "command": command,
                "module": module,
                "profile": routing.profile_id(),
                "staging_dir": routing.staging_dir().map(|d| d.display().to_string()),
            }),

            StagingEvent::NoPrimaryArtifact { module } => serde_json::json!({
                "event": "no_primary_artifact",
                "command": command,
                "module": module,
            }),

            StagingEvent::ArtifactDispatched {
                module,
                artifact,
                location,
                staged,
            } => serde_json::json!({
                "event": "item_dispatched",
                "command": command,
                "module": module,
                "artifact": artifact,
                "location": location.display().to_string(),
                "staged": staged,
            }),

            StagingEvent::ModuleCompleted { module, dispatched } => serde_json::json!({
                "event": "module_complete",
                "command": command,
                "module": module,
                "dispatched": dispatched,
            }),

            StagingEvent::RemoteStagingSkipped { staging_root } => serde_json::json!({
                "event": "remote_skipped",
                "command": command,
                "staging_root": staging_root.display().to_string(),
            }),

            StagingEvent::RepositoryOpened {
                profile_id,
                repository_id,
                managed,
            } => serde_json::json!({
                "event": "repository_opened",
                "command": command,
                "profile": profile_id,
                "repository": repository_id,
                "managed": managed,
            }),

            StagingEvent::FileUploaded {
                repository_id,
                path,
            } => serde_json::json!({
                "event": "item_uploaded",
                "command": command,
                "repository": repository_id,
                "path": path.display().to_string(),
            }),

            StagingEvent::RepositoryClosed {
                repository_id,
                state,
            } => serde_json::json!({
                "event": "repository_closed",
                "command": command,
                "repository": repository_id,
                "state": state,
            }),

            StagingEvent::RepositoryLeftOpen { repository_id } => serde_json::json!({
                "event": "repository_left_open",
                "command": command,
                "repository": repository_id,
            }),

            StagingEvent::NothingToCommit => serde_json::json!({
                "event": "nothing_to_commit",
                "command": command,
            }),
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}

//! Console Event Sink
//!
//! Human-readable progress lines. Per-artifact lines only in verbose mode.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{StagingEvent, StagingEventSink};
use crate::domain::value_objects::RoutingDecision;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
}

impl ConsoleEventSink {
    pub fn stdout(verbose: bool) -> Self {
        Self::with_writer(io::stdout(), verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbose: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose,
        }
    }
}

/// One line per event
pub fn render(event: &StagingEvent) -> String {
    match event {
        StagingEvent::ModuleSkipped { module } => format!("[{module}] Skipping staged deploy."),
        StagingEvent::RoutingDecided { module, routing } => match routing {
            RoutingDecision::Direct => format!("[{module}] Performing ordinary deploy..."),
            RoutingDecision::Staged { staging_dir, .. } => format!(
                "[{module}] Staging locally (stagingDirectory=\"{}\")",
                staging_dir.display()
            ),
        },
        StagingEvent::NoPrimaryArtifact { module } => format!(
            "[{module}] No primary artifact to deploy, deploying attached artifacts instead."
        ),
        StagingEvent::ArtifactDispatched {
            artifact, staged, ..
        } => {
            let verb = if *staged { "staged" } else { "deployed" };
            format!("  {verb:<8} {artifact}")
        }
        StagingEvent::ModuleCompleted { module, dispatched } => {
            format!("[{module}] {dispatched} artifact(s) dispatched")
        }
        StagingEvent::RemoteStagingSkipped { staging_root } => format!(
            "Artifacts locally staged in directory {}, skipping remote staging at user's demand.",
            staging_root.display()
        ),
        StagingEvent::RepositoryOpened {
            profile_id,
            repository_id,
            managed: true,
        } => format!("Opened staging repository {repository_id} (profile {profile_id})"),
        StagingEvent::RepositoryOpened {
            profile_id,
            repository_id,
            managed: false,
        } => format!("Using staging repository {repository_id} (profile {profile_id}, not managed)"),
        StagingEvent::FileUploaded { path, .. } => format!("  uploaded {}", path.display()),
        StagingEvent::RepositoryClosed {
            repository_id,
            state,
        } => format!("Staging repository {repository_id} is {state}"),
        StagingEvent::RepositoryLeftOpen { repository_id } => {
            format!("Staging repository {repository_id} left open as requested")
        }
        StagingEvent::NothingToCommit => "Nothing staged locally, nothing to commit.".to_string(),
    }
}

impl StagingEventSink for ConsoleEventSink {
    fn on_event(&self, event: StagingEvent) {
        let detail = matches!(
            event,
            StagingEvent::ArtifactDispatched { .. } | StagingEvent::FileUploaded { .. }
        );
        if detail && !self.verbose {
            return;
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", render(&event));
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose
    }
}

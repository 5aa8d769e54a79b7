//! Staging session
//!
//! The coordination context of one build. Created at build start, handed to
//! every module's deploy call, and finished after the remote commit or when
//! the build is abandoned.

use crate::domain::entities::ModuleSequence;
use crate::domain::services::LastModuleDetector;
use crate::error::{StagingError, StagingResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Modules are still being processed
    Active,
    /// Local staging content has been handed to the remote commit
    Committed,
    /// The build stopped before a commit happened
    Abandoned,
}

#[derive(Debug)]
pub struct StagingSession {
    modules: ModuleSequence,
    state: SessionState,
    staged_modules: Vec<String>,
}

impl StagingSession {
    /// Start a session for the build's modules
    pub fn begin(modules: ModuleSequence) -> Self {
        tracing::debug!(modules = modules.len(), "staging session started");
        Self {
            modules,
            state: SessionState::Active,
            staged_modules: Vec::new(),
        }
    }

    pub fn modules(&self) -> &ModuleSequence {
        &self.modules
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Modules that staged locally in this session, in processing order
    pub fn staged_modules(&self) -> &[String] {
        &self.staged_modules
    }

    /// Whether `module` is the last module running the staging logic
    pub fn is_last(&self, module: &str) -> StagingResult<bool> {
        LastModuleDetector::new(&self.modules).is_last(module)
    }

    /// Whether `module` is the first module running the staging logic
    pub fn is_first(&self, module: &str) -> StagingResult<bool> {
        LastModuleDetector::new(&self.modules).is_first(module)
    }

    /// Whether `module` runs the staging logic at all
    pub fn runs_staging(&self, module: &str) -> StagingResult<bool> {
        LastModuleDetector::new(&self.modules).participates(module)
    }

    pub(crate) fn record_staged(&mut self, module: &str) {
        if !self.staged_modules.iter().any(|m| m == module) {
            self.staged_modules.push(module.to_string());
        }
    }

    /// Claim the local staging content for a commit; only once per session
    pub(crate) fn begin_commit(&mut self) -> StagingResult<()> {
        if self.state == SessionState::Committed {
            return Err(StagingError::AlreadyCommitted);
        }
        self.state = SessionState::Committed;
        Ok(())
    }

    /// Tear the session down, reporting how it ended
    pub fn finish(mut self) -> SessionState {
        if self.state == SessionState::Active {
            self.state = SessionState::Abandoned;
            if !self.staged_modules.is_empty() {
                tracing::info!(
                    modules = self.staged_modules.len(),
                    "session ended without remote commit; local staging left on disk"
                );
            }
        }
        self.state
    }
}

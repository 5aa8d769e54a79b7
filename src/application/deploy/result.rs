//! Deploy Result
//!
//! Result types for one module's deploy.

use std::path::PathBuf;

use crate::application::remote::CommitReport;
use crate::domain::value_objects::RoutingDecision;

/// One dispatched deployable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRecord {
    /// `g:a:ext[:classifier]:version` as dispatched
    pub artifact: String,
    /// Where it was written
    pub location: PathBuf,
    /// Local staging (true) or direct deploy (false)
    pub staged: bool,
}

/// What the last module did about the remote side
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RemoteOutcome {
    /// Not the last module, or nothing was staged
    #[default]
    NotTriggered,
    /// `skip-remote-staging` kept the content local
    Skipped { staging_root: PathBuf },
    /// Content was committed
    Committed(CommitReport),
}

/// Result of deploying one module
#[derive(Debug, Clone, Default)]
pub struct ModuleReport {
    pub module: String,
    pub skipped: bool,
    pub routing: Option<RoutingDecision>,
    pub dispatched: Vec<DispatchRecord>,
    pub last_module: bool,
    pub remote: RemoteOutcome,
}

impl ModuleReport {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            ..Self::default()
        }
    }

    pub fn staged(&self) -> bool {
        self.dispatched.iter().any(|d| d.staged)
    }

    pub fn committed(&self) -> Option<&CommitReport> {
        match &self.remote {
            RemoteOutcome::Committed(report) => Some(report),
            _ => None,
        }
    }
}

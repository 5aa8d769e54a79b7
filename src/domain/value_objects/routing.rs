//! Routing decision for one module: direct deploy or local staging

use std::path::{Path, PathBuf};

/// Well-known routing target used when local staging is skipped
pub const DIRECT_PROFILE: &str = "__direct__";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingDecision {
    /// Deploy straight to the deployment repository
    Direct,
    /// Stage under `staging_dir`, which belongs to `profile_id`
    Staged {
        profile_id: String,
        staging_dir: PathBuf,
    },
}

impl RoutingDecision {
    pub fn profile_id(&self) -> &str {
        match self {
            RoutingDecision::Direct => DIRECT_PROFILE,
            RoutingDecision::Staged { profile_id, .. } => profile_id,
        }
    }

    pub fn staging_dir(&self) -> Option<&Path> {
        match self {
            RoutingDecision::Direct => None,
            RoutingDecision::Staged { staging_dir, .. } => Some(staging_dir),
        }
    }

    pub fn skips_local_staging(&self) -> bool {
        matches!(self, RoutingDecision::Direct)
    }
}

impl std::fmt::Display for RoutingDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoutingDecision::Direct => write!(f, "direct deploy"),
            RoutingDecision::Staged {
                profile_id,
                staging_dir,
            } => write!(
                f,
                "local staging (profile={}, stagingDirectory=\"{}\")",
                profile_id,
                staging_dir.display()
            ),
        }
    }
}

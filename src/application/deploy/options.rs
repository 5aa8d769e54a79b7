//! Deploy Options
//!
//! Configuration types for deploy operations.

use crate::application::remote::CommitOptions;
use crate::domain::ports::DeploymentRepository;
use crate::domain::value_objects::{Connectivity, DeployDirectives, ProfileSelection};

/// Options for deploying one module
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Per-module skip/release directives
    pub directives: DeployDirectives,
    /// Supplied by the invoking build tool
    pub connectivity: Connectivity,
    /// `auto` or an explicit profile id
    pub profile: ProfileSelection,
    /// Target of direct deploys
    pub repository: DeploymentRepository,
    /// Used when this module triggers the remote commit
    pub commit: CommitOptions,
}

impl DeployOptions {
    pub fn new(repository: DeploymentRepository) -> Self {
        Self {
            directives: DeployDirectives::default(),
            connectivity: Connectivity::default(),
            profile: ProfileSelection::Auto,
            repository,
            commit: CommitOptions::default(),
        }
    }

    pub fn with_directives(mut self, directives: DeployDirectives) -> Self {
        self.directives = directives;
        self
    }

    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn with_profile(mut self, profile: ProfileSelection) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_commit(mut self, commit: CommitOptions) -> Self {
        self.commit = commit;
        self
    }
}

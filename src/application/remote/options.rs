//! Commit Options

/// Default description for repositories opened by a commit
pub const DEFAULT_DESCRIPTION: &str = "Staged by stagedeploy";

/// Options for the remote commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOptions {
    /// Deposit into this existing repository instead of creating one
    pub repository_id: Option<String>,
    /// Description passed to the manager for new repositories
    pub description: String,
}

impl CommitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repository_id(mut self, repository_id: Option<String>) -> Self {
        self.repository_id = repository_id.filter(|id| !id.trim().is_empty());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Default for CommitOptions {
    fn default() -> Self {
        Self {
            repository_id: None,
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

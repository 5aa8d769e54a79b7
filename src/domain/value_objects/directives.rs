//! Per-invocation deploy directives

/// Boolean switches that steer one module's deploy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeployDirectives {
    /// Bypass the whole workflow
    pub skip: bool,
    /// Deploy directly instead of staging locally
    pub skip_local_staging: bool,
    /// Stage locally but never push to the repository manager
    pub skip_remote_staging: bool,
    /// Flag the primary artifact as a release
    pub mark_as_release: bool,
}

impl DeployDirectives {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }

    pub fn with_skip_local_staging(mut self, skip: bool) -> Self {
        self.skip_local_staging = skip;
        self
    }

    pub fn with_skip_remote_staging(mut self, skip: bool) -> Self {
        self.skip_remote_staging = skip;
        self
    }

    pub fn with_mark_as_release(mut self, mark: bool) -> Self {
        self.mark_as_release = mark;
        self
    }

    /// Local staging is skipped for snapshot builds regardless of configuration
    pub fn effective_skip_local_staging(&self, primary_is_snapshot: bool) -> bool {
        self.skip_local_staging || primary_is_snapshot
    }
}

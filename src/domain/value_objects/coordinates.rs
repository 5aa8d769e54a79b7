//! Artifact coordinates - group, artifact and version
//!
//! Coordinates are what the profile catalog matches against and what the
//! repository layout is derived from.

use serde::{Deserialize, Serialize};

/// Version suffix that marks an unreleased build
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Group/artifact/version triple identifying a module's output
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl Coordinates {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// Returns true if the version is an unreleased snapshot
    pub fn is_snapshot(&self) -> bool {
        self.version.ends_with(SNAPSHOT_SUFFIX) || self.version == "SNAPSHOT"
    }

    /// Group id as a relative path (`com.example` -> `com/example`)
    pub fn group_path(&self) -> String {
        self.group_id.replace('.', "/")
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

//! Packaging tag of a module

use serde::{Deserialize, Serialize};

/// Packaging whose only deployable is the descriptor itself
pub const DESCRIPTOR_ONLY: &str = "pom";

/// Packaging type (`jar`, `war`, `pom`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Packaging(String);

impl Packaging {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn descriptor_only() -> Self {
        Self(DESCRIPTOR_ONLY.to_string())
    }

    /// True when the module deploys its descriptor as the primary deployable
    pub fn is_descriptor_only(&self) -> bool {
        self.0 == DESCRIPTOR_ONLY
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Packaging {
    fn default() -> Self {
        Self("jar".to_string())
    }
}

impl std::fmt::Display for Packaging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

//! Profile selection - automatic matching or an explicit override

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the staging profile for a module is chosen
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProfileSelection {
    /// Ask the profile catalog which profile matches the coordinates
    #[default]
    Auto,
    /// Use this profile id verbatim
    Explicit(String),
}

impl ProfileSelection {
    pub fn is_auto(&self) -> bool {
        matches!(self, ProfileSelection::Auto)
    }
}

impl FromStr for ProfileSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("profile must be 'auto' or a profile id".to_string());
        }
        if trimmed.eq_ignore_ascii_case("auto") {
            Ok(ProfileSelection::Auto)
        } else {
            Ok(ProfileSelection::Explicit(trimmed.to_string()))
        }
    }
}

impl TryFrom<String> for ProfileSelection {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProfileSelection> for String {
    fn from(value: ProfileSelection) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for ProfileSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileSelection::Auto => write!(f, "auto"),
            ProfileSelection::Explicit(id) => write!(f, "{}", id),
        }
    }
}

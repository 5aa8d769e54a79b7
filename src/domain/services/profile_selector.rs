//! Staging profile selection
//!
//! Exactly one matching profile is required; zero or several is a
//! configuration error. An explicit override bypasses matching.

use crate::domain::ports::StagingClient;
use crate::domain::value_objects::{Coordinates, ProfileSelection};
use crate::error::{StagingError, StagingResult};

pub struct StagingProfileSelector<'a, C: StagingClient> {
    client: &'a C,
}

impl<'a, C: StagingClient> StagingProfileSelector<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Resolve the profile id for `coordinates`
    pub fn select(
        &self,
        selection: &ProfileSelection,
        coordinates: &Coordinates,
    ) -> StagingResult<String> {
        if let ProfileSelection::Explicit(profile_id) = selection {
            // validated when the repository is opened
            tracing::debug!(profile = %profile_id, "using explicit staging profile");
            return Ok(profile_id.clone());
        }

        let mut matches = self
            .client
            .list_profiles_matching(coordinates)
            .map_err(|source| StagingError::ProfileQuery {
                coordinates: coordinates.clone(),
                source,
            })?;

        match matches.len() {
            0 => Err(StagingError::NoMatchingProfile {
                coordinates: coordinates.clone(),
            }),
            1 => {
                let profile = matches.remove(0);
                tracing::debug!(profile = %profile, %coordinates, "matched staging profile");
                Ok(profile.id)
            }
            _ => Err(StagingError::AmbiguousProfile {
                coordinates: coordinates.clone(),
                candidates: matches.into_iter().map(|p| p.id).collect(),
            }),
        }
    }
}

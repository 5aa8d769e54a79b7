//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts:
//! coordinates, per-module directives, connectivity and routing.

mod connectivity;
mod coordinates;
mod directives;
mod packaging;
mod profile;
mod profile_selection;
mod repository_state;
mod routing;

pub use connectivity::Connectivity;
pub use coordinates::{Coordinates, SNAPSHOT_SUFFIX};
pub use directives::DeployDirectives;
pub use packaging::Packaging;
pub use profile::StagingProfile;
pub use profile_selection::ProfileSelection;
pub use repository_state::RepositoryState;
pub use routing::{RoutingDecision, DIRECT_PROFILE};

//! Remote Staging Module
//!
//! Commits everything the local staging store holds to the repository
//! manager, one transaction per profile.
//!
//! ## Structure
//!
//! - `options` - `CommitOptions`
//! - `result` - `CommitReport`, `ProfileCommit`
//! - `coordinator` - `RemoteStagingCoordinator`

mod coordinator;
mod options;
mod result;

pub use coordinator::RemoteStagingCoordinator;
pub use options::CommitOptions;
pub use result::{CommitReport, ProfileCommit};

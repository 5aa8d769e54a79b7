//! Deploy Module
//!
//! Drives each module of a build through the staged deploy.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Result types (`ModuleReport`, `DispatchRecord`, `RemoteOutcome`)
//! - `use_case` - Core coordination logic (`DeployCoordinator`)
//!
//! ## Usage
//!
//! ```ignore
//! use stagedeploy::application::{DeployCoordinator, DeployOptions, StagingSession};
//!
//! let coordinator = DeployCoordinator::new(deployer, store, client);
//! let mut session = StagingSession::begin(modules);
//! for unit in &mut units {
//!     coordinator.deploy_module(&mut session, unit, &options)?;
//! }
//! session.finish();
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::{DispatchRecord, ModuleReport, RemoteOutcome};
pub use use_case::DeployCoordinator;

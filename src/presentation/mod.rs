//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating coordinators with infrastructure dependencies
//!
//! ## Usage
//!
//! ```ignore
//! use stagedeploy::presentation::factory;
//!
//! let events = factory::create_event_sink(false, 0, "deploy");
//! let coordinator = factory::create_deploy_coordinator(&config, events);
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, Commands};
pub use factory::create_deploy_coordinator;

//! Domain Layer
//!
//! Staging decisions without I/O of their own.
//!
//! ## Structure
//!
//! - `entities/` - Artifact, ProjectDeployUnit, ModuleSequence, StagingRepository
//! - `value_objects/` - Coordinates, directives, connectivity, routing
//! - `services/` - Profile selection, last-module detection, repository layout
//! - `ports/` - Collaborator interfaces implemented by infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

//! Build manifest
//!
//! The build context a build tool would otherwise supply: module order and
//! each module's deployables, read from a TOML file.

mod toml_manifest;

pub use toml_manifest::{AttachedDecl, BuildManifest, ModuleDecl};

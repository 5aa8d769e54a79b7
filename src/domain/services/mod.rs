//! Domain Services
//!
//! Stateless decisions the coordinators delegate to.

pub mod last_module;
pub mod layout;
pub mod profile_selector;
pub mod version_order;

pub use last_module::LastModuleDetector;
pub use layout::{artifact_dir, artifact_path, descriptor_path, ensure_relative_path, version_dir};
pub use profile_selector::StagingProfileSelector;
pub use version_order::{compare_versions, max_version};

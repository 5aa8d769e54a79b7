//! Direct deploy implementations

mod file_repository;

pub use file_repository::FileRepositoryDeployer;

//! File System Helpers
//!
//! Atomic writes shared by the store, the deployer and the staging client.

mod writer;

pub use writer::{atomic_copy, atomic_write, ensure_parent};

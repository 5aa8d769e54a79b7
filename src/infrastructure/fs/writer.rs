//! Atomic file writer
//!
//! Content lands in a temporary file next to the target and is renamed over
//! it, so readers never observe a half-written artifact.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::{TransportError, TransportResult};

/// Create the parent directory of `path`
pub fn ensure_parent(path: &Path) -> TransportResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TransportError::io(parent, e))?;
    }
    Ok(())
}

/// Write `content` to `path` atomically, creating parent directories
pub fn atomic_write(path: &Path, content: &[u8]) -> TransportResult<()> {
    ensure_parent(path)?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| TransportError::io(dir, e))?;
    temp.write_all(content)
        .and_then(|_| temp.flush())
        .map_err(|e| TransportError::io(temp.path(), e))?;
    temp.persist(path)
        .map_err(|e| TransportError::io(path, e.error))?;
    Ok(())
}

/// Copy `source` to `target` atomically, overwriting silently
pub fn atomic_copy(source: &Path, target: &Path) -> TransportResult<()> {
    let content = std::fs::read(source).map_err(|e| TransportError::io(source, e))?;
    atomic_write(target, &content)
}

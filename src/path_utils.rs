//! Cross-platform path utilities
//!
//! Glob matching and descriptor output always use forward slashes, whatever
//! the host separator is.

use std::path::{Path, PathBuf};

use crate::error::{MgsError, Result};

/// Convert a path to a string with forward slashes
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make `path` absolute against the current directory without resolving symlinks
pub fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| MgsError::IoError {
        message: format!("Failed to resolve {}: {e}", path.display()),
    })
}

//! Common file system operations with unified error handling

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, fs as fs_error};

/// Read a whole file as UTF-8 text
///
/// A missing file maps to `FileNotFound`; everything else (including invalid
/// UTF-8) maps to `FileReadFailed`.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => fs_error::not_found(path),
        _ => fs_error::read_failed(path, e),
    })
}

/// Replace the contents of `path` atomically
///
/// Writes into a temporary file in the same directory and renames it over the
/// target, so readers see either the old or the new contents. Permissions of an
/// existing target are carried over.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| fs_error::write_failed(path, e))?;
    tmp.write_all(contents.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| fs_error::write_failed(path, e))?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), metadata.permissions())
            .map_err(|e| fs_error::write_failed(path, e))?;
    }

    tmp.persist(path)
        .map_err(|e| fs_error::write_failed(path, e.error))?;

    Ok(())
}

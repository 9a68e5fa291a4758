//! File system errors

use std::path::Path;

use super::MgsError;

/// Creates a file-not-found error
pub fn not_found(path: impl AsRef<Path>) -> MgsError {
    MgsError::FileNotFound {
        path: path.as_ref().display().to_string(),
    }
}

/// Creates a directory-not-found error
pub fn dir_not_found(path: impl AsRef<Path>) -> MgsError {
    MgsError::DirectoryNotFound {
        path: path.as_ref().display().to_string(),
    }
}

/// Creates a read failure error
pub fn read_failed(path: impl AsRef<Path>, reason: impl ToString) -> MgsError {
    MgsError::FileReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a write failure error
pub fn write_failed(path: impl AsRef<Path>, reason: impl ToString) -> MgsError {
    MgsError::FileWriteFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

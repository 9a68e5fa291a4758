//! Configuration errors

use std::path::Path;

use super::MgsError;

pub fn not_found(path: impl AsRef<Path>) -> MgsError {
    MgsError::ConfigNotFound {
        path: path.as_ref().display().to_string(),
    }
}

pub fn read_failed(path: impl AsRef<Path>, reason: impl ToString) -> MgsError {
    MgsError::ConfigReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn parse_failed(path: impl AsRef<Path>, reason: impl ToString) -> MgsError {
    MgsError::ConfigParseFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn invalid_glob(pattern: &str, reason: impl ToString) -> MgsError {
    MgsError::InvalidGlob {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}

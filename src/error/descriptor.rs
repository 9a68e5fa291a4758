//! Extension descriptor errors

use std::path::Path;

use super::MgsError;

pub fn source_not_found(path: impl AsRef<Path>) -> MgsError {
    MgsError::SourceNotFound {
        path: path.as_ref().display().to_string(),
    }
}

pub fn no_sources(dir: impl AsRef<Path>) -> MgsError {
    MgsError::NoSources {
        dir: dir.as_ref().display().to_string(),
    }
}

pub fn serialize_failed(reason: impl ToString) -> MgsError {
    MgsError::SerializeFailed {
        reason: reason.to_string(),
    }
}

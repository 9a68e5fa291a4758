//! Artifact patching errors

use std::path::Path;

use super::MgsError;

pub fn anchor_not_found(path: impl AsRef<Path>, anchor: &str) -> MgsError {
    MgsError::AnchorNotFound {
        path: path.as_ref().display().to_string(),
        anchor: anchor.to_string(),
    }
}

pub fn required(path: impl AsRef<Path>) -> MgsError {
    MgsError::PatchRequired {
        path: path.as_ref().display().to_string(),
    }
}

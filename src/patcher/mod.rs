//! Artifact patcher for emscripten output
//!
//! Injects the [`shim::SHIM`] block before the first `var moduleRtn;` of a
//! generated bundle. Patching is idempotent: an artifact that already declares
//! `var window` is left untouched.
//!
//! The pure transformation lives in [`apply`]; [`patch_file`] wraps it with
//! reading and atomically writing the artifact.

pub mod shim;

use std::path::Path;

use crate::common::fs::{read_text, write_atomic};
use crate::error::{Result, patch as patch_error};

pub use shim::{ANCHOR, GUARD_MARKER, SHIM, SHIM_TAG};

/// Patch state derived from artifact contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchState {
    Unpatched,
    /// `tagged` is true when the shim was written by this tool
    Patched { tagged: bool },
}

impl PatchState {
    pub fn of(contents: &str) -> Self {
        if contents.contains(GUARD_MARKER) {
            PatchState::Patched {
                tagged: contents.contains(SHIM_TAG),
            }
        } else {
            PatchState::Unpatched
        }
    }
}

/// What a patch attempt did (or would do)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Applied,
    AlreadyPatched { tagged: bool },
    AnchorMissing,
}

impl PatchOutcome {
    pub fn changed(self) -> bool {
        matches!(self, PatchOutcome::Applied)
    }
}

/// Options for [`patch_file`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PatchOptions {
    /// Missing anchor is an error instead of a warning
    pub strict: bool,
    /// Never write; fail if the artifact still needs the shim
    pub check: bool,
}

/// Result of patching a file on disk
#[derive(Debug, Clone)]
pub struct PatchReport {
    pub outcome: PatchOutcome,
    pub digest_before: String,
    pub digest_after: String,
}

/// Apply the shim to in-memory contents
///
/// Returns the new contents only when something changed.
pub fn apply(contents: &str) -> (PatchOutcome, Option<String>) {
    if let PatchState::Patched { tagged } = PatchState::of(contents) {
        return (PatchOutcome::AlreadyPatched { tagged }, None);
    }

    let Some(pos) = contents.find(ANCHOR) else {
        return (PatchOutcome::AnchorMissing, None);
    };

    let mut patched = String::with_capacity(contents.len() + SHIM.len());
    patched.push_str(&contents[..pos]);
    patched.push_str(SHIM);
    patched.push_str(&contents[pos..]);

    (PatchOutcome::Applied, Some(patched))
}

/// Patch the artifact at `path` in place
///
/// The file is only rewritten when the shim was actually inserted, and the
/// rewrite is atomic.
pub fn patch_file(path: &Path, options: PatchOptions) -> Result<PatchReport> {
    let contents = read_text(path)?;
    let digest_before = crate::hash::hash_str(&contents);

    let (outcome, patched) = apply(&contents);

    if outcome == PatchOutcome::AnchorMissing && options.strict {
        return Err(patch_error::anchor_not_found(path, ANCHOR));
    }

    let digest_after = match patched {
        Some(new_contents) => {
            if options.check {
                return Err(patch_error::required(path));
            }
            write_atomic(path, &new_contents)?;
            crate::hash::hash_str(&new_contents)
        }
        None => digest_before.clone(),
    };

    Ok(PatchReport {
        outcome,
        digest_before,
        digest_after,
    })
}

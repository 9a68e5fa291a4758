//! Command implementations for mgs-build CLI

pub mod completions;
pub mod descriptor;
pub mod patch;
pub mod version;

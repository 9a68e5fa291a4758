//! Error types and handling for mgs-build
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`patch`]: Artifact patching errors
//! - [`config`]: Configuration errors
//! - [`descriptor`]: Extension descriptor errors

pub mod config;
pub mod descriptor;
pub mod fs;
pub mod patch;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mgs-build operations
#[derive(Error, Diagnostic, Debug)]
pub enum MgsError {
    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(mgs::fs::not_found))]
    FileNotFound { path: String },

    #[error("Directory not found: {path}")]
    #[diagnostic(code(mgs::fs::dir_not_found))]
    DirectoryNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(mgs::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(mgs::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mgs::fs::io_error))]
    IoError { message: String },

    // Patch errors
    #[error("Anchor '{anchor}' not found in {path}")]
    #[diagnostic(
        code(mgs::patch::anchor_not_found),
        help("The artifact layout may have changed; check the emscripten output or drop --strict")
    )]
    AnchorNotFound { path: String, anchor: String },

    #[error("Artifact is not patched: {path}")]
    #[diagnostic(
        code(mgs::patch::required),
        help("Run 'mgs-build patch <ARTIFACT>' without --check to apply the shim")
    )]
    PatchRequired { path: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(mgs::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(mgs::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(mgs::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(mgs::config::invalid_glob),
        help("Source patterns are relative to csrc_dir, e.g. 'src/*.c'")
    )]
    InvalidGlob { pattern: String, reason: String },

    // Descriptor errors
    #[error("Source file not found: {path}")]
    #[diagnostic(code(mgs::descriptor::source_not_found))]
    SourceNotFound { path: String },

    #[error("No source files found under {dir}")]
    #[diagnostic(
        code(mgs::descriptor::no_sources),
        help("Check 'sources' and 'extra_sources' in mgs-build.yaml")
    )]
    NoSources { dir: String },

    #[error("Failed to serialize descriptor: {reason}")]
    #[diagnostic(code(mgs::descriptor::serialize_failed))]
    SerializeFailed { reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(mgs::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MgsError>;

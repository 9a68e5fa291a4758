//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - patch: Patch command arguments
//! - descriptor: Descriptor command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod descriptor;
pub mod patch;

pub use completions::CompletionsArgs;
pub use descriptor::DescriptorArgs;
pub use patch::PatchArgs;

/// mgs-build - build pipeline helpers for the mgs library
#[derive(Parser, Debug)]
#[command(
    name = "mgs-build",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Build pipeline helpers for the mgs Gaussian splat library",
    long_about = "mgs-build patches emscripten output so it loads where browser globals \
                  are missing, and emits the native extension descriptor used to package \
                  the mgs Python module.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  mgs-build patch build/mgs.js        \x1b[90m# Inject the window shim\x1b[0m\n   \
                  mgs-build patch --check build/mgs.js \x1b[90m# Verify in CI without writing\x1b[0m\n   \
                  mgs-build descriptor --root MGS     \x1b[90m# Print the extension descriptor\x1b[0m\n"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inject the window shim into an emscripten artifact
    Patch(PatchArgs),

    /// Print the native extension descriptor
    Descriptor(DescriptorArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

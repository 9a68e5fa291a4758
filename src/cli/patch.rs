use clap::Parser;
use std::path::PathBuf;

/// Arguments for the patch command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Patch the emscripten bundle after the CMake build:\n    mgs-build patch build/mgs.js\n\n\
                  Fail the build if the anchor is missing:\n    mgs-build patch --strict build/mgs.js\n\n\
                  Verify an artifact is patched (CI):\n    mgs-build patch --check dist/mgs.js")]
pub struct PatchArgs {
    /// Emscripten-generated JavaScript artifact to patch in place
    pub artifact: PathBuf,

    /// Fail if the 'var moduleRtn;' anchor is not found
    #[arg(long)]
    pub strict: bool,

    /// Do not write; exit with an error if the artifact still needs patching
    #[arg(long)]
    pub check: bool,
}

//! mgs-build - build pipeline helpers for the mgs library
//!
//! Patches emscripten output with a `window` shim so the WebAssembly bundle
//! loads inside workers, and emits the native extension descriptor used to
//! package the `mgs` Python module.

use clap::Parser;
use clap::error::ErrorKind;

mod cli;
mod commands;
mod common;
mod config;
mod descriptor;
mod error;
mod hash;
mod patcher;
mod path_utils;
mod ui;

use cli::{Cli, Commands};
use ui::{Reporter, Verbosity};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout with success; every usage error exits 1
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let reporter = Reporter::new(Verbosity::from_flags(cli.quiet, cli.verbose));

    let result = match cli.command {
        Commands::Patch(args) => commands::patch::run(args, reporter),
        Commands::Descriptor(args) => commands::descriptor::run(args, reporter),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

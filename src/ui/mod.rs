//! Terminal status output
//!
//! Status lines go to stdout, warnings to stderr. `--quiet` silences both
//! (errors are still printed by `main`); `--verbose` enables detail lines such as
//! content digests.

use console::Style;

/// How chatty command output should be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Styled status reporter shared by all commands
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    verbosity: Verbosity,
}

impl Reporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// A green headline, e.g. `Patched dist/mgs.js`
    pub fn success(&self, label: &str, message: impl std::fmt::Display) {
        if self.verbosity != Verbosity::Quiet {
            println!("{} {}", Style::new().green().bold().apply_to(label), message);
        }
    }

    /// A neutral status line
    pub fn status(&self, label: &str, message: impl std::fmt::Display) {
        if self.verbosity != Verbosity::Quiet {
            println!("{} {}", Style::new().cyan().bold().apply_to(label), message);
        }
    }

    /// Indented detail, only with `--verbose`
    pub fn detail(&self, label: &str, message: impl std::fmt::Display) {
        if self.verbosity == Verbosity::Verbose {
            println!("  {} {}", Style::new().dim().apply_to(label), message);
        }
    }

    pub fn warn(&self, message: impl std::fmt::Display) {
        if self.verbosity != Verbosity::Quiet {
            eprintln!("{} {}", Style::new().yellow().bold().apply_to("Warning:"), message);
        }
    }
}

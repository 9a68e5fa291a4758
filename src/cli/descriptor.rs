use clap::Parser;
use std::path::PathBuf;

use crate::descriptor::OutputFormat;

/// Arguments for the descriptor command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the descriptor for the current project:\n    mgs-build descriptor\n\n\
                  Add the pybind11 headers:\n    mgs-build descriptor --include \"$(python -c 'import pybind11; print(pybind11.get_include())')\"\n\n\
                  Write YAML next to the sources:\n    mgs-build descriptor --root MGS --format yaml --output MGS/extension.yaml")]
pub struct DescriptorArgs {
    /// Project root containing the csrc directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file (defaults to <ROOT>/mgs-build.yaml when present)
    #[arg(long, short = 'c', env = "MGS_BUILD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Extra include directory, may be repeated
    #[arg(long = "include", short = 'I', value_name = "DIR")]
    pub include: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

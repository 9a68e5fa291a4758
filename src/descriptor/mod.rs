//! Native extension descriptor for the packaging tool
//!
//! The descriptor carries everything needed to declare the `mgs._C` extension
//! module. That is the source list, absolute include directories and the extra
//! compiler and linker flags. It also carries a BLAKE3 fingerprint over the
//! sources and flags so build caches can tell when a rebuild is needed.

pub mod sources;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ExtensionConfig;
use crate::error::{Result, descriptor as descriptor_error};
use crate::hash::Fingerprint;
use crate::path_utils::absolute;

/// Serialized output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionDescriptor {
    /// Dotted module name, e.g. `mgs._C`
    pub name: String,
    /// Project-relative source paths
    pub sources: Vec<String>,
    /// Absolute include directories
    pub include_dirs: Vec<String>,
    pub extra_compile_args: Vec<String>,
    pub extra_link_args: Vec<String>,
    pub fingerprint: String,
}

impl ExtensionDescriptor {
    /// Build the descriptor for the project at `root`
    ///
    /// `extra_includes` come from the command line and are appended after the
    /// configured include directories.
    pub fn build(root: &Path, config: &ExtensionConfig, extra_includes: &[PathBuf]) -> Result<Self> {
        let root = absolute(root)?;
        let sources = sources::collect(&root, config)?;

        let csrc = root.join(&config.csrc_dir);
        let mut include_dirs: Vec<String> = config
            .include_dirs
            .iter()
            .map(|dir| csrc.join(dir).display().to_string())
            .collect();
        include_dirs.extend(
            config
                .extra_include_dirs
                .iter()
                .chain(extra_includes)
                .map(|dir| root.join(dir).display().to_string()),
        );

        let name = config.module_name();

        let mut fingerprint = Fingerprint::default();
        fingerprint.add_str(&name);
        for source in &sources {
            fingerprint.add_file(source, &root.join(source))?;
        }
        fingerprint.add_str("compile");
        for arg in &config.compile_args {
            fingerprint.add_str(arg);
        }
        fingerprint.add_str("link");
        for arg in &config.link_args {
            fingerprint.add_str(arg);
        }

        Ok(Self {
            name,
            sources,
            include_dirs,
            extra_compile_args: config.compile_args.clone(),
            extra_link_args: config.link_args.clone(),
            fingerprint: fingerprint.finish(),
        })
    }

    /// Render in the requested format, newline-terminated
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(self)
                    .map_err(descriptor_error::serialize_failed)?;
                json.push('\n');
                Ok(json)
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(self).map_err(descriptor_error::serialize_failed)
            }
        }
    }
}

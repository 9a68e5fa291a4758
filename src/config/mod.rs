//! Extension build configuration (mgs-build.yaml)
//!
//! Every field is optional; the defaults describe the `mgs` extension as it is
//! laid out in the repository (`csrc/src/*.c` plus `csrc/ext.cpp`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config as config_error};

/// Config file looked up in the project root when `--config` is not given
pub const CONFIG_FILE: &str = "mgs-build.yaml";

/// Native extension build configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtensionConfig {
    /// Package name; the extension module is `{library}._C`
    pub library: String,

    /// C/C++ source root, relative to the project root
    pub csrc_dir: PathBuf,

    /// Glob patterns relative to `csrc_dir`
    pub sources: Vec<String>,

    /// Files relative to `csrc_dir` appended after the glob matches
    pub extra_sources: Vec<String>,

    /// Directories relative to `csrc_dir`, emitted as absolute paths
    pub include_dirs: Vec<String>,

    /// Additional include directories (absolute, or relative to the project root)
    pub extra_include_dirs: Vec<PathBuf>,

    pub compile_args: Vec<String>,

    pub link_args: Vec<String>,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            library: "mgs".to_string(),
            csrc_dir: PathBuf::from("csrc"),
            sources: vec!["src/*.c".to_string()],
            extra_sources: vec!["ext.cpp".to_string()],
            include_dirs: vec!["include".to_string(), "external".to_string()],
            extra_include_dirs: Vec::new(),
            compile_args: vec!["-O3".to_string(), "-Wno-missing-braces".to_string()],
            link_args: vec!["-O3".to_string()],
        }
    }
}

impl ExtensionConfig {
    /// Parse configuration from a YAML string
    fn parse(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty document means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Load configuration from an explicit file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config_error::not_found(path));
        }
        let yaml =
            std::fs::read_to_string(path).map_err(|e| config_error::read_failed(path, e))?;
        Self::parse(&yaml).map_err(|e| config_error::parse_failed(path, e))
    }

    /// Load `explicit` if given, else `<root>/mgs-build.yaml` if present, else defaults
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let default_path = root.join(CONFIG_FILE);
        if default_path.is_file() {
            Self::from_file(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Extension module name as the packaging tool expects it
    pub fn module_name(&self) -> String {
        format!("{}._C", self.library)
    }
}

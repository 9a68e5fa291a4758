//! Common test utilities for mgs-build integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Minimal emscripten-style module wrapper containing the patch anchor
#[allow(dead_code)]
pub const EMSCRIPTEN_BUNDLE: &str = "async function Module(moduleArg = {}) {\n\
                                     var moduleRtn;\n\
                                     var Module = moduleArg;\n\
                                     moduleRtn = readyPromise;\n\
                                     return moduleRtn;\n\
                                     }\n\
                                     export default Module;\n";

/// A temporary project directory for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    #[allow(dead_code)]
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace, creating parent directories
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Lay out the mgs csrc tree with the given C sources
    #[allow(dead_code)]
    pub fn create_csrc(&self, sources: &[&str]) {
        for source in sources {
            self.write_file(&format!("csrc/src/{source}"), "/* mgs */\n");
        }
        self.write_file("csrc/include/mgs_log.h", "#pragma once\n");
        self.write_file("csrc/ext.cpp", "// pybind11 bindings\n");
    }
}

/// Command for the real mgs-build binary
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn mgs_build_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mgs-build").expect("mgs-build binary should be built");
    cmd.env_remove("MGS_BUILD_CONFIG");
    cmd
}

/// Command running in `dir`
#[allow(dead_code)]
pub fn mgs_build_cmd_in(dir: &Path) -> Command {
    let mut cmd = mgs_build_cmd();
    cmd.current_dir(dir);
    cmd
}

//! Descriptor command integration tests

mod common;

use common::{TestWorkspace, mgs_build_cmd, mgs_build_cmd_in};
use predicates::prelude::*;

fn descriptor_json(workspace: &TestWorkspace, extra: &[&str]) -> serde_json::Value {
    let output = mgs_build_cmd()
        .arg("descriptor")
        .arg("--root")
        .arg(&workspace.path)
        .args(extra)
        .output()
        .expect("Failed to run mgs-build");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("descriptor should be JSON")
}

#[test]
fn test_descriptor_defaults() {
    let workspace = TestWorkspace::new();
    workspace.create_csrc(&["mgs_gaussians.c", "mgs_encode.c", "mgs_decode.c", "mgs_error.c"]);

    let json = descriptor_json(&workspace, &[]);

    assert_eq!(json["name"], "mgs._C");
    assert_eq!(
        json["sources"],
        serde_json::json!([
            "csrc/src/mgs_decode.c",
            "csrc/src/mgs_encode.c",
            "csrc/src/mgs_error.c",
            "csrc/src/mgs_gaussians.c",
            "csrc/ext.cpp"
        ])
    );
    assert_eq!(
        json["extra_compile_args"],
        serde_json::json!(["-O3", "-Wno-missing-braces"])
    );
    assert_eq!(json["extra_link_args"], serde_json::json!(["-O3"]));

    let includes = json["include_dirs"].as_array().unwrap();
    assert_eq!(includes.len(), 2);
    for include in includes {
        assert!(std::path::Path::new(include.as_str().unwrap()).is_absolute());
    }
    assert!(includes[0].as_str().unwrap().ends_with("include"));
    assert!(includes[1].as_str().unwrap().ends_with("external"));
}

#[test]
fn test_descriptor_reads_config_file() {
    let workspace = TestWorkspace::new();
    workspace.create_csrc(&["mgs_encode.c"]);
    workspace.write_file(
        "mgs-build.yaml",
        "library: splat\ncompile_args: ['-O2']\nextra_include_dirs: ['third_party/pybind11']\n",
    );

    let json = descriptor_json(&workspace, &[]);

    assert_eq!(json["name"], "splat._C");
    assert_eq!(json["extra_compile_args"], serde_json::json!(["-O2"]));
    assert_eq!(json["include_dirs"].as_array().unwrap().len(), 3);
}

#[test]
fn test_descriptor_include_flag() {
    let workspace = TestWorkspace::new();
    workspace.create_csrc(&["mgs_encode.c"]);

    let json = descriptor_json(&workspace, &["-I", "/opt/pybind11/include"]);

    let includes = json["include_dirs"].as_array().unwrap();
    assert_eq!(includes.last().unwrap(), "/opt/pybind11/include");
}

#[test]
fn test_descriptor_fingerprint_changes_with_sources() {
    let workspace = TestWorkspace::new();
    workspace.create_csrc(&["mgs_encode.c"]);

    let before = descriptor_json(&workspace, &[]);
    workspace.write_file("csrc/src/mgs_encode.c", "int changed;\n");
    let after = descriptor_json(&workspace, &[]);

    assert_ne!(before["fingerprint"], after["fingerprint"]);
}

#[test]
fn test_descriptor_yaml_output_file() {
    let workspace = TestWorkspace::new();
    workspace.create_csrc(&["mgs_decode.c"]);

    mgs_build_cmd_in(&workspace.path)
        .args(["descriptor", "--format", "yaml", "--output", "extension.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let yaml = workspace.read_file("extension.yaml");
    assert!(yaml.contains("name: mgs._C"));
    assert!(yaml.contains("csrc/src/mgs_decode.c"));
}

#[test]
fn test_descriptor_missing_csrc() {
    let workspace = TestWorkspace::new();

    mgs_build_cmd()
        .arg("descriptor")
        .arg("--root")
        .arg(&workspace.path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Directory not found"));
}

#[test]
fn test_descriptor_missing_extra_source() {
    let workspace = TestWorkspace::new();
    workspace.write_file("csrc/src/mgs_encode.c", "");

    mgs_build_cmd()
        .arg("descriptor")
        .arg("--root")
        .arg(&workspace.path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Source file not found"));
}

#[test]
fn test_descriptor_invalid_config() {
    let workspace = TestWorkspace::new();
    workspace.create_csrc(&["mgs_encode.c"]);
    workspace.write_file("mgs-build.yaml", "sources: [unclosed\n");

    mgs_build_cmd()
        .arg("descriptor")
        .arg("--root")
        .arg(&workspace.path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_descriptor_config_from_env() {
    let workspace = TestWorkspace::new();
    workspace.create_csrc(&["mgs_encode.c"]);
    let config = workspace.write_file("configs/release.yaml", "link_args: ['-O3', '-s']\n");

    let output = mgs_build_cmd()
        .arg("descriptor")
        .arg("--root")
        .arg(&workspace.path)
        .env("MGS_BUILD_CONFIG", &config)
        .output()
        .expect("Failed to run mgs-build");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["extra_link_args"], serde_json::json!(["-O3", "-s"]));
}

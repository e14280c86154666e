//! Integration tests for config warning behavior.
//!
//! These tests verify that the CLI properly warns users when config files have errors.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn write_project_config(dir: &Path, content: &str) {
    let config_dir = dir.join(".ontop");
    fs::create_dir_all(&config_dir).expect("Failed to create .ontop dir");
    fs::write(config_dir.join("config.toml"), content).expect("Failed to write config");
}

/// The `config` command loads the hierarchy and works on every platform.
fn run_config(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ontop"))
        .current_dir(dir)
        .env("HOME", dir)
        .env("USERPROFILE", dir)
        .arg("config")
        .output()
        .expect("Failed to execute ontop")
}

/// Test that an invalid config file produces a warning in stderr.
#[test]
fn test_config_warning_on_invalid_toml() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(temp_dir.path(), "invalid toml [[[");

    let output = run_config(temp_dir.path());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
    assert!(
        stderr.contains("Tip: Check"),
        "Expected tip about config files in stderr, got: {}",
        stderr
    );
    // Falls back to defaults and keeps going.
    assert!(output.status.success());
}

/// A label that could never be read back from a menu is rejected.
#[test]
fn test_config_warning_on_empty_label() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(temp_dir.path(), "[menu]\nlabel = \"   \"\n");

    let output = run_config(temp_dir.path());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains("menu.label must not be empty"),
        "Expected validation message in stderr, got: {}",
        stderr
    );
}

/// Test that a valid config file does not produce warnings.
#[test]
fn test_no_warning_on_valid_config() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(
        temp_dir.path(),
        r#"
[menu]
label = "Pin on top"

[diagnostics]
show_dialog = false
"#,
    );

    let output = run_config(temp_dir.path());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !stderr.contains("Warning"),
        "Should not show warning for valid config, got: {}",
        stderr
    );
    assert!(stdout.contains("Pin on top"));
    assert!(stdout.contains("show_dialog = false"));
}

/// Project config overrides user config.
#[test]
fn test_project_config_overrides_user_config() {
    let home_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let project_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_project_config(home_dir.path(), "[menu]\nlabel = \"From user\"\n");
    write_project_config(project_dir.path(), "[menu]\nlabel = \"From project\"\n");

    let output = Command::new(env!("CARGO_BIN_EXE_ontop"))
        .current_dir(project_dir.path())
        .env("HOME", home_dir.path())
        .env("USERPROFILE", home_dir.path())
        .args(["config", "--json"])
        .output()
        .expect("Failed to execute ontop");

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("config --json should print JSON");
    assert_eq!(value["menu"]["label"], "From project");
}

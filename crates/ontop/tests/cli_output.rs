//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.

use std::path::Path;
use std::process::{Command, Output};

/// Run ontop in `dir`, with `dir` as the home directory so no user config
/// leaks into the test.
fn run_ontop(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ontop"))
        .current_dir(dir)
        .env("HOME", dir)
        .env("USERPROFILE", dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute ontop")
}

#[test]
fn test_help_lists_subcommands() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_ontop(temp_dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for subcommand in ["run", "list", "toggle", "config"] {
        assert!(
            stdout.contains(subcommand),
            "Expected '{}' in help output, got: {}",
            subcommand,
            stdout
        );
    }
}

#[test]
fn test_version_output() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_ontop(temp_dir.path(), &["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

/// Verify that stdout contains only user-facing output (no JSON logs)
/// and that stderr is empty by default (quiet mode)
#[test]
fn test_config_output_is_clean() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_ontop(temp_dir.path(), &["config"]);

    assert!(
        output.status.success(),
        "ontop config failed with exit code {:?}. stderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !stdout.contains(r#""event""#),
        "stdout should not contain log lines, got: {}",
        stdout
    );
    assert!(
        stderr.is_empty(),
        "stderr should be empty in quiet mode, got: {}",
        stderr
    );
}

/// Verify that verbose mode emits JSON logs to stderr
#[test]
fn test_verbose_mode_emits_json_logs() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_ontop(temp_dir.path(), &["-v", "config"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains("core.app.startup_completed"),
        "Expected startup event in verbose stderr, got: {}",
        stderr
    );
    for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
        let parsed: Result<serde_json::Value, _> = serde_json::from_str(line);
        assert!(parsed.is_ok(), "stderr line is not JSON: {}", line);
    }
}

#[test]
fn test_config_json_output() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_ontop(temp_dir.path(), &["config", "--json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value =
        serde_json::from_str(&stdout).expect("config --json should print JSON");
    assert!(value.get("menu").is_some());
    assert!(value.get("diagnostics").is_some());
}

#[cfg(not(windows))]
#[test]
fn test_list_fails_off_windows() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_ontop(temp_dir.path(), &["list"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("only available on Windows"),
        "Expected platform error, got: {}",
        stderr
    );
}

#[cfg(not(windows))]
#[test]
fn test_toggle_fails_off_windows() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_ontop(temp_dir.path(), &["toggle", "--pid", "1"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to toggle"));
}

#[cfg(windows)]
#[test]
fn test_list_json_is_array() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_ontop(temp_dir.path(), &["list", "--json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value =
        serde_json::from_str(&stdout).expect("list --json should print JSON");
    assert!(value.is_array());
}

#[cfg(windows)]
#[test]
fn test_toggle_unknown_process_fails() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = run_ontop(
        temp_dir.path(),
        &["toggle", "definitely-not-a-running-process"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No process with a visible main window"));
}

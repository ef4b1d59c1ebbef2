//! Error scenario integration tests

use std::path::Path;
use std::process::Command;

fn companion_bin(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_retroclock-companion"));
    cmd.env_remove("RETROCLOCK_SETTINGS_FILE")
        .env_remove("RETROCLOCK_BASE_URL")
        .env("NO_COLOR", "1")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"));
    cmd
}

#[test]
fn invalid_base_url_is_a_usage_error() {
    let home = tempfile::tempdir().unwrap();
    let output = companion_bin(home.path())
        .args(["show-configuration", "--no-open", "--base-url", "not a url"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid base URL"),
        "Expected error about base URL, got: {}",
        stderr
    );
}

#[test]
fn config_commands_ignore_invalid_base_url() {
    let home = tempfile::tempdir().unwrap();
    let output = companion_bin(home.path())
        .args(["config", "path", "--base-url", "not a url"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim_end().ends_with("config.toml"));
}

#[test]
fn missing_subcommand() {
    let home = tempfile::tempdir().unwrap();
    let output = companion_bin(home.path())
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn config_get_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let output = companion_bin(home.path())
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_base_url() {
    let home = tempfile::tempdir().unwrap();
    let output = companion_bin(home.path())
        .args(["config", "set", "base_url", "ftp://example.com/config.html"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("base_url"),
        "Expected error about base_url, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_boolean() {
    let home = tempfile::tempdir().unwrap();
    let output = companion_bin(home.path())
        .args(["config", "set", "open_browser", "maybe"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("true") || stderr.contains("false"),
        "Expected error about invalid boolean, got: {}",
        stderr
    );
}

#[test]
fn config_list_with_no_file() {
    let home = tempfile::tempdir().unwrap();
    let output = companion_bin(home.path())
        .args(["config", "list"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("not set"),
        "Expected config list output, got: {}",
        stdout
    );
}

#[test]
fn config_file_base_url_is_used() {
    let home = tempfile::tempdir().unwrap();
    let set = companion_bin(home.path())
        .args(["config", "set", "base_url", "https://example.org/config.html"])
        .output()
        .expect("Failed to execute command");
    assert!(set.status.success());

    let output = companion_bin(home.path())
        .args(["show-configuration", "--no-open"])
        .arg("--settings-file")
        .arg(home.path().join("storage.json"))
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "https://example.org/config.html?dateformat=0");
}

//! Integration tests for the `fmc` CLI binary.
//!
//! These tests cover argument parsing, help output, shell completions,
//! config-file diagnostics, and error handling. None of them require a
//! live management center.
#![allow(clippy::unwrap_used)]

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `fmc` binary with env isolation.
///
/// Clears all `FMC_*` env vars so tests never pick up the developer's
/// environment, and pins `RUST_LOG` out of the way for deterministic
/// log-file content.
fn fmc_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("fmc");
    cmd.env_remove("FMC_CONFIG")
        .env_remove("FMC_HOST")
        .env_remove("FMC_USERNAME")
        .env_remove("FMC_PASSWORD")
        .env_remove("FMC_DOMAIN")
        .env_remove("FMC_OUTPUT")
        .env_remove("FMC_TIMEOUT")
        .env_remove("FMC_LOG_FILE")
        .env_remove("FMC_VERIFY_TLS")
        .env_remove("FMC_CA_CERT")
        .env_remove("RUST_LOG");
    cmd
}

/// Scratch directory used as the working directory for runs, so the
/// default `config.json` and `fmc_add_ftd.log` stay out of the repo.
fn scratch() -> TempDir {
    TempDir::new().unwrap()
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = fmc_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    fmc_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Secure Firewall Management Center")
            .and(predicate::str::contains("devices"))
            .and(predicate::str::contains("domains"))
            .and(predicate::str::contains("completions")),
    );
}

#[test]
fn test_version_flag() {
    fmc_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fmc"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    fmc_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    fmc_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_fish() {
    fmc_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = fmc_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_devices_add_without_config_file() {
    let dir = scratch();
    let output = fmc_cmd()
        .current_dir(dir.path())
        .args(["devices", "add"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1), "Expected exit code 1");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Configuration file not found"),
        "Expected missing-config diagnostic:\n{stderr}"
    );
    assert!(
        stderr.contains("config.json"),
        "Expected the config path in the help text:\n{stderr}"
    );
}

#[test]
fn test_config_missing_required_key() {
    let dir = scratch();
    fs::write(
        dir.path().join("config.json"),
        r#"{ "username": "admin", "password": "secret" }"#,
    )
    .unwrap();

    let output = fmc_cmd()
        .current_dir(dir.path())
        .args(["devices", "add"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("fmc_ip"),
        "Expected the missing key to be named:\n{stderr}"
    );
}

#[test]
fn test_config_malformed_json() {
    let dir = scratch();
    fs::write(dir.path().join("config.json"), "{ this is not json").unwrap();

    let output = fmc_cmd()
        .current_dir(dir.path())
        .args(["devices", "add"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(
        !output.stderr.is_empty(),
        "Expected a parse diagnostic on stderr"
    );
}

#[test]
fn test_password_required_when_not_interactive() {
    let dir = scratch();
    fs::write(
        dir.path().join("config.json"),
        r#"{
            "fmc_ip": "192.0.2.10",
            "username": "admin",
            "ftd_devices": [ { "name": "ftd-a", "ip": "10.1.1.1" } ]
        }"#,
    )
    .unwrap();

    // stdin is piped, so the hidden prompt is skipped and the run must
    // fail with a credentials error instead of hanging.
    let output = fmc_cmd()
        .current_dir(dir.path())
        .args(["devices", "add"])
        .write_stdin("")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No password available"),
        "Expected credentials diagnostic:\n{stderr}"
    );
}

#[test]
fn test_invalid_output_format() {
    let output = fmc_cmd()
        .args(["--output", "invalid", "domains", "list"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_global_flags_parsing() {
    // All flags should parse; the failure must be about the missing
    // config file, not about argument parsing.
    let dir = scratch();
    fmc_cmd()
        .current_dir(dir.path())
        .args([
            "--output",
            "json",
            "--verbose",
            "--verify-tls",
            "--timeout",
            "60",
            "devices",
            "add",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration"));
}

#[test]
fn test_host_flag_overrides_config() {
    let dir = scratch();
    fs::write(
        dir.path().join("config.json"),
        r#"{
            "fmc_ip": "unused.invalid",
            "username": "admin",
            "password": "secret",
            "ftd_devices": [ { "name": "ftd-a", "ip": "10.1.1.1" } ]
        }"#,
    )
    .unwrap();

    // Nothing listens on port 9; a fast connection failure naming the
    // flag's host proves the override took precedence over the file.
    let output = fmc_cmd()
        .current_dir(dir.path())
        .args(["--host", "http://127.0.0.1:9", "devices", "add"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("127.0.0.1"),
        "Expected the overriding host in the diagnostic:\n{stderr}"
    );
}

// ── Run log ─────────────────────────────────────────────────────────

#[test]
fn test_log_file_appends_across_runs() {
    let dir = scratch();
    let log_path = dir.path().join("fmc_add_ftd.log");

    fmc_cmd()
        .current_dir(dir.path())
        .args(["devices", "add"])
        .assert()
        .failure();
    let first_len = fs::metadata(&log_path).unwrap().len();
    assert!(first_len > 0, "Expected the run log to be written");

    fmc_cmd()
        .current_dir(dir.path())
        .args(["devices", "add"])
        .assert()
        .failure();
    let second_len = fs::metadata(&log_path).unwrap().len();
    assert!(
        second_len > first_len,
        "Expected the run log to grow, not be truncated ({first_len} -> {second_len})"
    );
}

#[test]
fn test_log_file_flag_redirects_log() {
    let dir = scratch();
    let log_path = dir.path().join("elsewhere").join("custom.log");
    fs::create_dir_all(log_path.parent().unwrap()).unwrap();

    fmc_cmd()
        .current_dir(dir.path())
        .args(["--log-file", log_path.to_str().unwrap(), "devices", "add"])
        .assert()
        .failure();

    assert!(log_path.exists(), "Expected the log at the custom path");
    assert!(
        !dir.path().join("fmc_add_ftd.log").exists(),
        "Expected no log at the default path"
    );
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_devices_subcommands_exist() {
    fmc_cmd()
        .args(["devices", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("add"));
}

#[test]
fn test_domains_subcommands_exist() {
    fmc_cmd()
        .args(["domains", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"));
}

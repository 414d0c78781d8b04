//! Argument parsing, help, version and schema.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::runnerctl;

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    runnerctl().assert().code(2).stderr(predicate::str::contains(
        "Offline checks for self-hosted CI runner manifests",
    ));
}

#[test]
fn test_cli_help_lists_commands() {
    runnerctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("schema"));
}

#[test]
fn test_version_command_shows_version() {
    runnerctl()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("runnerctl 0.1.0"));
}

#[test]
fn test_version_command_json() {
    runnerctl()
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"version":"0.1.0"}"#));
}

#[test]
fn test_no_color_env_accepts_any_value() {
    for value in ["1", "true", ""] {
        runnerctl()
            .env("NO_COLOR", value)
            .arg("version")
            .assert()
            .success()
            .stdout(predicate::str::contains("runnerctl 0.1.0"));
    }
}

#[test]
fn test_no_color_env_with_subcommand_flags() {
    runnerctl()
        .env("NO_COLOR", "true")
        .args(["validate", "--no-color"])
        .arg(crate::fixture("repo-runner.yaml"))
        .assert()
        .success();
}

#[test]
fn test_invalid_log_filter_warns_and_continues() {
    runnerctl()
        .env("RUNNERCTL_LOG", "runner=loud")
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"version":"0.1.0"}"#))
        .stderr(predicate::str::contains("invalid RUNNERCTL_LOG filter"))
        .stderr(predicate::str::contains("runner=loud"));
}

#[test]
fn test_valid_log_filter_is_silent() {
    runnerctl()
        .env("RUNNERCTL_LOG", "error")
        .arg("version")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_unknown_command_fails() {
    runnerctl().arg("frobnicate").assert().code(2);
}

#[test]
fn test_schema_outputs_runner_schema() {
    let output = runnerctl().arg("schema").output().expect("run schema");
    assert!(output.status.success());
    let schema: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("schema is JSON");
    assert_eq!(schema["title"], "Runner");
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("^[^/]+/[^/]+$"), "repository pattern missing");
}

//! Integration tests for runnerctl
//!
//! These tests spawn the actual binary against the manifests in
//! `tests/fixtures`.

mod check_command;
mod cli_tests;
mod get_command;
mod validate_command;

use assert_cmd::Command;

pub fn runnerctl() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("runnerctl"));
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUNNERCTL_NAMESPACE");
    cmd.env_remove("RUNNERCTL_LOG");
    cmd
}

pub fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

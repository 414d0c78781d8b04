//! `runnerctl check` end-to-end.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::{fixture, runnerctl};

#[test]
fn test_check_fresh_registration_is_registerable() {
    runnerctl()
        .args(["check", &fixture("repo-runner.yaml")])
        .assert()
        .success()
        .stdout(predicate::str::contains("ci/repo-runner: registerable until"));
}

#[test]
fn test_check_after_expiry_needs_new_registration() {
    runnerctl()
        .args([
            "check",
            "--at",
            "2099-01-01T00:00:00Z",
            &fixture("repo-runner.yaml"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("needs new registration (expired)"));
}

#[test]
fn test_check_list_reports_each_reason() {
    let output = runnerctl()
        .args(["check", "--json", &fixture("runner-list.yaml")])
        .output()
        .expect("run check");
    assert!(output.status.success());
    let reports: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(reports[0]["name"], "org-runner");
    assert_eq!(reports[0]["registerable"], false);
    assert_eq!(reports[0]["reason"], "expired");
    assert_eq!(reports[1]["name"], "platform/enterprise-runner");
    assert_eq!(reports[1]["reason"], "missing_token");
    assert!(reports[1].get("expiresAt").is_none());
}

#[test]
fn test_check_org_runner_before_expiry_is_registerable() {
    let output = runnerctl()
        .args([
            "check",
            "--json",
            "--at",
            "2020-05-31T23:59:59Z",
            &fixture("runner-list.yaml"),
        ])
        .output()
        .expect("run check");
    let reports: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(reports[0]["registerable"], true);
}

#[test]
fn test_check_rejects_bad_instant() {
    runnerctl()
        .args(["check", "--at", "yesterday", &fixture("repo-runner.yaml")])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("RFC 3339"));
}

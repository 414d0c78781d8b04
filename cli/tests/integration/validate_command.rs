//! `runnerctl validate` end-to-end.

#![allow(clippy::expect_used)]

use std::io::Write as _;

use predicates::prelude::*;

use crate::{fixture, runnerctl};

#[test]
fn test_validate_accepts_repository_runner() {
    runnerctl()
        .args(["validate", &fixture("repo-runner.yaml")])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ci/repo-runner: repository acme/widgets",
        ));
}

#[test]
fn test_validate_accepts_every_runner_in_list() {
    runnerctl()
        .args(["validate", &fixture("runner-list.yaml")])
        .assert()
        .success()
        .stdout(predicate::str::contains("org-runner: organization acme"))
        .stdout(predicate::str::contains(
            "platform/enterprise-runner: enterprise acme-corp",
        ));
}

#[test]
fn test_validate_rejects_ambiguous_scope() {
    runnerctl()
        .args(["validate", &fixture("ambiguous-scope.yaml")])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("confused-runner: ambiguous scope"));
}

#[test]
fn test_validate_rejects_repository_without_owner() {
    runnerctl()
        .args(["validate", &fixture("bad-repository.yaml")])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid repository 'widgets'"));
}

#[test]
fn test_validate_mixed_files_fail_overall() {
    runnerctl()
        .args([
            "validate",
            &fixture("repo-runner.yaml"),
            &fixture("ambiguous-scope.yaml"),
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("repo-runner"));
}

#[test]
fn test_validate_json_reports_codes() {
    let output = runnerctl()
        .args([
            "validate",
            "--json",
            &fixture("repo-runner.yaml"),
            &fixture("ambiguous-scope.yaml"),
        ])
        .output()
        .expect("run validate");
    assert_eq!(output.status.code(), Some(1));
    let reports: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(reports[0]["valid"], true);
    assert_eq!(reports[0]["scope"], "repository acme/widgets");
    assert_eq!(reports[1]["valid"], false);
    assert_eq!(reports[1]["code"], "ambiguous_scope");
}

#[test]
fn test_validate_missing_scope_from_temp_manifest() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "apiVersion: actions.summerwind.dev/v1alpha1\nkind: Runner\nmetadata:\n  name: bare\nspec:\n  labels: [linux]"
    )
    .expect("write manifest");

    runnerctl()
        .arg("validate")
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("bare: missing scope"));
}

#[test]
fn test_validate_unreadable_file_is_an_error() {
    runnerctl()
        .args(["validate", "/nonexistent/runner.yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn test_validate_unreadable_file_json_error_object() {
    runnerctl()
        .args(["validate", "--json", "/nonexistent/runner.yaml"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(r#""error": true"#))
        .stdout(predicate::str::contains(r#""code": "command_failed""#));
}

#[test]
fn test_validate_rejects_unsupported_kind() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "kind: Pod\nmetadata:\n  name: p").expect("write manifest");

    runnerctl()
        .arg("validate")
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unsupported kind 'Pod'"));
}

//! `runnerctl get` end-to-end.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::{fixture, runnerctl};

#[test]
fn test_get_prints_printer_columns() {
    runnerctl()
        .args(["get", &fixture("repo-runner.yaml")])
        .assert()
        .success()
        .stdout(predicate::str::contains("NAMESPACE"))
        .stdout(predicate::str::contains("REPOSITORY"))
        .stdout(predicate::str::contains("acme/widgets"))
        .stdout(predicate::str::contains("[linux,x64]"))
        .stdout(predicate::str::contains("Running"));
}

#[test]
fn test_get_uses_configured_default_namespace() {
    runnerctl()
        .env("RUNNERCTL_NAMESPACE", "ci-pool")
        .args(["get", &fixture("runner-list.yaml")])
        .assert()
        .success()
        .stdout(predicate::str::contains("ci-pool"))
        .stdout(predicate::str::contains("platform"));
}

#[test]
fn test_get_json_emits_runner_list() {
    let output = runnerctl()
        .args(["get", "--json", &fixture("runner-list.yaml")])
        .output()
        .expect("run get");
    assert!(output.status.success());
    let list: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(list["kind"], "RunnerList");
    assert_eq!(list["items"][0]["metadata"]["name"], "org-runner");
    assert_eq!(list["items"][0]["spec"]["ephemeral"], false);
    assert_eq!(list["items"][1]["spec"]["enterprise"], "acme-corp");
}

//! `runnerctl validate` — admission-style check of runner declarations.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use runner_api::Runner;
use serde::Serialize;

use crate::manifest;
use crate::output::{OutputContext, json};

#[derive(Args)]
pub struct ValidateArgs {
    /// Manifest files (YAML or JSON)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Outcome for one runner.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub file: String,
    pub name: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationReport {
    #[must_use]
    pub fn for_runner(file: &str, runner: &Runner) -> Self {
        let name = runner.metadata.key();
        match runner.spec.validate() {
            Ok(scope) => Self {
                file: file.to_string(),
                name,
                valid: true,
                scope: Some(scope.to_string()),
                code: None,
                error: None,
            },
            Err(e) => Self {
                file: file.to_string(),
                name,
                valid: false,
                scope: None,
                code: Some(e.code()),
                error: Some(e.to_string()),
            },
        }
    }
}

/// Run the validate command. Fails (exit 1) if any runner is rejected.
pub fn run(ctx: &OutputContext, args: &ValidateArgs, as_json: bool) -> Result<ExitCode> {
    let reports: Vec<ValidationReport> = manifest::load_all(&args.files)?
        .iter()
        .map(|(file, runner)| ValidationReport::for_runner(file, runner))
        .collect();

    if as_json {
        json::print(&reports)?;
    } else {
        for report in &reports {
            match (&report.scope, &report.error) {
                (Some(scope), _) => ctx.success(&format!("{}: {scope}", report.name)),
                (None, Some(error)) => ctx.error(&format!("{}: {error}", report.name)),
                (None, None) => {}
            }
        }
    }

    if reports.iter().all(|r| r.valid) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

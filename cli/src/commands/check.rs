//! `runnerctl check` — whether cached registrations can be reused.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use runner_api::{Registerability, Runner};
use serde::Serialize;

use crate::manifest;
use crate::output::{OutputContext, json};

#[derive(Args)]
pub struct CheckArgs {
    /// Manifest files (YAML or JSON)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Evaluate at this RFC 3339 instant instead of now
    #[arg(long, value_parser = parse_instant)]
    pub at: Option<DateTime<Utc>>,
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub name: String,
    pub registerable: bool,
    pub reason: Registerability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl CheckReport {
    #[must_use]
    pub fn for_runner(runner: &Runner, now: DateTime<Utc>) -> Self {
        let reason = runner.registerability(now);
        Self {
            name: runner.metadata.key(),
            registerable: reason.is_registerable(),
            reason,
            expires_at: runner.status.registration.expires_at(),
        }
    }
}

/// Run the check command. A stale registration is a normal outcome, so
/// this exits 0 unless a manifest cannot be loaded.
pub fn run(ctx: &OutputContext, args: &CheckArgs, as_json: bool) -> Result<ExitCode> {
    let now = args.at.unwrap_or_else(Utc::now);
    let reports: Vec<CheckReport> = manifest::load_all(&args.files)?
        .iter()
        .map(|(_, runner)| CheckReport::for_runner(runner, now))
        .collect();

    if as_json {
        json::print(&reports)?;
        return Ok(ExitCode::SUCCESS);
    }

    for report in &reports {
        if report.registerable {
            let until = report
                .expires_at
                .map(|t| format!(" until {}", t.to_rfc3339()))
                .unwrap_or_default();
            ctx.success(&format!("{}: registerable{until}", report.name));
        } else {
            ctx.warn(&format!(
                "{}: needs new registration ({})",
                report.name, report.reason
            ));
        }
    }
    Ok(ExitCode::SUCCESS)
}

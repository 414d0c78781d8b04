//! `runnerctl schema` — print the Runner JSON schema.

use std::process::ExitCode;

use anyhow::Result;

use crate::output::json;

pub fn run() -> Result<ExitCode> {
    json::print(&runner_api::runner_schema())?;
    Ok(ExitCode::SUCCESS)
}

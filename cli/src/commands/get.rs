//! `runnerctl get` — tabular listing using the resource's printer columns.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use runner_api::{PRINTER_COLUMNS, Runner, RunnerList};

use crate::config::Config;
use crate::manifest;
use crate::output::{json, table};

#[derive(Args)]
pub struct GetArgs {
    /// Manifest files (YAML or JSON)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(config: &Config, args: &GetArgs, as_json: bool) -> Result<ExitCode> {
    let runners: Vec<Runner> = manifest::load_all(&args.files)?
        .into_iter()
        .map(|(_, runner)| runner)
        .collect();

    if as_json {
        json::print(&RunnerList::new(runners))?;
    } else {
        println!("{}", render(config, &runners));
    }
    Ok(ExitCode::SUCCESS)
}

/// NAMESPACE and NAME followed by the printer columns, upper-cased.
#[must_use]
pub fn render(config: &Config, runners: &[Runner]) -> String {
    let names: Vec<String> = PRINTER_COLUMNS
        .iter()
        .map(|c| c.name.to_uppercase())
        .collect();
    let mut header = vec!["NAMESPACE", "NAME"];
    header.extend(names.iter().map(String::as_str));

    let rows: Vec<Vec<String>> = runners
        .iter()
        .map(|runner| {
            let namespace = if runner.metadata.namespace.is_empty() {
                config.namespace.clone()
            } else {
                runner.metadata.namespace.clone()
            };
            let mut row = vec![namespace, runner.name().to_string()];
            row.extend(runner.printer_row());
            row
        })
        .collect();

    table::render(&header, &rows)
}

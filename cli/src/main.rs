//! runnerctl - offline checks for runner manifests

#![cfg_attr(test, allow(clippy::expect_used))]

use std::process::ExitCode;

use clap::Parser;

use runnerctl::cli::Cli;
use runnerctl::config::Config;
use runnerctl::output::json;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let as_json = cli.json;

    let result = Config::from_env().and_then(|config| {
        runnerctl::logging::init(&config.log);
        cli.run(&config)
    });

    match result {
        Ok(code) => code,
        Err(e) => {
            if as_json {
                match json::format_error(&format!("{e:#}"), "command_failed") {
                    Ok(body) => println!("{body}"),
                    Err(_) => eprintln!("Error: {e:#}"),
                }
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

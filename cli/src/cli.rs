//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::config::Config;
use crate::output::OutputContext;

/// Offline checks for self-hosted CI runner manifests
#[derive(Parser)]
#[command(
    name = "runnerctl",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (the NO_COLOR environment variable is also honored)
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check that each runner declares exactly one well-formed scope
    Validate(commands::validate::ValidateArgs),

    /// Report whether each runner's cached registration is still usable
    Check(commands::check::CheckArgs),

    /// List runners with their scope, labels and phase
    Get(commands::get::GetArgs),

    /// Print the JSON schema of the Runner resource
    Schema,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    pub fn run(self, config: &Config) -> Result<ExitCode> {
        let Cli {
            no_color,
            quiet,
            json,
            command,
        } = self;
        let ctx = OutputContext::new(no_color, quiet);
        match command {
            Command::Validate(args) => commands::validate::run(&ctx, &args, json),
            Command::Check(args) => commands::check::run(&ctx, &args, json),
            Command::Get(args) => commands::get::run(config, &args, json),
            Command::Schema => commands::schema::run(),
            Command::Version => {
                commands::version::run(json);
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

//! `reqtrace`: check and list Gherkin feature files.
//!
//! Each feature file is parsed on its own; a file that fails is reported and
//! logged without stopping the batch. The exit status is `0` when every file
//! was processed, `1` when any file failed or a command error occurred, and
//! `2` for invalid configuration.

mod cli;
mod config;
mod discovery;
mod error;
mod logging;
mod output;
mod report;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};

use crate::cli::Cli;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            error!(error = %e, "invalid configuration");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);
    debug!(version = env!("CARGO_PKG_VERSION"), "starting reqtrace");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli::run(&cli.command, &mut out) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            debug!(failed, "some feature files failed");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config(cli: &Cli) -> Result<CliConfig, CliError> {
    let config = CliConfig::from_env()?;
    Ok(config.apply_overrides(cli.log_level))
}

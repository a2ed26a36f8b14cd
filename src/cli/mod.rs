//! CLI module for shows-api
//!
//! Provides command-line interface for:
//! - serve: Load config, seed the store and run the HTTP server
//! - check-config: Validate a configuration file and print the result

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check_config, run_command, serve, Config, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

//! CLI argument definitions using clap
//!
//! Commands:
//! - shows-api serve [--config <path>] [--port <port>]
//! - shows-api check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shows-api - a small JSON API over an in-memory store of TV shows
#[derive(Parser, Debug)]
#[command(name = "shows-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (default: ./shows-api.json if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overrides the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate the configuration, then print it
    CheckConfig {
        /// Path to configuration file (default: ./shows-api.json if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["shows-api", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert!(config.is_none());
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_check_config() {
        let cli = Cli::try_parse_from(["shows-api", "check-config", "--config", "a.json"]).unwrap();
        match cli.command {
            Command::CheckConfig { config } => {
                assert_eq!(config, Some(PathBuf::from("a.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["shows-api", "serve", "--port", "http"]).is_err());
    }
}

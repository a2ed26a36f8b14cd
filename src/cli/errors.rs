//! CLI errors
//!
//! Any of these ends the process with exit status 1.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::http_server::InvalidCorsOrigin;
use crate::shows::ShowError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// Failures while loading configuration or running the server
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config JSON in {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A field parsed but holds an unusable value
    #[error("invalid config: {field} {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("invalid config: {0}")]
    CorsOrigin(#[from] InvalidCorsOrigin),

    #[error("invalid config: seed[{index}]: {source}")]
    Seed {
        index: usize,
        #[source]
        source: ShowError,
    },

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error("failed to create tokio runtime: {0}")]
    Runtime(#[source] io::Error),

    /// Bind or accept loop failure
    #[error("HTTP server failed: {0}")]
    Serve(#[source] io::Error),

    #[error("failed to render config: {0}")]
    Render(#[source] serde_json::Error),
}

impl CliError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CliError::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether the failure came from the configuration rather than runtime
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CliError::ReadConfig { .. }
                | CliError::ParseConfig { .. }
                | CliError::InvalidConfig { .. }
                | CliError::CorsOrigin(_)
                | CliError::Seed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = CliError::invalid("server.port", "must be > 0");
        assert_eq!(err.to_string(), "invalid config: server.port must be > 0");
        assert!(err.is_config_error());
    }

    #[test]
    fn test_seed_error_keeps_source() {
        let err = CliError::Seed {
            index: 2,
            source: ShowError::MissingName,
        };
        assert!(err.to_string().contains("seed[2]"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_runtime_errors_are_not_config_errors() {
        let err = CliError::Serve(io::Error::new(io::ErrorKind::AddrInUse, "taken"));
        assert!(!err.is_config_error());
        assert_eq!(err.to_string(), "HTTP server failed: taken");
    }
}

//! Logging setup for shows-api
//!
//! Events go through `tracing`. `RUST_LOG` wins over the configured filter.
//!
//! # Usage
//!
//! ```ignore
//! use shows_api::observability;
//!
//! observability::init_tracing("info")?;
//! tracing::info!(id = 1, "show created");
//! ```

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Result type for logging setup
pub type ObservabilityResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Parse a filter directive such as `info` or `shows_api=debug,tower_http=info`
pub fn parse_filter(directives: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(directives)
}

/// Install the global fmt subscriber.
///
/// Fails if `default_filter` does not parse or a subscriber is already set.
pub fn init_tracing(default_filter: &str) -> ObservabilityResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(default_filter)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert!(parse_filter("info").is_ok());
        assert!(parse_filter("shows_api=debug,tower_http=info").is_ok());
        assert!(parse_filter("shows_api=loud").is_err());
    }
}

//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including host, port, and CORS settings.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A configured CORS origin that browsers could never send
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid CORS origin '{origin}': {reason}")]
pub struct InvalidCorsOrigin {
    pub origin: String,
    pub reason: &'static str,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins. Empty means any origin.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:8081".to_string(), // Vue dev server, next free port after the API
        "http://127.0.0.1:8081".to_string(),
        "http://localhost:5173".to_string(), // Vite
    ]
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parse one origin as sent in the `Origin` header: `scheme://host[:port]`
    pub fn parse_cors_origin(origin: &str) -> Result<HeaderValue, InvalidCorsOrigin> {
        let invalid = |reason| InvalidCorsOrigin {
            origin: origin.to_string(),
            reason,
        };

        let rest = origin
            .strip_prefix("http://")
            .or_else(|| origin.strip_prefix("https://"))
            .ok_or_else(|| invalid("must start with http:// or https://"))?;
        if rest.is_empty() {
            return Err(invalid("missing host"));
        }
        if rest.contains('/') {
            return Err(invalid("must not contain a path"));
        }

        HeaderValue::from_str(origin).map_err(|_| invalid("not a valid header value"))
    }

    /// Check every configured CORS origin
    pub fn validate_cors_origins(&self) -> Result<(), InvalidCorsOrigin> {
        self.cors_origins
            .iter()
            .try_for_each(|origin| Self::parse_cors_origin(origin).map(|_| ()))
    }
}

//! CLI command implementations

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability;
use crate::shows::{self, NewShow};
use crate::store::MockStore;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Config file read when `--config` is not given, if it exists
pub const DEFAULT_CONFIG_PATH: &str = "./shows-api.json";

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// tracing filter used when RUST_LOG is unset (default "info")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Shows inserted into the store at startup
    #[serde(default)]
    pub seed: Vec<NewShow>,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            log_filter: default_log_filter(),
            seed: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config =
            serde_json::from_str(&content).map_err(|source| CliError::ParseConfig {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;

        Ok(config)
    }

    /// Load `path` if given, else the default file if present, else defaults
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::invalid("server.port", "must be > 0"));
        }

        if self.server.host.trim().is_empty() {
            return Err(CliError::invalid("server.host", "must not be empty"));
        }

        self.server.validate_cors_origins()?;

        observability::parse_filter(&self.log_filter)
            .map_err(|e| CliError::invalid("log_filter", e.to_string()))?;

        for (index, show) in self.seed.iter().enumerate() {
            show.validate()
                .map_err(|source| CliError::Seed { index, source })?;
        }

        Ok(())
    }

    /// Build the store described by `seed`
    pub fn seeded_store(&self) -> MockStore {
        MockStore::with_collection(
            shows::COLLECTION,
            self.seed.iter().cloned().map(NewShow::into_fields),
        )
    }
}

/// Run a parsed command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

/// Start the HTTP server and block until it stops
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::resolve(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
        config.validate()?;
    }

    observability::init_tracing(&config.log_filter)
        .map_err(|e| CliError::Logging(e.to_string()))?;

    let store = Arc::new(config.seeded_store());
    tracing::info!(
        seeded = store.len(shows::COLLECTION),
        collection = shows::COLLECTION,
        "store ready"
    );

    let server = HttpServer::with_config(config.server, store);

    // Start the async runtime and run the server
    let rt = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;

    rt.block_on(server.start()).map_err(CliError::Serve)
}

/// Validate the configuration and print the effective settings as JSON
pub fn check_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = Config::resolve(config_path)?;
    let rendered = serde_json::to_string_pretty(&config).map_err(CliError::Render)?;
    println!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let file = write_config("{}");
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"{
                "server": {"host": "127.0.0.1", "port": 9000, "cors_origins": []},
                "log_filter": "shows_api=debug",
                "seed": [
                    {"name": "Game of Thrones", "episodes_seen": 3},
                    {"name": "Naruto", "episodes_seen": 220}
                ]
            }"#,
        );
        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.server.socket_addr(), "127.0.0.1:9000");
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.log_filter, "shows_api=debug");
        assert_eq!(config.seed.len(), 2);
    }

    #[test]
    fn test_seeded_store() {
        let config = Config {
            seed: vec![NewShow::new("Dark", 3), NewShow::new("Lost", 10)],
            ..Config::default()
        };
        let store = config.seeded_store();

        assert_eq!(store.len(shows::COLLECTION), 2);
        let first = store.get_by_id(shows::COLLECTION, 1).unwrap();
        assert_eq!(first.get("name"), Some(&serde_json::json!("Dark")));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Config::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CliError::ReadConfig { .. }));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let file = write_config("{ nope");
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, CliError::ParseConfig { .. }));
    }

    #[test]
    fn test_rejects_port_zero() {
        let file = write_config(r#"{"server": {"port": 0}}"#);
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, CliError::InvalidConfig { ref field, .. } if field == "server.port"));
    }

    #[test]
    fn test_rejects_bad_seed() {
        let file = write_config(r#"{"seed": [{"name": "", "episodes_seen": 1}]}"#);
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Seed { index: 0, .. }));

        let file = write_config(r#"{"seed": [{"name": "Dark"}]}"#);
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_rejects_bad_log_filter() {
        let file = write_config(r#"{"log_filter": "shows_api=loud"}"#);
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_rejects_bad_cors_origin() {
        let file = write_config(r#"{"server": {"cors_origins": ["http://ok:1", "localhost:8081"]}}"#);
        let err = Config::load(file.path()).unwrap_err();
        match err {
            CliError::CorsOrigin(invalid) => assert_eq!(invalid.origin, "localhost:8081"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_cors_list_is_valid() {
        let file = write_config(r#"{"server": {"cors_origins": []}}"#);
        assert!(Config::load(file.path()).is_ok());
    }

    #[test]
    fn test_resolve_explicit_path() {
        let file = write_config(r#"{"server": {"port": 7000}}"#);
        let config = Config::resolve(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 7000);
    }
}

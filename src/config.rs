//! Application-level configuration loading: listening port, database, static assets and
//! catalog sources.

use std::{env, fs, io::ErrorKind, path::PathBuf, time::Duration};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "GAME_CATALOG_CONFIG_PATH";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_URL: &str = "sqlite://games.db?mode=rwc";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
/// Top-100 catalogs imported by `GET /api/games/populate`.
const DEFAULT_CATALOG_SOURCES: [&str; 2] = [
    "https://interview-marketing-eng-dev.s3.eu-west-1.amazonaws.com/android.top100.json",
    "https://interview-marketing-eng-dev.s3.eu-west-1.amazonaws.com/ios.top100.json",
];

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub static_dir: PathBuf,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where the bulk import pulls its catalogs from.
pub struct CatalogConfig {
    /// Fetched in order; each one becomes a single bulk insert.
    pub sources: Vec<String>,
    /// Per-request timeout for outbound fetches. `None` waits indefinitely.
    pub fetch_timeout: Option<Duration>,
}

impl AppConfig {
    /// Load the configuration from disk and the environment, falling back to built-in defaults.
    pub fn load() -> Self {
        Self::load_file().with_env_overrides(|key| env::var(key).ok())
    }

    fn load_file() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(app_config) => {
                    info!(
                        path = %path.display(),
                        sources = app_config.catalog.sources.len(),
                        "loaded configuration file"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse a JSON configuration document; omitted keys keep their default value.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<RawConfig>(contents).map(Into::into)
    }

    /// Apply `PORT`/`SERVER_PORT`, `DATABASE_URL` and `STATIC_DIR` on top of the loaded values.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT").or_else(|| lookup("SERVER_PORT"));
        if let Some(value) = port {
            match value.parse::<u16>() {
                Ok(port) => self.port = port,
                Err(err) => warn!(%value, error = %err, "ignoring invalid port override"),
            }
        }
        if let Some(url) = lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            self.database_url = url;
        }
        if let Some(dir) = lookup("STATIC_DIR").filter(|dir| !dir.is_empty()) {
            self.static_dir = PathBuf::from(dir);
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            fetch_timeout: Some(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS)),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    port: Option<u16>,
    database_url: Option<String>,
    max_connections: Option<u32>,
    static_dir: Option<PathBuf>,
    catalog: Option<RawCatalog>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCatalog {
    sources: Option<Vec<String>>,
    /// `0` disables the timeout.
    fetch_timeout_secs: Option<u64>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            port: value.port.unwrap_or(DEFAULT_PORT),
            database_url: value
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()),
            max_connections: value.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS),
            static_dir: value
                .static_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            catalog: value.catalog.unwrap_or_default().into(),
        }
    }
}

impl From<RawCatalog> for CatalogConfig {
    fn from(value: RawCatalog) -> Self {
        let timeout_secs = value
            .fetch_timeout_secs
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS);
        Self {
            sources: value.sources.unwrap_or_else(default_sources),
            fetch_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

fn default_sources() -> Vec<String> {
    DEFAULT_CATALOG_SOURCES.map(String::from).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_catalogs() {
        let config = AppConfig::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.catalog.sources.len(), 2);
        assert!(config.catalog.sources[0].ends_with("android.top100.json"));
        assert!(config.catalog.sources[1].ends_with("ios.top100.json"));
        assert_eq!(config.catalog.fetch_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = AppConfig::from_json(
            r#"{"port": 3000, "catalog": {"fetch_timeout_secs": 0}}"#,
        )
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.catalog.sources, default_sources());
        assert_eq!(config.catalog.fetch_timeout, None);
    }

    #[test]
    fn custom_sources_replace_defaults() {
        let config = AppConfig::from_json(
            r#"{"catalog": {"sources": ["http://localhost:9000/a.json"]}}"#,
        )
        .unwrap();
        assert_eq!(config.catalog.sources, vec!["http://localhost:9000/a.json"]);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(AppConfig::from_json(r#"{"port": "not a port"}"#).is_err());
    }

    #[test]
    fn environment_overrides_file_values() {
        let config = AppConfig::default().with_env_overrides(|key| match key {
            "SERVER_PORT" => Some("4000".into()),
            "DATABASE_URL" => Some("sqlite::memory:".into()),
            "STATIC_DIR" => Some("/srv/assets".into()),
            _ => None,
        });
        assert_eq!(config.port, 4000);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.static_dir, PathBuf::from("/srv/assets"));
    }

    #[test]
    fn invalid_port_override_is_ignored() {
        let config = AppConfig::default().with_env_overrides(|key| {
            (key == "PORT").then(|| "eighty".to_string())
        });
        assert_eq!(config.port, DEFAULT_PORT);
    }
}

//! Layered service configuration.
//!
//! Sources, later ones winning: built-in defaults, the TOML file (when it exists), then
//! `CRUD_`-prefixed environment variables with `__` separating nested keys
//! (`CRUD_SERVER__BIND_ADDRESS=0.0.0.0:9000`).

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_PREFIX: &str = "CRUD_";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Mailbox capacity of each resource actor.
    pub buffer_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default `EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Overrides the bind address from the command line, if given.
    pub fn apply_cli_overrides(&mut self, bind: Option<String>) {
        if let Some(bind) = bind {
            self.server.bind_address = bind;
        }
    }
}

fn figment(path: &Path) -> Figment {
    let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));
    if path.exists() {
        figment = figment.merge(Toml::file(path));
    }
    figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Loads the configuration, reading `path` only if it exists.
pub fn load(path: &Path) -> Result<AppConfig, Box<figment::Error>> {
    figment(path).extract().map_err(Box::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.store.buffer_size, 32);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_file_overrides_defaults_per_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[store]\nbuffer_size = 8\n\n[log]\nfilter = \"debug\"").unwrap();

        let config = load(file.path()).unwrap();

        assert_eq!(config.store.buffer_size, 8);
        assert_eq!(config.log.filter, "debug");
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[store]\nbuffer_size = \"many\"").unwrap();
        assert!(load(file.path()).is_err());
    }

    #[test]
    fn test_cli_bind_wins() {
        let mut config = AppConfig::default();
        config.apply_cli_overrides(None);
        assert_eq!(config.server.bind_address, "127.0.0.1:8080");
        config.apply_cli_overrides(Some("0.0.0.0:9000".into()));
        assert_eq!(config.server.bind_address, "0.0.0.0:9000");
    }
}

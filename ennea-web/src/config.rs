//! Server settings
//!
//! Merges command-line/env overrides with the optional TOML config file.
//! Priority: CLI or env > config file > compiled default.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use ennea_common::config::{
    database_path, resolve_root_folder, StorageBackend, TomlConfig, ROOT_FOLDER_ENV,
};

/// Default listening port
pub const DEFAULT_PORT: u16 = 5780;

/// Default bind address (loopback only)
pub const DEFAULT_BIND: &str = "127.0.0.1";

/// Default tracing filter when neither RUST_LOG nor `log_level` is set
pub const DEFAULT_LOG_FILTER: &str = "ennea_web=info,ennea_common=info,tower_http=info";

/// Values supplied on the command line (or their env fallbacks)
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind: Option<String>,
    pub root_folder: Option<PathBuf>,
    pub storage: Option<StorageBackend>,
}

/// Fully resolved server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    pub root_folder: PathBuf,
    pub storage: StorageBackend,
}

impl ServerConfig {
    pub fn resolve(cli: CliOverrides, toml_config: &TomlConfig) -> Self {
        let root_folder =
            resolve_root_folder(cli.root_folder.as_deref(), ROOT_FOLDER_ENV, toml_config);

        Self {
            bind_address: cli
                .bind
                .or_else(|| toml_config.bind_address.clone())
                .unwrap_or_else(|| DEFAULT_BIND.to_string()),
            port: cli.port.or(toml_config.port).unwrap_or(DEFAULT_PORT),
            root_folder,
            storage: cli.storage.or(toml_config.storage).unwrap_or_default(),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.bind_address))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn database_path(&self) -> PathBuf {
        database_path(&self.root_folder)
    }
}

/// Tracing filter derived from the config file's `log_level`
pub fn log_filter(toml_config: &TomlConfig) -> String {
    match toml_config.log_level.as_deref().map(str::trim) {
        Some(level) if !level.is_empty() => format!(
            "ennea_web={level},ennea_common={level},tower_http={level}",
            level = level
        ),
        _ => DEFAULT_LOG_FILTER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toml_config() -> TomlConfig {
        TomlConfig {
            root_folder: Some(PathBuf::from("/srv/ennea")),
            port: Some(9000),
            bind_address: Some("0.0.0.0".into()),
            log_level: Some("debug".into()),
            storage: Some(StorageBackend::Memory),
        }
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = ServerConfig::resolve(
            CliOverrides {
                root_folder: Some(PathBuf::from("/tmp/root")),
                ..CliOverrides::default()
            },
            &TomlConfig::default(),
        );
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind_address, DEFAULT_BIND);
        assert_eq!(config.storage, StorageBackend::Sqlite);
        assert_eq!(config.database_path(), PathBuf::from("/tmp/root/ennea.db"));
    }

    #[test]
    fn test_toml_fills_missing_cli_values() {
        let config = ServerConfig::resolve(
            CliOverrides {
                root_folder: Some(PathBuf::from("/tmp/root")),
                ..CliOverrides::default()
            },
            &toml_config(),
        );
        assert_eq!(config.port, 9000);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.storage, StorageBackend::Memory);
    }

    #[test]
    fn test_cli_beats_toml() {
        let config = ServerConfig::resolve(
            CliOverrides {
                port: Some(1234),
                bind: Some("::1".into()),
                root_folder: Some(PathBuf::from("/tmp/cli")),
                storage: Some(StorageBackend::Sqlite),
            },
            &toml_config(),
        );
        assert_eq!(config.port, 1234);
        assert_eq!(config.bind_address, "::1");
        assert_eq!(config.root_folder, PathBuf::from("/tmp/cli"));
        assert_eq!(config.storage, StorageBackend::Sqlite);
        assert_eq!(config.socket_addr().unwrap().to_string(), "[::1]:1234");
    }

    #[test]
    fn test_bad_bind_address() {
        let config = ServerConfig {
            bind_address: "localhost:80".into(),
            port: 1,
            root_folder: PathBuf::from("/tmp"),
            storage: StorageBackend::Memory,
        };
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(
            log_filter(&TomlConfig::default()),
            "ennea_web=info,ennea_common=info,tower_http=info"
        );
        assert_eq!(
            log_filter(&TomlConfig {
                log_level: Some("  ".into()),
                ..TomlConfig::default()
            }),
            DEFAULT_LOG_FILTER
        );
        assert_eq!(
            log_filter(&toml_config()),
            "ennea_web=debug,ennea_common=debug,tower_http=debug"
        );
    }
}

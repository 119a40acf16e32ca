//! Configuration loading and root folder resolution

use crate::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable naming the root folder
pub const ROOT_FOLDER_ENV: &str = "ENNEA_ROOT_FOLDER";

/// SQLite database file name inside the root folder
pub const DATABASE_FILE_NAME: &str = "ennea.db";

/// Optional settings read from `config.toml`
///
/// Every key may be omitted; a missing file is equivalent to an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TomlConfig {
    pub root_folder: Option<PathBuf>,
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub storage: Option<StorageBackend>,
}

impl TomlConfig {
    /// Parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Where submitted test results are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process memory; lost on restart
    Memory,
    /// `ennea.db` in the root folder
    #[default]
    Sqlite,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Memory => f.write_str("memory"),
            StorageBackend::Sqlite => f.write_str("sqlite"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "sqlite" => Ok(StorageBackend::Sqlite),
            other => Err(Error::Config(format!(
                "Unknown storage backend '{}' (expected memory or sqlite)",
                other
            ))),
        }
    }
}

/// Root folder resolution, highest priority first:
/// 1. Command-line argument
/// 2. Environment variable
/// 3. TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(
    cli_arg: Option<&Path>,
    env_var_name: &str,
    toml_config: &TomlConfig,
) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var(env_var_name) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Some(path) = &toml_config.root_folder {
        return path.clone();
    }

    default_root_folder()
}

/// Database file inside a root folder
pub fn database_path(root_folder: &Path) -> PathBuf {
    root_folder.join(DATABASE_FILE_NAME)
}

/// Locate the platform configuration file, if any
pub fn find_config_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("ennea").join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/ennea/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// OS-dependent default root folder path
pub fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/ennea (or /var/lib/ennea for system-wide)
        dirs::data_local_dir()
            .map(|d| d.join("ennea"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/ennea"))
    } else if cfg!(target_os = "macos") {
        // ~/Library/Application Support/ennea
        dirs::data_dir()
            .map(|d| d.join("ennea"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/ennea"))
    } else if cfg!(target_os = "windows") {
        // %LOCALAPPDATA%\ennea
        dirs::data_local_dir()
            .map(|d| d.join("ennea"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\ennea"))
    } else {
        PathBuf::from("./ennea_data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::parse(
            r#"
            root_folder = "/srv/ennea"
            port = 8080
            bind_address = "0.0.0.0"
            log_level = "debug"
            storage = "memory"
            "#,
        )
        .unwrap();

        assert_eq!(config.root_folder, Some(PathBuf::from("/srv/ennea")));
        assert_eq!(config.port, Some(8080));
        assert_eq!(config.bind_address.as_deref(), Some("0.0.0.0"));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.storage, Some(StorageBackend::Memory));
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(TomlConfig::parse("").unwrap(), TomlConfig::default());
    }

    #[test]
    fn test_parse_rejects_bad_storage() {
        assert!(TomlConfig::parse("storage = \"postgres\"").is_err());
    }

    #[test]
    fn test_storage_backend_from_str() {
        assert_eq!("memory".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
        assert_eq!("SQLite".parse::<StorageBackend>().unwrap(), StorageBackend::Sqlite);
        assert!("redis".parse::<StorageBackend>().is_err());
        assert_eq!(StorageBackend::default(), StorageBackend::Sqlite);
    }

    #[test]
    fn test_database_path() {
        let path = database_path(Path::new("/tmp/ennea"));
        assert_eq!(path, PathBuf::from("/tmp/ennea/ennea.db"));
    }

    #[test]
    fn test_default_root_folder_not_empty() {
        assert!(!default_root_folder().as_os_str().is_empty());
    }
}

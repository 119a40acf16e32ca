//! Tests for root folder resolution and config file loading
//!
//! Tests that touch ENNEA_ROOT_FOLDER are marked #[serial] so they do not
//! race each other on the process environment.

use ennea_common::config::{
    default_root_folder, resolve_root_folder, StorageBackend, TomlConfig, ROOT_FOLDER_ENV,
};
use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn toml_with_root(root: &str) -> TomlConfig {
    TomlConfig {
        root_folder: Some(PathBuf::from(root)),
        ..TomlConfig::default()
    }
}

#[test]
#[serial]
fn test_cli_argument_wins() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/from-env");
    let resolved = resolve_root_folder(
        Some(Path::new("/tmp/from-cli")),
        ROOT_FOLDER_ENV,
        &toml_with_root("/tmp/from-toml"),
    );
    env::remove_var(ROOT_FOLDER_ENV);

    assert_eq!(resolved, PathBuf::from("/tmp/from-cli"));
}

#[test]
#[serial]
fn test_env_var_beats_toml() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/from-env");
    let resolved = resolve_root_folder(None, ROOT_FOLDER_ENV, &toml_with_root("/tmp/from-toml"));
    env::remove_var(ROOT_FOLDER_ENV);

    assert_eq!(resolved, PathBuf::from("/tmp/from-env"));
}

#[test]
#[serial]
fn test_empty_env_var_is_ignored() {
    env::set_var(ROOT_FOLDER_ENV, "  ");
    let resolved = resolve_root_folder(None, ROOT_FOLDER_ENV, &toml_with_root("/tmp/from-toml"));
    env::remove_var(ROOT_FOLDER_ENV);

    assert_eq!(resolved, PathBuf::from("/tmp/from-toml"));
}

#[test]
#[serial]
fn test_toml_used_without_cli_or_env() {
    env::remove_var(ROOT_FOLDER_ENV);
    let resolved = resolve_root_folder(None, ROOT_FOLDER_ENV, &toml_with_root("/tmp/from-toml"));

    assert_eq!(resolved, PathBuf::from("/tmp/from-toml"));
}

#[test]
#[serial]
fn test_falls_back_to_compiled_default() {
    env::remove_var(ROOT_FOLDER_ENV);
    let resolved = resolve_root_folder(None, ROOT_FOLDER_ENV, &TomlConfig::default());

    assert_eq!(resolved, default_root_folder());
}

#[test]
fn test_load_config_file_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = 9000\nstorage = \"sqlite\"\n").unwrap();

    let config = TomlConfig::load(&path).unwrap();
    assert_eq!(config.port, Some(9000));
    assert_eq!(config.storage, Some(StorageBackend::Sqlite));
    assert!(config.root_folder.is_none());
}

#[test]
fn test_load_malformed_config_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = \"not a number\"").unwrap();

    let err = TomlConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("config.toml"), "{}", err);
}

#[test]
fn test_load_missing_config_is_io_error() {
    let err = TomlConfig::load(Path::new("/nonexistent/ennea/config.toml")).unwrap_err();
    assert!(matches!(err, ennea_common::Error::Io(_)));
}

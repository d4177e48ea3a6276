//! Unit tests for configuration resolution and graceful degradation
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate KENNEL_* variables are marked with #[serial].

use kennel_common::config::{
    CliOverrides, ServiceConfig, TomlConfig, CATALOG_API_KEY_ENV, CATALOG_URL_ENV,
    DEFAULT_CATALOG_URL, DEFAULT_PORT, ROOT_FOLDER_ENV,
};
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

fn clear_env() {
    env::remove_var(ROOT_FOLDER_ENV);
    env::remove_var(CATALOG_URL_ENV);
    env::remove_var(CATALOG_API_KEY_ENV);
}

#[test]
fn test_default_toml_config() {
    let config = TomlConfig::default();

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.catalog.url, DEFAULT_CATALOG_URL);
    assert_eq!(config.catalog.timeout(), Duration::from_secs(30));
    assert!(config.catalog.max_age().is_none());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_parse_partial_toml_fills_defaults() {
    let config = TomlConfig::parse(
        r#"
        port = 6000

        [catalog]
        api_key = "secret"
        max_age_secs = 600
        "#,
    )
    .unwrap();

    assert_eq!(config.port, 6000);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.catalog.url, DEFAULT_CATALOG_URL);
    assert_eq!(config.catalog.api_key.as_deref(), Some("secret"));
    assert_eq!(config.catalog.max_age(), Some(Duration::from_secs(600)));
}

#[test]
fn test_malformed_toml_is_config_error() {
    let result = TomlConfig::parse("port = \"not a number\"");
    assert!(matches!(result, Err(kennel_common::Error::Config(_))));
}

#[test]
fn test_missing_file_uses_defaults() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = TomlConfig::load(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn test_load_from_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "root_folder = \"/srv/kennel\"\n[logging]\nlevel = \"debug\"\n").unwrap();

    let config = TomlConfig::load(&path).unwrap();
    assert_eq!(config.root_folder, Some(PathBuf::from("/srv/kennel")));
    assert_eq!(config.logging.level, "debug");
}

#[test]
#[serial]
fn test_cli_overrides_env_and_toml() {
    clear_env();
    env::set_var(ROOT_FOLDER_ENV, "/from/env");

    let toml_config = TomlConfig {
        root_folder: Some(PathBuf::from("/from/toml")),
        ..TomlConfig::default()
    };
    let cli = CliOverrides {
        root_folder: Some(PathBuf::from("/from/cli")),
        port: Some(7000),
    };

    let config = ServiceConfig::resolve(&cli, toml_config);
    assert_eq!(config.root_folder, PathBuf::from("/from/cli"));
    assert_eq!(config.database_path, PathBuf::from("/from/cli/kennel.db"));
    assert_eq!(config.port, 7000);

    clear_env();
}

#[test]
#[serial]
fn test_env_overrides_toml() {
    clear_env();
    env::set_var(ROOT_FOLDER_ENV, "/from/env");
    env::set_var(CATALOG_URL_ENV, "http://localhost:9999/breeds");
    env::set_var(CATALOG_API_KEY_ENV, "env-key");

    let toml_config = TomlConfig {
        root_folder: Some(PathBuf::from("/from/toml")),
        ..TomlConfig::default()
    };

    let config = ServiceConfig::resolve(&CliOverrides::default(), toml_config);
    assert_eq!(config.root_folder, PathBuf::from("/from/env"));
    assert_eq!(config.catalog.url, "http://localhost:9999/breeds");
    assert_eq!(config.catalog.api_key.as_deref(), Some("env-key"));

    clear_env();
}

#[test]
#[serial]
fn test_toml_root_and_explicit_database_path() {
    clear_env();

    let toml_config = TomlConfig {
        root_folder: Some(PathBuf::from("/from/toml")),
        database_path: Some(PathBuf::from("/elsewhere/dogs.db")),
        ..TomlConfig::default()
    };

    let config = ServiceConfig::resolve(&CliOverrides::default(), toml_config);
    assert_eq!(config.root_folder, PathBuf::from("/from/toml"));
    assert_eq!(config.database_path, PathBuf::from("/elsewhere/dogs.db"));
    assert_eq!(config.bind_address(), format!("127.0.0.1:{}", DEFAULT_PORT));
}

#[test]
#[serial]
fn test_no_overrides_uses_os_default() {
    clear_env();

    let config = ServiceConfig::resolve(&CliOverrides::default(), TomlConfig::default());
    assert_eq!(config.root_folder, kennel_common::config::default_root_folder());
    assert!(config.database_path.ends_with("kennel.db"));
}

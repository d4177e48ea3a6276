//! Configuration loading and root folder resolution
//!
//! Bootstrap settings come from four sources, highest priority first:
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. TOML config file
//! 4. Compiled defaults
//!
//! A missing TOML file is not an error (warning + defaults). A file that
//! exists but does not parse is.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Root folder override
pub const ROOT_FOLDER_ENV: &str = "KENNEL_ROOT_FOLDER";
/// Catalog endpoint override
pub const CATALOG_URL_ENV: &str = "KENNEL_CATALOG_URL";
/// Catalog API key (sent as `x-api-key`)
pub const CATALOG_API_KEY_ENV: &str = "KENNEL_CATALOG_API_KEY";

pub const DEFAULT_CATALOG_URL: &str = "https://api.thedogapi.com/v1/breeds";
pub const DEFAULT_PORT: u16 = 5740;
pub const DATABASE_FILE_NAME: &str = "kennel.db";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    /// Root folder holding the database (optional)
    #[serde(default)]
    pub root_folder: Option<PathBuf>,

    /// Explicit database path; defaults to `<root_folder>/kennel.db`
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// HTTP bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Remote breed catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            root_folder: None,
            database_path: None,
            host: default_host(),
            port: default_port(),
            catalog: CatalogConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Remote breed catalog settings
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// "list breeds" endpoint
    #[serde(default = "default_catalog_url")]
    pub url: String,

    /// Optional API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Refetch the catalog once the cached snapshot is older than this.
    /// Unset means the snapshot lives for the whole process.
    #[serde(default)]
    pub max_age_secs: Option<u64>,
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn max_age(&self) -> Option<Duration> {
        self.max_age_secs.map(Duration::from_secs)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            max_age_secs: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Load TOML config from `path`
    ///
    /// Missing file → warning + defaults. Unreadable or malformed file → error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    "Config file not found at {}, using defaults",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(e) => return Err(Error::Io(e)),
        };

        let config = Self::parse(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub root_folder: Option<PathBuf>,
    pub port: Option<u16>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub root_folder: PathBuf,
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Merge CLI → ENV → TOML → defaults
    pub fn resolve(cli: &CliOverrides, toml_config: TomlConfig) -> Self {
        let root_folder = resolve_root_folder(cli.root_folder.as_deref(), &toml_config);

        let database_path = toml_config
            .database_path
            .clone()
            .unwrap_or_else(|| root_folder.join(DATABASE_FILE_NAME));

        let mut catalog = toml_config.catalog;
        if let Ok(url) = std::env::var(CATALOG_URL_ENV) {
            if !url.trim().is_empty() {
                catalog.url = url;
            }
        }
        if let Ok(key) = std::env::var(CATALOG_API_KEY_ENV) {
            if !key.trim().is_empty() {
                catalog.api_key = Some(key);
            }
        }

        Self {
            root_folder,
            database_path,
            host: toml_config.host,
            port: cli.port.unwrap_or(toml_config.port),
            catalog,
            logging: toml_config.logging,
        }
    }

    /// `host:port` for the HTTP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Root folder resolution: CLI → ENV → TOML → OS default
pub fn resolve_root_folder(cli_arg: Option<&Path>, toml_config: &TomlConfig) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(ROOT_FOLDER_ENV) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(root) = &toml_config.root_folder {
        return root.clone();
    }

    // Priority 4: OS-dependent compiled default
    default_root_folder()
}

/// Default config file location (`<config_dir>/kennel/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("kennel").join("config.toml"))
}

/// OS-dependent default root folder path
pub fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("kennel"))
        .unwrap_or_else(|| PathBuf::from("./kennel_data"))
}

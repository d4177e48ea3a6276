//! kennel-api - Dog breed catalog service
//!
//! Serves the merged view of the remote breed catalog and locally created
//! breeds to the catalog browser front end.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use kennel_common::config::{default_config_path, CliOverrides, ServiceConfig, TomlConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use kennel_api::services::{BreedService, CatalogCache, CatalogClient};
use kennel_api::{build_router, AppState};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "kennel-api", version, about = "Dog breed catalog service")]
struct Args {
    /// Root folder holding kennel.db
    #[arg(long)]
    root_folder: Option<PathBuf>,

    /// TOML config file (default: <config_dir>/kennel/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// HTTP port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(default_config_path);
    let toml_config = match &config_path {
        Some(path) => TomlConfig::load(path)?,
        None => TomlConfig::default(),
    };

    let cli = CliOverrides {
        root_folder: args.root_folder,
        port: args.port,
    };
    let config = ServiceConfig::resolve(&cli, toml_config);

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        "Starting kennel-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    if let Some(path) = &config_path {
        info!("Config file: {}", path.display());
    }
    info!("Root folder: {}", config.root_folder.display());
    info!("Database: {}", config.database_path.display());
    info!("Catalog: {}", config.catalog.url);

    let pool = match kennel_common::db::init_database(&config.database_path).await {
        Ok(pool) => {
            info!("✓ Connected to database");
            pool
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return Err(e.into());
        }
    };

    let client = CatalogClient::new(&config.catalog)?;
    let cache = CatalogCache::new(Arc::new(client)).with_max_age(config.catalog.max_age());
    let state = AppState::new(BreedService::new(Arc::new(cache), pool));
    let app = build_router(state);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("kennel-api listening on http://{}", bind_address);
    info!("Health check: http://{}/health", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}

//! kennel-api library interface
//!
//! Merges the remote breed catalog with locally created breeds and exposes
//! lookup, search, creation and temperament sync over HTTP.

pub mod api;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use crate::error::{ApiError, ApiResult, BreedError};

use axum::Router;
use chrono::{DateTime, Utc};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::services::BreedService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Breed operations (catalog cache + local store)
    pub breeds: BreedService,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(breeds: BreedService) -> Self {
        Self {
            breeds,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::breed_routes())
        .merge(api::temperament_routes())
        .merge(api::catalog_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

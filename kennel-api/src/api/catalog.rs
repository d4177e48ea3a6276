//! Catalog cache control

use axum::{extract::State, http::StatusCode, routing::post, Router};

use crate::AppState;

/// POST /catalog/invalidate
pub async fn invalidate_catalog(State(state): State<AppState>) -> StatusCode {
    state.breeds.invalidate_catalog().await;
    StatusCode::NO_CONTENT
}

pub fn catalog_routes() -> Router<AppState> {
    Router::new().route("/catalog/invalidate", post(invalidate_catalog))
}

//! Temperament endpoint

use axum::{extract::State, routing::get, Json, Router};

use crate::error::ApiResult;
use crate::models::Temperament;
use crate::AppState;

/// GET /temperaments
///
/// Syncs temperaments from the catalog into the local store and returns them.
pub async fn list_temperaments(State(state): State<AppState>) -> ApiResult<Json<Vec<Temperament>>> {
    Ok(Json(state.breeds.temperaments().await?))
}

pub fn temperament_routes() -> Router<AppState> {
    Router::new().route("/temperaments", get(list_temperaments))
}

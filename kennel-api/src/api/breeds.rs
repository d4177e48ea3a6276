//! Breed endpoints
//!
//! - `GET /dogs` lists the catalog, or searches both sources with `?name=`
//! - `GET /dogs/:id` resolves one id
//! - `POST /dogs` creates a local breed

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::models::{BreedRecord, LocalBreedView, NewBreed};
use crate::AppState;

/// Query parameters for `GET /dogs`
#[derive(Debug, Deserialize)]
pub struct BreedQuery {
    /// Name fragment to search for
    pub name: Option<String>,
}

/// GET /dogs[?name=fragment]
pub async fn list_breeds(
    State(state): State<AppState>,
    Query(query): Query<BreedQuery>,
) -> ApiResult<Json<Vec<BreedRecord>>> {
    let records = match query.name {
        Some(name) => state.breeds.races_by_query(&name).await?,
        None => state
            .breeds
            .all_races()
            .await?
            .iter()
            .cloned()
            .map(BreedRecord::Catalog)
            .collect(),
    };

    Ok(Json(records))
}

/// GET /dogs/:id
pub async fn get_breed(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BreedRecord>> {
    Ok(Json(state.breeds.race_by_id(&id).await?))
}

/// POST /dogs
pub async fn create_breed(
    State(state): State<AppState>,
    Json(new_breed): Json<NewBreed>,
) -> ApiResult<(StatusCode, Json<LocalBreedView>)> {
    if new_breed.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".to_string()));
    }

    let view = state.breeds.post_race(new_breed).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// Build breed routes
pub fn breed_routes() -> Router<AppState> {
    Router::new()
        .route("/dogs", get(list_breeds).post(create_breed))
        .route("/dogs/:id", get(get_breed))
}

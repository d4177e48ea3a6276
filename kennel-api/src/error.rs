//! Error types for kennel-api
//!
//! `BreedError` is the domain taxonomy returned by the core operations.
//! `ApiError` is what HTTP handlers return; it maps onto status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::catalog_client::CatalogError;

/// Message used when an id matches neither source
pub const NOT_FOUND_MESSAGE: &str = "There's no dogs with the required ID!";
/// Message used when a search term matches neither source
pub const NO_MATCHES_MESSAGE: &str = "No matches with that name, try another.";

/// Domain errors raised by the breed operations
#[derive(Debug, Error)]
pub enum BreedError {
    /// The catalog fetch did not complete
    #[error("Breed catalog unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Identifier resolves to neither source
    #[error("{0}")]
    NotFound(String),

    /// Search term matches nothing in either source
    #[error("{0}")]
    NoMatches(String),

    /// Storage errors pass through unchanged
    #[error(transparent)]
    Store(#[from] kennel_common::Error),
}

impl From<CatalogError> for BreedError {
    fn from(err: CatalogError) -> Self {
        BreedError::UpstreamUnavailable(err.to_string())
    }
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Upstream catalog failure (502)
    #[error("Bad gateway: {0}")]
    BadGateway(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// kennel-common error
    #[error("Common error: {0}")]
    Common(#[from] kennel_common::Error),
}

impl From<BreedError> for ApiError {
    fn from(err: BreedError) -> Self {
        match err {
            BreedError::NotFound(msg) | BreedError::NoMatches(msg) => ApiError::NotFound(msg),
            BreedError::UpstreamUnavailable(msg) => ApiError::BadGateway(msg),
            BreedError::Store(err) => ApiError::Common(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, "UPSTREAM_UNAVAILABLE", msg),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                msg,
            ),
            ApiError::Common(ref err) => {
                tracing::error!(error = %err, "Storage error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "COMMON_ERROR",
                    err.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

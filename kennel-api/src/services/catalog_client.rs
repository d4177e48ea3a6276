//! Remote breed catalog client
//!
//! Fetches "list breeds" from the catalog service and flattens each record
//! into a `CanonicalBreed`: imperial height/weight, nested image url.

use async_trait::async_trait;
use kennel_common::config::CatalogConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::CanonicalBreed;

const USER_AGENT: &str = concat!("kennel-api/", env!("CARGO_PKG_VERSION"));
const API_KEY_HEADER: &str = "x-api-key";

/// Catalog client errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Source of catalog snapshots
///
/// The cache only ever talks to this trait, so tests can swap in a fixture.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full catalog, already normalized
    async fn fetch_catalog(&self) -> Result<Vec<CanonicalBreed>, CatalogError>;
}

/// Imperial/metric pair as published upstream
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpstreamMeasure {
    #[serde(default)]
    pub imperial: String,
    #[serde(default)]
    pub metric: String,
}

/// Nested image reference
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamImage {
    pub url: String,
}

/// Breed record as published upstream
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamBreed {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub height: UpstreamMeasure,
    #[serde(default)]
    pub weight: UpstreamMeasure,
    #[serde(default)]
    pub life_span: String,
    #[serde(default)]
    pub temperament: Option<String>,
    #[serde(default)]
    pub image: Option<UpstreamImage>,
}

impl From<UpstreamBreed> for CanonicalBreed {
    fn from(raw: UpstreamBreed) -> Self {
        // Blank temperament text carries no tags; treat it like a missing field
        let temperament = raw.temperament.filter(|t| !t.trim().is_empty());

        Self {
            id: raw.id,
            name: raw.name,
            height: raw.height.imperial,
            weight: raw.weight.imperial,
            life_span: raw.life_span,
            temperament,
            image: raw.image.map(|img| img.url).unwrap_or_default(),
        }
    }
}

/// HTTP catalog client
pub struct CatalogClient {
    http_client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()
            .map_err(|e| CatalogError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            url: config.url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_catalog(&self) -> Result<Vec<CanonicalBreed>, CatalogError> {
        tracing::debug!(url = %self.url, "Querying breed catalog");

        let mut request = self.http_client.get(&self.url);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::NetworkError(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CatalogError::ApiError(status.as_u16(), error_text));
        }

        let records: Vec<UpstreamBreed> = response
            .json()
            .await
            .map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let breeds: Vec<CanonicalBreed> = records.into_iter().map(CanonicalBreed::from).collect();

        tracing::info!(
            url = %self.url,
            breeds = breeds.len(),
            "Retrieved breed catalog"
        );

        Ok(breeds)
    }
}

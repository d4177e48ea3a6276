//! Breed service facade
//!
//! The operations the presentation layer calls. Each one delegates to the
//! component that owns it, sharing one catalog cache and one store.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::error::BreedError;
use crate::models::{BreedId, BreedRecord, CanonicalBreed, LocalBreedView, NewBreed, Temperament};
use crate::services::catalog_cache::CatalogCache;
use crate::services::{breed_resolver, breed_search, breed_writer, temperament_sync};

#[derive(Clone)]
pub struct BreedService {
    cache: Arc<CatalogCache>,
    db: SqlitePool,
}

impl BreedService {
    pub fn new(cache: Arc<CatalogCache>, db: SqlitePool) -> Self {
        Self { cache, db }
    }

    pub fn cache(&self) -> &CatalogCache {
        &self.cache
    }

    pub fn db(&self) -> &SqlitePool {
        &self.db
    }

    /// Every catalog breed
    pub async fn all_races(&self) -> Result<Arc<Vec<CanonicalBreed>>, BreedError> {
        self.cache.get_catalog().await
    }

    /// Lookup by raw id; the id is classified once here
    pub async fn race_by_id(&self, raw_id: &str) -> Result<BreedRecord, BreedError> {
        let id = BreedId::parse(raw_id);
        breed_resolver::resolve(&self.cache, &self.db, &id).await
    }

    pub async fn races_by_query(&self, name: &str) -> Result<Vec<BreedRecord>, BreedError> {
        breed_search::search(&self.cache, &self.db, name).await
    }

    pub async fn post_race(&self, new_breed: NewBreed) -> Result<LocalBreedView, BreedError> {
        Ok(breed_writer::create_breed(&self.db, new_breed).await?)
    }

    pub async fn temperaments(&self) -> Result<Vec<Temperament>, BreedError> {
        temperament_sync::sync_temperaments(&self.cache, &self.db).await
    }

    /// Drop the catalog snapshot so the next read refetches it
    pub async fn invalidate_catalog(&self) {
        self.cache.invalidate().await;
    }
}

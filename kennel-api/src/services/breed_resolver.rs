//! Identifier routing
//!
//! Integer ids go to the catalog, everything else to the local store. There
//! is no fallback between the two: the id spaces are disjoint.

use sqlx::SqlitePool;

use crate::db;
use crate::error::{BreedError, NOT_FOUND_MESSAGE};
use crate::models::{BreedId, BreedRecord};
use crate::services::catalog_cache::CatalogCache;

/// Resolve an id to exactly one breed from exactly one source
pub async fn resolve(
    cache: &CatalogCache,
    pool: &SqlitePool,
    id: &BreedId,
) -> Result<BreedRecord, BreedError> {
    // Routing must not touch the catalog for local ids; the cache is only
    // consulted on the catalog branch.
    match id {
        BreedId::Catalog(catalog_id) => {
            let catalog = cache.get_catalog().await?;
            catalog
                .iter()
                .find(|breed| breed.id == *catalog_id)
                .cloned()
                .map(BreedRecord::Catalog)
                .ok_or_else(|| not_found(id))
        }
        BreedId::Local(local_id) => db::breeds::load_breed(pool, local_id)
            .await?
            .map(BreedRecord::Local)
            .ok_or_else(|| not_found(id)),
    }
}

fn not_found(id: &BreedId) -> BreedError {
    tracing::debug!(id = %id, "Breed id matched no record");
    BreedError::NotFound(NOT_FOUND_MESSAGE.to_string())
}

//! Temperament extraction and normalization
//!
//! Splits the catalog's free-text temperament lists into distinct names and
//! makes sure each one exists in the local store.

use std::collections::BTreeSet;

use sqlx::SqlitePool;

use crate::db;
use crate::error::BreedError;
use crate::models::{CanonicalBreed, Temperament};
use crate::services::catalog_cache::CatalogCache;
use crate::utils::{retry_on_lock, DEFAULT_MAX_LOCK_WAIT_MS};

/// Distinct temperament names across the catalog (case-sensitive)
///
/// Records without a temperament are skipped; pieces are trimmed and empty
/// pieces dropped.
pub fn extract_temperament_names(catalog: &[CanonicalBreed]) -> BTreeSet<String> {
    catalog
        .iter()
        .filter_map(|breed| breed.temperament.as_deref())
        .flat_map(|text| text.split(','))
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Find-or-create every temperament named in the catalog
///
/// Idempotent: a second run against the same snapshot creates nothing.
pub async fn sync_temperaments(
    cache: &CatalogCache,
    pool: &SqlitePool,
) -> Result<Vec<Temperament>, BreedError> {
    let catalog = cache.get_catalog().await?;
    let names = extract_temperament_names(&catalog);

    let mut temperaments = Vec::with_capacity(names.len());
    for name in &names {
        let temperament = retry_on_lock("temperament find-or-create", DEFAULT_MAX_LOCK_WAIT_MS, || {
            db::temperaments::find_or_create_temperament(pool, name)
        })
        .await?;
        temperaments.push(temperament);
    }

    tracing::info!(
        distinct = temperaments.len(),
        breeds = catalog.len(),
        "Temperaments synchronized"
    );

    Ok(temperaments)
}

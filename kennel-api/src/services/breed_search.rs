//! Cross-source name search
//!
//! Catalog matches come first, then local matches, each in its own native
//! order. A name present in both sources appears twice.

use sqlx::SqlitePool;

use crate::db;
use crate::error::{BreedError, NO_MATCHES_MESSAGE};
use crate::models::BreedRecord;
use crate::services::catalog_cache::CatalogCache;

/// Case-insensitive substring search over both sources
pub async fn search(
    cache: &CatalogCache,
    pool: &SqlitePool,
    term: &str,
) -> Result<Vec<BreedRecord>, BreedError> {
    let term_lower = term.to_lowercase();

    let catalog = cache.get_catalog().await?;
    let catalog_matches = catalog
        .iter()
        .filter(|breed| breed.name.to_lowercase().contains(&term_lower))
        .cloned()
        .map(BreedRecord::Catalog);

    let local_matches = db::breeds::search_breeds_by_name(pool, &term_lower).await?;

    let results: Vec<BreedRecord> = catalog_matches
        .chain(local_matches.into_iter().map(BreedRecord::Local))
        .collect();

    tracing::debug!(term = %term, matches = results.len(), "Breed search");

    if results.is_empty() {
        return Err(BreedError::NoMatches(NO_MATCHES_MESSAGE.to_string()));
    }

    Ok(results)
}

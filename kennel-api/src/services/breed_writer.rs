//! Local breed creation
//!
//! One breed row plus zero or more link rows, written in a single
//! transaction. Storage errors are returned as-is.

use std::collections::BTreeSet;

use kennel_common::Result;
use sqlx::SqlitePool;

use crate::db;
use crate::db::breeds::BreedRow;
use crate::models::{BreedId, LocalBreedView, NewBreed};
use crate::utils::begin_monitored;

/// Create a local breed and link the requested temperaments
///
/// Unknown or repeated temperament ids are dropped. The returned view has
/// no temperament when none were supplied or none matched.
pub async fn create_breed(pool: &SqlitePool, new_breed: NewBreed) -> Result<LocalBreedView> {
    let row = BreedRow {
        id: BreedId::new_local().to_string(),
        name: new_breed.name,
        weight: new_breed.weight,
        height: new_breed.height,
        life_span: new_breed.life_span,
        image: new_breed.image,
    };

    let mut tx = begin_monitored(pool, "breed_writer::create_breed").await?;

    db::breeds::insert_breed(tx.conn()?, &row).await?;

    // Repeats are dropped before anything is bound
    let requested: Vec<String> = new_breed
        .temperament_ids
        .unwrap_or_default()
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let temperaments = if requested.is_empty() {
        Vec::new()
    } else {
        db::temperaments::load_temperaments_by_ids(tx.conn()?, &requested).await?
    };

    if !temperaments.is_empty() {
        let ids: Vec<String> = temperaments.iter().map(|t| t.id.clone()).collect();
        db::breeds::link_breed_temperaments(tx.conn()?, &row.id, &ids).await?;
    }

    tx.commit().await?;

    let names: Vec<String> = temperaments.into_iter().map(|t| t.name).collect();

    tracing::info!(
        id = %row.id,
        name = %row.name,
        temperaments = names.len(),
        "Created local breed"
    );

    Ok(row.into_view(&names))
}

//! Local breed persistence

use kennel_common::Result;
use sqlx::{QueryBuilder, Row, Sqlite, SqliteConnection, SqlitePool};
use std::collections::HashMap;

use super::MAX_BIND_CHUNK;
use crate::models::LocalBreedView;

/// Separator used for the temperament display string
pub const TEMPERAMENT_SEPARATOR: &str = ", ";

/// Breed row as stored (no temperaments)
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct BreedRow {
    pub id: String,
    pub name: String,
    pub weight: String,
    pub height: String,
    pub life_span: String,
    pub image: String,
}

impl BreedRow {
    /// Attach the joined temperament names
    pub fn into_view(self, temperament_names: &[String]) -> LocalBreedView {
        let temperament = if temperament_names.is_empty() {
            None
        } else {
            Some(temperament_names.join(TEMPERAMENT_SEPARATOR))
        };

        LocalBreedView {
            id: self.id,
            name: self.name,
            weight: self.weight,
            height: self.height,
            life_span: self.life_span,
            image: self.image,
            temperament,
        }
    }
}

/// Insert a breed row
pub async fn insert_breed(conn: &mut SqliteConnection, breed: &BreedRow) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO breeds (id, name, weight, height, life_span, image, created_at)
        VALUES (?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(&breed.id)
    .bind(&breed.name)
    .bind(&breed.weight)
    .bind(&breed.height)
    .bind(&breed.life_span)
    .bind(&breed.image)
    .execute(conn)
    .await?;

    Ok(())
}

/// Link a breed to temperaments; already-linked pairs are ignored
pub async fn link_breed_temperaments(
    conn: &mut SqliteConnection,
    breed_id: &str,
    temperament_ids: &[String],
) -> Result<()> {
    for temperament_id in temperament_ids {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO breed_temperaments (breed_id, temperament_id, created_at)
            VALUES (?, ?, CURRENT_TIMESTAMP)
            "#,
        )
        .bind(breed_id)
        .bind(temperament_id)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

/// Load breed by primary key, with its temperaments
pub async fn load_breed(pool: &SqlitePool, id: &str) -> Result<Option<LocalBreedView>> {
    let row = sqlx::query_as::<_, BreedRow>(
        r#"
        SELECT id, name, weight, height, life_span, image
        FROM breeds
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => {
            let names = temperament_names_for_breed(pool, &row.id).await?;
            Ok(Some(row.into_view(&names)))
        }
        None => Ok(None),
    }
}

/// Breeds whose name contains `term_lower`, case-insensitively, in insertion order
///
/// `term_lower` must already be lower-cased. Matching is done here rather
/// than in SQL: SQLite's `lower()` only folds ASCII.
pub async fn search_breeds_by_name(
    pool: &SqlitePool,
    term_lower: &str,
) -> Result<Vec<LocalBreedView>> {
    let rows: Vec<BreedRow> = sqlx::query_as::<_, BreedRow>(
        r#"
        SELECT id, name, weight, height, life_span, image
        FROM breeds
        ORDER BY rowid
        "#,
    )
    .fetch_all(pool)
    .await?
    .into_iter()
    .filter(|row| row.name.to_lowercase().contains(term_lower))
    .collect();

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let mut names_by_breed: HashMap<String, Vec<String>> = HashMap::new();
    for chunk in rows.chunks(MAX_BIND_CHUNK) {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT bt.breed_id, t.name \
             FROM breed_temperaments bt \
             JOIN temperaments t ON t.id = bt.temperament_id \
             WHERE bt.breed_id IN (",
        );
        let mut separated = builder.separated(", ");
        for row in chunk {
            separated.push_bind(row.id.as_str());
        }
        separated.push_unseparated(") ORDER BY t.name");

        for link in builder.build().fetch_all(pool).await? {
            names_by_breed
                .entry(link.get("breed_id"))
                .or_default()
                .push(link.get("name"));
        }
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let names = names_by_breed.remove(&row.id).unwrap_or_default();
            row.into_view(&names)
        })
        .collect())
}

/// Temperament names linked to a breed, ordered by name
pub async fn temperament_names_for_breed(pool: &SqlitePool, breed_id: &str) -> Result<Vec<String>> {
    let names = sqlx::query_scalar::<_, String>(
        r#"
        SELECT t.name
        FROM breed_temperaments bt
        JOIN temperaments t ON t.id = bt.temperament_id
        WHERE bt.breed_id = ?
        ORDER BY t.name
        "#,
    )
    .bind(breed_id)
    .fetch_all(pool)
    .await?;

    Ok(names)
}

/// Number of temperament links for a breed
pub async fn count_breed_temperaments(pool: &SqlitePool, breed_id: &str) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM breed_temperaments WHERE breed_id = ?",
    )
    .bind(breed_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

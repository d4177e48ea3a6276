//! Temperament persistence

use kennel_common::Result;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use std::collections::BTreeSet;
use uuid::Uuid;

use super::MAX_BIND_CHUNK;
use crate::models::Temperament;

/// Find temperament by exact (case-sensitive) name, creating it if absent
///
/// Relies on the UNIQUE constraint on `name`: a concurrent insert of the
/// same name turns into a no-op and both callers read back the same row.
pub async fn find_or_create_temperament(pool: &SqlitePool, name: &str) -> Result<Temperament> {
    let inserted = sqlx::query(
        r#"
        INSERT INTO temperaments (id, name, created_at)
        VALUES (?, ?, CURRENT_TIMESTAMP)
        ON CONFLICT(name) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4().to_string())
    .bind(name)
    .execute(pool)
    .await?;

    if inserted.rows_affected() > 0 {
        tracing::debug!(name = %name, "Created temperament");
    }

    let temperament = sqlx::query_as::<_, Temperament>(
        "SELECT id, name FROM temperaments WHERE name = ?",
    )
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(temperament)
}

/// Temperaments whose id is in `ids`, ordered by name
///
/// Unknown ids are skipped and duplicates collapse to one row. Large id
/// lists are queried in chunks of `MAX_BIND_CHUNK`.
pub async fn load_temperaments_by_ids(
    conn: &mut SqliteConnection,
    ids: &[String],
) -> Result<Vec<Temperament>> {
    let unique: BTreeSet<&str> = ids.iter().map(String::as_str).collect();
    let unique: Vec<&str> = unique.into_iter().collect();

    let mut temperaments = Vec::new();
    for chunk in unique.chunks(MAX_BIND_CHUNK) {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, name FROM temperaments WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in chunk {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        let found = builder
            .build_query_as::<Temperament>()
            .fetch_all(&mut *conn)
            .await?;
        temperaments.extend(found);
    }

    temperaments.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(temperaments)
}

/// All stored temperaments, ordered by name
pub async fn list_temperaments(pool: &SqlitePool) -> Result<Vec<Temperament>> {
    let temperaments = sqlx::query_as::<_, Temperament>(
        "SELECT id, name FROM temperaments ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    Ok(temperaments)
}

pub async fn count_temperaments(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM temperaments")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kennel_common::db::init::init_memory_database;

    #[tokio::test]
    async fn test_find_or_create_is_idempotent() {
        let pool = init_memory_database().await.unwrap();

        let first = find_or_create_temperament(&pool, "Loyal").await.unwrap();
        let second = find_or_create_temperament(&pool, "Loyal").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(count_temperaments(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_names_are_case_sensitive() {
        let pool = init_memory_database().await.unwrap();

        let upper = find_or_create_temperament(&pool, "Loyal").await.unwrap();
        let lower = find_or_create_temperament(&pool, "loyal").await.unwrap();

        assert_ne!(upper.id, lower.id);
        assert_eq!(count_temperaments(&pool).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_load_by_ids_skips_unknown_and_duplicates() {
        let pool = init_memory_database().await.unwrap();
        let loyal = find_or_create_temperament(&pool, "Loyal").await.unwrap();
        let alert = find_or_create_temperament(&pool, "Alert").await.unwrap();

        let mut conn = pool.acquire().await.unwrap();
        let found = load_temperaments_by_ids(
            &mut conn,
            &[
                loyal.id.clone(),
                "no-such-id".to_string(),
                alert.id.clone(),
                loyal.id.clone(),
            ],
        )
        .await
        .unwrap();

        let names: Vec<&str> = found.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Alert", "Loyal"]);

        let none = load_temperaments_by_ids(&mut conn, &[]).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_load_by_ids_spans_chunks() {
        let pool = init_memory_database().await.unwrap();
        let loyal = find_or_create_temperament(&pool, "Loyal").await.unwrap();
        let alert = find_or_create_temperament(&pool, "Alert").await.unwrap();

        let mut ids: Vec<String> = (0..MAX_BIND_CHUNK * 3)
            .map(|n| format!("unknown-{}", n))
            .collect();
        ids.insert(0, loyal.id.clone());
        ids.push(alert.id.clone());
        ids.push(loyal.id.clone());

        let mut conn = pool.acquire().await.unwrap();
        let found = load_temperaments_by_ids(&mut conn, &ids).await.unwrap();

        let names: Vec<&str> = found.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Alert", "Loyal"]);
    }

    #[tokio::test]
    async fn test_list_temperaments_ordered_by_name() {
        let pool = init_memory_database().await.unwrap();
        for name in ["Playful", "Alert", "Loyal"] {
            find_or_create_temperament(&pool, name).await.unwrap();
        }

        let names: Vec<String> = list_temperaments(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Alert", "Loyal", "Playful"]);
    }
}

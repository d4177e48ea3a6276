//! Temperament tag

use serde::{Deserialize, Serialize};

/// Normalized temperament label stored locally
///
/// `name` is unique (case-sensitive) in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Temperament {
    pub id: String,
    pub name: String,
}

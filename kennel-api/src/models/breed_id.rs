//! Typed breed identifier
//!
//! Catalog ids are always integers; local ids are UUID strings and never
//! parse as integers. Parsing once here is the only place the two id spaces
//! are told apart.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "source", content = "id", rename_all = "lowercase")]
pub enum BreedId {
    /// Id assigned by the remote catalog
    Catalog(i64),
    /// Opaque id assigned by the local store
    Local(String),
}

impl BreedId {
    /// Classify a raw identifier: integer → catalog, anything else → local
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(id) => BreedId::Catalog(id),
            Err(_) => BreedId::Local(raw.to_string()),
        }
    }

    /// Fresh local id (UUID v4, hyphenated, so never integer-shaped)
    pub fn new_local() -> Self {
        BreedId::Local(Uuid::new_v4().to_string())
    }
}

impl FromStr for BreedId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BreedId::parse(s))
    }
}

impl fmt::Display for BreedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreedId::Catalog(id) => write!(f, "{}", id),
            BreedId::Local(id) => f.write_str(id),
        }
    }
}

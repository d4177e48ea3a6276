//! Breed shapes

use serde::{Deserialize, Serialize};

use super::BreedId;

/// Breed as published by the remote catalog, flattened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalBreed {
    pub id: i64,
    pub name: String,
    /// Imperial height range, e.g. "23 - 29"
    pub height: String,
    /// Imperial weight range, e.g. "50 - 60"
    pub weight: String,
    pub life_span: String,
    /// Comma-separated temperament list; absent when upstream has none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperament: Option<String>,
    pub image: String,
}

/// Local breed as returned by every read and write path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalBreedView {
    pub id: String,
    pub name: String,
    pub weight: String,
    pub height: String,
    pub life_span: String,
    pub image: String,
    /// Linked temperament names joined with ", "; absent when none are linked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperament: Option<String>,
}

/// Input for creating a local breed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBreed {
    pub name: String,
    pub weight: String,
    pub height: String,
    pub life_span: String,
    pub image: String,
    /// Temperament ids to link
    #[serde(default, rename = "temperaments")]
    pub temperament_ids: Option<Vec<String>>,
}

/// Which source a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreedSource {
    Catalog,
    Local,
}

/// Merged lookup/search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum BreedRecord {
    Catalog(CanonicalBreed),
    Local(LocalBreedView),
}

impl BreedRecord {
    pub fn source(&self) -> BreedSource {
        match self {
            BreedRecord::Catalog(_) => BreedSource::Catalog,
            BreedRecord::Local(_) => BreedSource::Local,
        }
    }

    pub fn id(&self) -> BreedId {
        match self {
            BreedRecord::Catalog(breed) => BreedId::Catalog(breed.id),
            BreedRecord::Local(breed) => BreedId::Local(breed.id.clone()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            BreedRecord::Catalog(breed) => &breed.name,
            BreedRecord::Local(breed) => &breed.name,
        }
    }

    pub fn temperament(&self) -> Option<&str> {
        match self {
            BreedRecord::Catalog(breed) => breed.temperament.as_deref(),
            BreedRecord::Local(breed) => breed.temperament.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_serializes_with_source_tag() {
        let record = BreedRecord::Catalog(CanonicalBreed {
            id: 1,
            name: "Affenpinscher".to_string(),
            height: "9 - 11.5".to_string(),
            weight: "6 - 13".to_string(),
            life_span: "10 - 12 years".to_string(),
            temperament: None,
            image: "https://cdn2.thedogapi.com/images/BJa4kxc4X.jpg".to_string(),
        });

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["source"], "catalog");
        assert_eq!(value["id"], 1);
        assert!(value.get("temperament").is_none());
    }

    #[test]
    fn test_new_breed_reads_temperaments_field() {
        let new_breed: NewBreed = serde_json::from_value(json!({
            "name": "Fido",
            "weight": "10-20",
            "height": "30-40",
            "life_span": "10-12",
            "image": "x",
            "temperaments": ["a", "b"]
        }))
        .unwrap();
        assert_eq!(
            new_breed.temperament_ids,
            Some(vec!["a".to_string(), "b".to_string()])
        );

        let without: NewBreed = serde_json::from_value(json!({
            "name": "Rex",
            "weight": "1",
            "height": "2",
            "life_span": "3",
            "image": "y"
        }))
        .unwrap();
        assert!(without.temperament_ids.is_none());
    }
}

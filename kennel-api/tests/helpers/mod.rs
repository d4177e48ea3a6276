//! Shared fixtures for kennel-api integration tests
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use kennel_api::models::{CanonicalBreed, NewBreed};
use kennel_api::services::{BreedService, CatalogCache, CatalogError, CatalogSource};
use kennel_common::db::init::init_memory_database;

/// In-memory catalog that counts fetches
pub struct FixtureCatalog {
    breeds: Vec<CanonicalBreed>,
    calls: AtomicUsize,
    fail: AtomicBool,
}

impl FixtureCatalog {
    pub fn new(breeds: Vec<CanonicalBreed>) -> Arc<Self> {
        Arc::new(Self {
            breeds,
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        })
    }

    /// Catalog whose every fetch fails
    pub fn unreachable() -> Arc<Self> {
        let catalog = Self::new(Vec::new());
        catalog.fail.store(true, Ordering::SeqCst);
        catalog
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for FixtureCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<CanonicalBreed>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(CatalogError::NetworkError("connection refused".to_string()));
        }
        Ok(self.breeds.clone())
    }
}

pub fn catalog_breed(id: i64, name: &str, temperament: Option<&str>) -> CanonicalBreed {
    CanonicalBreed {
        id,
        name: name.to_string(),
        height: "20 - 24".to_string(),
        weight: "50 - 80".to_string(),
        life_span: "10 - 12 years".to_string(),
        temperament: temperament.map(str::to_string),
        image: format!("https://cdn.example.com/{}.jpg", id),
    }
}

pub fn sample_catalog() -> Vec<CanonicalBreed> {
    vec![
        catalog_breed(1, "Affenpinscher", Some("Stubborn, Curious, Playful")),
        catalog_breed(2, "Afghan Hound", None),
        catalog_breed(149, "Labrador Retriever", Some("Kind, Outgoing, Agile")),
        catalog_breed(264, "Labradoodle", Some("Friendly, Loyal")),
        catalog_breed(50, "Border Collie", Some("Tenacious, Keen")),
    ]
}

/// Service over a fresh in-memory store and the given catalog
pub async fn service_with(breeds: Vec<CanonicalBreed>) -> (BreedService, Arc<FixtureCatalog>) {
    let catalog = FixtureCatalog::new(breeds);
    let service = service_over(catalog.clone()).await;
    (service, catalog)
}

pub async fn service_over(catalog: Arc<FixtureCatalog>) -> BreedService {
    let pool = init_memory_database()
        .await
        .expect("in-memory database");
    let cache = CatalogCache::new(catalog);
    BreedService::new(Arc::new(cache), pool)
}

pub fn new_breed(name: &str, temperament_ids: Option<Vec<String>>) -> NewBreed {
    NewBreed {
        name: name.to_string(),
        weight: "10-20".to_string(),
        height: "30-40".to_string(),
        life_span: "10-12".to_string(),
        image: "x".to_string(),
        temperament_ids,
    }
}

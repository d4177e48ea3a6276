//! Breed catalog services
//!
//! Leaf-first: catalog client → catalog cache → lookup/search/write/sync →
//! `BreedService` facade used by the HTTP layer.

pub mod breed_resolver;
pub mod breed_search;
pub mod breed_service;
pub mod breed_writer;
pub mod catalog_cache;
pub mod catalog_client;
pub mod temperament_sync;

pub use breed_service::BreedService;
pub use catalog_cache::{CatalogCache, Clock, SystemClock};
pub use catalog_client::{CatalogClient, CatalogError, CatalogSource};

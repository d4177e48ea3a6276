//! HTTP API handlers for kennel-api
//!
//! JSON surface over `BreedService` for the catalog browser front end.

pub mod breeds;
pub mod catalog;
pub mod health;
pub mod temperaments;

pub use breeds::breed_routes;
pub use catalog::catalog_routes;
pub use health::health_routes;
pub use temperaments::temperament_routes;

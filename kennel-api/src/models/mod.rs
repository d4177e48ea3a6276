//! Data models for kennel-api
//!
//! Two breed shapes coexist: catalog breeds (remote, read-only, numeric id)
//! and local breeds (user-created, opaque id). `BreedRecord` carries either
//! one with an explicit source tag.

pub mod breed;
pub mod breed_id;
pub mod temperament;

pub use breed::{BreedRecord, BreedSource, CanonicalBreed, LocalBreedView, NewBreed};
pub use breed_id::BreedId;
pub use temperament::Temperament;

//! # Kennel Common Library
//!
//! Shared code for the Kennel breed catalog service:
//! - Error type used by the storage and configuration layers
//! - Bootstrap configuration loading (CLI → ENV → TOML → defaults)
//! - Database initialization for the local breed store

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};

//! Local breed store access
//!
//! Thin query functions over the shared SQLite pool. Writes that must be
//! atomic take a `&mut SqliteConnection` so callers can run them inside a
//! transaction.

pub mod breeds;
pub mod temperaments;

/// Upper bound on bound parameters per `IN (...)` statement
///
/// SQLite builds before 3.32 cap host parameters at 999.
pub const MAX_BIND_CHUNK: usize = 500;

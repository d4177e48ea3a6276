//! Catalog snapshot cache
//!
//! Holds the last successful catalog fetch for the life of the process.
//! The async mutex is held across the remote call, so concurrent first
//! readers wait for one fetch instead of each starting their own.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::error::BreedError;
use crate::models::CanonicalBreed;
use crate::services::catalog_client::CatalogSource;

/// Time source for snapshot ageing
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct Snapshot {
    breeds: Arc<Vec<CanonicalBreed>>,
    fetched_at: Instant,
}

/// Populate-once catalog cache with explicit invalidation
pub struct CatalogCache {
    source: Arc<dyn CatalogSource>,
    clock: Arc<dyn Clock>,
    max_age: Option<Duration>,
    // None = never populated (distinct from an empty catalog)
    snapshot: Mutex<Option<Snapshot>>,
}

impl CatalogCache {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            clock: Arc::new(SystemClock),
            max_age: None,
            snapshot: Mutex::new(None),
        }
    }

    /// Refetch once a snapshot is older than `max_age`
    pub fn with_max_age(mut self, max_age: Option<Duration>) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Cached catalog, fetching it first if the cache is empty or stale
    ///
    /// A failed fetch leaves the cache empty and surfaces `UpstreamUnavailable`.
    pub async fn get_catalog(&self) -> Result<Arc<Vec<CanonicalBreed>>, BreedError> {
        let mut snapshot = self.snapshot.lock().await;

        if let Some(current) = snapshot.as_ref() {
            if !self.is_stale(current) {
                return Ok(Arc::clone(&current.breeds));
            }
            tracing::info!("Catalog snapshot expired, refetching");
        }

        let breeds = match self.source.fetch_catalog().await {
            Ok(breeds) => Arc::new(breeds),
            Err(e) => {
                tracing::warn!(error = %e, "Breed catalog fetch failed");
                *snapshot = None;
                return Err(e.into());
            }
        };

        tracing::info!(breeds = breeds.len(), "Catalog cache populated");

        *snapshot = Some(Snapshot {
            breeds: Arc::clone(&breeds),
            fetched_at: self.clock.now(),
        });

        Ok(breeds)
    }

    /// Drop the snapshot; the next `get_catalog` fetches again
    pub async fn invalidate(&self) {
        let mut snapshot = self.snapshot.lock().await;
        if snapshot.take().is_some() {
            tracing::info!("Catalog cache invalidated");
        }
    }

    pub async fn is_populated(&self) -> bool {
        self.snapshot.lock().await.is_some()
    }

    fn is_stale(&self, snapshot: &Snapshot) -> bool {
        match self.max_age {
            Some(max_age) => self.clock.now().saturating_duration_since(snapshot.fetched_at) >= max_age,
            None => false,
        }
    }
}

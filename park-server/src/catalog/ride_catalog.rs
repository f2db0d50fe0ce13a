//! Shared ride catalog with copy-on-write publishing.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{error, info, warn};

use crate::domain::Ride;

use super::defaults::default_rides;
use super::error::CatalogError;
use super::snapshot::CatalogSnapshot;
use super::store::CatalogStore;

/// Health report for the catalog's backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogHealth {
    /// Whether a snapshot is loaded and the backing store can be read.
    pub reachable: bool,
    /// Rides in the current snapshot (0 when unavailable).
    pub rides: usize,
    /// Revision of the current snapshot.
    pub revision: u64,
}

/// Thread-safe ride catalog.
///
/// Readers take an `Arc` to the current immutable snapshot and hold no lock
/// while planning. Writers are serialized, build a new snapshot, persist it,
/// and only then publish it.
pub struct RideCatalog {
    /// `None` until a snapshot has been loaded successfully.
    current: RwLock<Option<Arc<CatalogSnapshot>>>,
    writer: Mutex<()>,
    store: Option<CatalogStore>,
}

impl RideCatalog {
    /// An in-memory catalog with no backing store.
    pub fn in_memory(rides: impl IntoIterator<Item = Ride>) -> Result<Self, CatalogError> {
        let snapshot = CatalogSnapshot::from_rides(rides, 0)?;
        Ok(Self {
            current: RwLock::new(Some(Arc::new(snapshot))),
            writer: Mutex::new(()),
            store: None,
        })
    }

    /// Open the catalog stored at `store`.
    ///
    /// A missing file is seeded with the default park rides. If the file
    /// exists but cannot be read, the catalog starts out unavailable; a later
    /// [`RideCatalog::refresh`] can recover it.
    pub fn open(store: CatalogStore) -> Self {
        let current = match Self::load_from(&store) {
            Ok(snapshot) => Some(Arc::new(snapshot)),
            Err(e) => {
                error!(path = %store.path().display(), error = %e, "failed to load ride catalog");
                None
            }
        };

        Self {
            current: RwLock::new(current),
            writer: Mutex::new(()),
            store: Some(store),
        }
    }

    fn load_from(store: &CatalogStore) -> Result<CatalogSnapshot, CatalogError> {
        match store.load()? {
            Some(rides) => {
                let snapshot = CatalogSnapshot::from_rides(rides, 0)?;
                info!(rides = snapshot.len(), "loaded ride catalog");
                Ok(snapshot)
            }
            None => {
                let snapshot = CatalogSnapshot::from_rides(default_rides(), 0)?;
                store.save(snapshot.rides().map(Arc::as_ref))?;
                info!(
                    rides = snapshot.len(),
                    path = %store.path().display(),
                    "seeded ride catalog with default rides"
                );
                Ok(snapshot)
            }
        }
    }

    /// The current snapshot.
    pub async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        let guard = self.current.read().await;
        guard.clone().ok_or(CatalogError::Unavailable)
    }

    /// Admit a new ride.
    ///
    /// The ride is persisted before the new snapshot is published, so a
    /// storage failure leaves the catalog unchanged.
    pub async fn add_ride(&self, ride: Ride) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        let _writer = self.writer.lock().await;

        let current = self.snapshot().await?;
        if !ride.prefix_matches_type() {
            warn!(
                id = %ride.id,
                ride_type = %ride.ride_type,
                "ride id prefix does not match its type"
            );
        }

        let next = Arc::new(current.with_ride(ride)?);
        if let Some(store) = &self.store {
            store.save(next.rides().map(Arc::as_ref))?;
        }

        *self.current.write().await = Some(next.clone());
        info!(rides = next.len(), revision = next.revision(), "published ride catalog");
        Ok(next)
    }

    /// Reload the catalog from its backing store.
    ///
    /// On success the reloaded rides are published under a new revision. On
    /// failure the current snapshot is kept and the error returned. Without
    /// a backing store this is a no-op.
    pub async fn refresh(&self) -> Result<usize, CatalogError> {
        let Some(store) = &self.store else {
            return Ok(self.snapshot().await?.len());
        };

        let _writer = self.writer.lock().await;
        let rides = store.load()?.ok_or_else(|| CatalogError::Storage {
            message: format!("{} no longer exists", store.path().display()),
        })?;

        let revision = {
            let guard = self.current.read().await;
            guard.as_ref().map_or(0, |s| s.revision() + 1)
        };
        let next = Arc::new(CatalogSnapshot::from_rides(rides, revision)?);
        let count = next.len();

        *self.current.write().await = Some(next);
        Ok(count)
    }

    /// Report whether the catalog can serve plans.
    pub async fn health(&self) -> CatalogHealth {
        let snapshot = self.current.read().await.clone();
        let store_ok = self.store.as_ref().is_none_or(CatalogStore::probe);

        match snapshot {
            Some(s) => CatalogHealth {
                reachable: store_ok,
                rides: s.len(),
                revision: s.revision(),
            },
            None => CatalogHealth {
                reachable: false,
                rides: 0,
                revision: 0,
            },
        }
    }
}

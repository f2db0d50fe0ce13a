//! Immutable catalog snapshots.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::{Ride, RideId};

use super::error::CatalogError;

/// An immutable view of the ride catalog.
///
/// Rides are keyed by id and iterate in ascending id order. Mutations
/// never touch an existing snapshot: [`CatalogSnapshot::with_ride`] builds a
/// new one with a higher revision, sharing the unchanged rides.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    rides: BTreeMap<RideId, Arc<Ride>>,
    revision: u64,
}

impl CatalogSnapshot {
    /// Build a snapshot from validated rides.
    ///
    /// Fails on the first invalid ride or repeated id.
    pub fn from_rides(
        rides: impl IntoIterator<Item = Ride>,
        revision: u64,
    ) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for ride in rides {
            ride.validate()?;
            if map.contains_key(&ride.id) {
                return Err(CatalogError::DuplicateId(ride.id));
            }
            map.insert(ride.id.clone(), Arc::new(ride));
        }
        Ok(Self {
            rides: map,
            revision,
        })
    }

    /// A new snapshot containing every ride of this one plus `ride`.
    pub fn with_ride(&self, ride: Ride) -> Result<Self, CatalogError> {
        ride.validate()?;
        if self.rides.contains_key(&ride.id) {
            return Err(CatalogError::DuplicateId(ride.id));
        }

        let mut rides = self.rides.clone();
        rides.insert(ride.id.clone(), Arc::new(ride));
        Ok(Self {
            rides,
            revision: self.revision + 1,
        })
    }

    /// Look up a ride by id.
    pub fn get(&self, id: &RideId) -> Option<&Arc<Ride>> {
        self.rides.get(id)
    }

    /// Iterate rides in ascending id order.
    pub fn rides(&self) -> impl Iterator<Item = &Arc<Ride>> {
        self.rides.values()
    }

    pub fn len(&self) -> usize {
        self.rides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }

    /// Revision number, incremented on every published change.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

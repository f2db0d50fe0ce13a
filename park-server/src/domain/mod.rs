//! Domain types for the park planner.
//!
//! Rides and visitor profiles are validated at the edges (catalog admission,
//! request parsing), so the planner can trust the values it receives.

mod error;
mod profile;
mod ride;
mod ride_id;

pub use error::ValidationError;
pub use profile::{AGE_RANGE, RidePreference, VisitorProfile, WEIGHT_RANGE};
pub use ride::{Ride, RideType};
pub use ride_id::RideId;

#[cfg(test)]
pub(crate) use ride::fixtures;

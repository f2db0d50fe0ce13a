//! Ride eligibility screening.
//!
//! Decides which catalog rides a visitor may be offered at all. Membership
//! only: ordering preferences such as `dry_first` are handled by the
//! sequencer.

use std::sync::Arc;

use crate::catalog::CatalogSnapshot;
use crate::domain::{Ride, RidePreference, VisitorProfile};

use super::config::PlannerConfig;

/// Why a ride was screened out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// Closed because of bad weather
    Weather,
    /// Restricted ride and the visitor is outside its age/weight bounds
    Bounds,
    /// Wrong wet/dry category for the visitor's preference
    Preference,
    /// Above the configured thrill cap for the visitor's age
    Intensity,
}

/// Screen a single ride. Returns `None` if the visitor may ride it.
///
/// The weather veto is checked first and wins over everything else.
pub fn exclusion(ride: &Ride, profile: &VisitorProfile, config: &PlannerConfig) -> Option<Exclusion> {
    if profile.bad_weather() && ride.affected_by_weather {
        return Some(Exclusion::Weather);
    }

    if ride.restricted && !ride.within_bounds(profile.age(), profile.weight()) {
        return Some(Exclusion::Bounds);
    }

    let wet = ride.ride_type.is_wet();
    let preference_ok = match profile.preference() {
        RidePreference::DryOnly => !wet,
        RidePreference::WetOnly => wet,
        RidePreference::None | RidePreference::DryFirst => true,
    };
    if !preference_ok {
        return Some(Exclusion::Preference);
    }

    if let Some(cap) = config.intensity_cap
        && profile.age() > cap.above_age
        && ride.thrill > cap.max_thrill
    {
        return Some(Exclusion::Intensity);
    }

    None
}

/// All rides in the snapshot the visitor may be offered, in id order.
pub fn eligible_rides<'a>(
    snapshot: &'a CatalogSnapshot,
    profile: &VisitorProfile,
    config: &PlannerConfig,
) -> Vec<&'a Arc<Ride>> {
    snapshot
        .rides()
        .filter(|ride| exclusion(ride, profile, config).is_none())
        .collect()
}

//! Ordering of the chosen rides.

use std::cmp::{Ordering, Reverse};

use crate::domain::RidePreference;

use super::queue::PricedRide;

/// Group rank: under `dry_first` every dry ride sorts before any wet one.
fn group(item: &PricedRide, preference: RidePreference) -> u8 {
    match preference {
        RidePreference::DryFirst if item.ride.ride_type.is_wet() => 1,
        RidePreference::DryFirst
        | RidePreference::None
        | RidePreference::DryOnly
        | RidePreference::WetOnly => 0,
    }
}

fn compare(a: &PricedRide, b: &PricedRide, preference: RidePreference) -> Ordering {
    group(a, preference)
        .cmp(&group(b, preference))
        .then_with(|| Reverse(a.ride.thrill).cmp(&Reverse(b.ride.thrill)))
        .then_with(|| a.ride.id.cmp(&b.ride.id))
}

/// Put the chosen rides in visiting order.
///
/// Within a group: most thrilling first, ties by ascending id.
pub fn sequence(mut rides: Vec<PricedRide>, preference: RidePreference) -> Vec<PricedRide> {
    rides.sort_by(|a, b| compare(a, b, preference));
    rides
}

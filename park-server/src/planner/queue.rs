//! Queue time resolution.
//!
//! Works out how many minutes each ride will actually cost a visitor: the
//! ride itself plus the queue they will stand in.

use std::sync::Arc;

use crate::domain::{Ride, VisitorProfile};

use super::config::PlannerConfig;

/// An eligible ride annotated with what it costs this visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedRide {
    pub ride: Arc<Ride>,

    /// Queue minutes charged (discounted for VIPs on VIP-lane rides).
    pub charged_queue: u32,

    /// `duration + charged_queue`.
    pub cost: u32,
}

/// Queue time after the VIP discount.
///
/// Rounds down, never exceeds `queue_time`, and never decreases as
/// `queue_time` grows.
pub fn vip_rate(queue_time: u32, discount_percent: u32) -> u32 {
    let keep = 100 - u64::from(discount_percent.min(100));
    // keep <= 100, so the result is at most queue_time
    (u64::from(queue_time) * keep / 100) as u32
}

/// Queue minutes this visitor is charged for `ride`.
pub fn charged_queue_time(ride: &Ride, profile: &VisitorProfile, config: &PlannerConfig) -> u32 {
    if profile.is_vip() && ride.vip_access {
        vip_rate(ride.queue_time, config.vip_discount_percent)
    } else {
        ride.queue_time
    }
}

/// Attach the effective cost to a ride.
pub fn price(ride: &Arc<Ride>, profile: &VisitorProfile, config: &PlannerConfig) -> PricedRide {
    let charged_queue = charged_queue_time(ride, profile, config);
    PricedRide {
        ride: Arc::clone(ride),
        charged_queue,
        cost: ride.duration.saturating_add(charged_queue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RideType;
    use crate::domain::fixtures::ride;

    #[test]
    fn half_price_rounds_down() {
        assert_eq!(vip_rate(25, 50), 12);
        assert_eq!(vip_rate(10, 50), 5);
        assert_eq!(vip_rate(1, 50), 0);
        assert_eq!(vip_rate(0, 50), 0);
    }

    #[test]
    fn discount_extremes() {
        assert_eq!(vip_rate(30, 0), 30);
        assert_eq!(vip_rate(30, 100), 0);
        assert_eq!(vip_rate(30, 250), 0);
        assert_eq!(vip_rate(u32::MAX, 0), u32::MAX);
    }

    #[test]
    fn vip_discount_needs_both_flags() {
        let config = PlannerConfig::default();
        let mut r = ride("L001", 9, 3, 25, RideType::Land);
        let regular = VisitorProfile::new(120, 25, 70, 720).unwrap();
        let vip = regular.clone().with_vip(true);

        // Ride without a VIP lane
        assert_eq!(charged_queue_time(&r, &vip, &config), 25);

        r.vip_access = true;
        assert_eq!(charged_queue_time(&r, &regular, &config), 25);
        assert_eq!(charged_queue_time(&r, &vip, &config), 12);

        let priced = price(&Arc::new(r), &vip, &config);
        assert_eq!(priced.charged_queue, 12);
        assert_eq!(priced.cost, 15);
    }
}

//! Plan assembly: selection + order + derived totals.

use std::sync::Arc;

use crate::domain::{Ride, RidePreference, VisitorProfile};

use super::queue::PricedRide;

/// A ride in a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedRide {
    /// Zero-based position in the visiting order.
    pub position: usize,
    pub ride: Arc<Ride>,
    /// Queue minutes actually charged.
    pub charged_queue_time: u32,
    /// `duration + charged_queue_time`.
    pub effective_cost: u32,
}

/// The visitor inputs a plan was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanInputs {
    pub total_time: u32,
    pub user_age: u32,
    pub user_weight: u32,
    pub is_vip: bool,
    pub bad_weather: bool,
    pub ride_preference: RidePreference,
}

impl PlanInputs {
    pub fn from_profile(profile: &VisitorProfile) -> Self {
        Self {
            total_time: profile.budget_mins(),
            user_age: profile.age(),
            user_weight: profile.weight(),
            is_vip: profile.is_vip(),
            bad_weather: profile.bad_weather(),
            ride_preference: profile.preference(),
        }
    }
}

/// An ordered, budget-feasible ride plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub selected_rides: Vec<SelectedRide>,
    /// Sum of raw thrill (no mandatory bonus).
    pub total_thrill: u32,
    /// Minutes spent on rides, queues and gaps between rides.
    pub time_used: u32,
    pub remaining_time: u32,
    pub inputs: PlanInputs,
}

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.selected_rides.is_empty()
    }
}

/// Package ordered rides into a plan.
///
/// `gap_mins` is charged once between each pair of consecutive rides.
pub fn assemble(ordered: Vec<PricedRide>, profile: &VisitorProfile, gap_mins: u32) -> Plan {
    let gaps = gap_mins.saturating_mul(ordered.len().saturating_sub(1) as u32);
    let ride_time: u32 = ordered.iter().map(|r| r.cost).sum();
    let time_used = ride_time.saturating_add(gaps);
    let total_thrill = ordered.iter().map(|r| r.ride.thrill).sum();

    let selected_rides = ordered
        .into_iter()
        .enumerate()
        .map(|(position, r)| SelectedRide {
            position,
            charged_queue_time: r.charged_queue,
            effective_cost: r.cost,
            ride: r.ride,
        })
        .collect();

    Plan {
        selected_rides,
        total_thrill,
        time_used,
        remaining_time: profile.budget_mins().saturating_sub(time_used),
        inputs: PlanInputs::from_profile(profile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RideType;
    use crate::domain::fixtures::ride;

    fn priced(r: Ride, charged_queue: u32) -> PricedRide {
        PricedRide {
            cost: r.duration + charged_queue,
            charged_queue,
            ride: Arc::new(r),
        }
    }

    #[test]
    fn totals_and_positions() {
        let profile = VisitorProfile::new(30, 25, 70, 720)
            .unwrap()
            .with_vip(true)
            .with_preference(RidePreference::DryFirst);
        let ordered = vec![
            priced(ride("L001", 8, 10, 5, RideType::Land), 5),
            priced(ride("L002", 5, 5, 2, RideType::Land), 1),
        ];

        let plan = assemble(ordered, &profile, 0);

        assert_eq!(plan.total_thrill, 13);
        assert_eq!(plan.time_used, 21);
        assert_eq!(plan.remaining_time, 9);
        assert_eq!(plan.selected_rides[0].position, 0);
        assert_eq!(plan.selected_rides[1].position, 1);
        assert_eq!(plan.selected_rides[1].charged_queue_time, 1);
        assert_eq!(plan.selected_rides[1].effective_cost, 6);

        assert_eq!(plan.inputs.total_time, 30);
        assert_eq!(plan.inputs.user_age, 25);
        assert_eq!(plan.inputs.user_weight, 70);
        assert!(plan.inputs.is_vip);
        assert!(!plan.inputs.bad_weather);
        assert_eq!(plan.inputs.ride_preference, RidePreference::DryFirst);
    }

    #[test]
    fn gaps_between_rides_only() {
        let profile = VisitorProfile::new(60, 25, 70, 720).unwrap();

        let one = assemble(vec![priced(ride("L001", 8, 10, 5, RideType::Land), 5)], &profile, 10);
        assert_eq!(one.time_used, 15);

        let two = assemble(
            vec![
                priced(ride("L001", 8, 10, 5, RideType::Land), 5),
                priced(ride("L002", 5, 5, 2, RideType::Land), 2),
            ],
            &profile,
            10,
        );
        assert_eq!(two.time_used, 32);
        assert_eq!(two.remaining_time, 28);
    }

    #[test]
    fn empty_plan_keeps_whole_budget() {
        let profile = VisitorProfile::new(5, 25, 70, 720).unwrap();
        let plan = assemble(Vec::new(), &profile, 10);

        assert!(plan.is_empty());
        assert_eq!(plan.total_thrill, 0);
        assert_eq!(plan.time_used, 0);
        assert_eq!(plan.remaining_time, 5);
    }
}

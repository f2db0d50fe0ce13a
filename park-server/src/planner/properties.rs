//! Property tests for the whole planning pipeline.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::catalog::CatalogSnapshot;
use crate::domain::fixtures::ride;
use crate::domain::{Ride, RidePreference, RideType, VisitorProfile};

use super::{Plan, Planner, PlannerConfig, vip_rate};

fn arb_ride_type() -> impl Strategy<Value = RideType> {
    prop_oneof![
        Just(RideType::Land),
        Just(RideType::Water),
        Just(RideType::Kids),
    ]
}

fn arb_preference() -> impl Strategy<Value = RidePreference> {
    prop_oneof![
        Just(RidePreference::None),
        Just(RidePreference::DryOnly),
        Just(RidePreference::WetOnly),
        Just(RidePreference::DryFirst),
    ]
}

prop_compose! {
    fn arb_ride(index: usize)(
        ride_type in arb_ride_type(),
        thrill in 1u32..=10,
        duration in 1u32..=30,
        queue_time in 0u32..=60,
        mandatory in proptest::bool::weighted(0.1),
        restricted in any::<bool>(),
        vip_access in any::<bool>(),
        affected_by_weather in any::<bool>(),
        min_age in 0u32..40,
        age_span in 1u32..60,
        min_weight in 0u32..80,
        weight_span in 1u32..150,
    ) -> Ride {
        let prefix = match ride_type {
            RideType::Land => 'L',
            RideType::Water => 'W',
            RideType::Kids => 'K',
        };
        let mut r = ride(&format!("{prefix}{index:03}"), thrill, duration, queue_time, ride_type);
        r.mandatory = mandatory;
        r.restricted = restricted;
        r.vip_access = vip_access;
        r.affected_by_weather = affected_by_weather;
        r.min_age = min_age;
        r.max_age = min_age + age_span;
        r.min_weight = min_weight;
        r.max_weight = min_weight + weight_span;
        r
    }
}

fn arb_catalog() -> impl Strategy<Value = CatalogSnapshot> {
    (0usize..12)
        .prop_flat_map(|n| (0..n).map(arb_ride).collect::<Vec<_>>())
        .prop_map(|rides| {
            CatalogSnapshot::from_rides(rides, 0).expect("generated rides are valid and unique")
        })
}

prop_compose! {
    fn arb_profile()(
        budget in 1i64..=180,
        age in 1i64..=100,
        weight in 10i64..=300,
        is_vip in any::<bool>(),
        bad_weather in any::<bool>(),
        preference in arb_preference(),
    ) -> VisitorProfile {
        VisitorProfile::new(budget, age, weight, 720)
            .expect("generated profile is in range")
            .with_vip(is_vip)
            .with_bad_weather(bad_weather)
            .with_preference(preference)
    }
}

fn plan(snapshot: &CatalogSnapshot, profile: &VisitorProfile) -> Plan {
    let config = PlannerConfig::default();
    Planner::new(&config)
        .plan(snapshot, profile)
        .expect("profile within the default ceiling")
}

proptest! {
    #[test]
    fn fits_in_budget(snapshot in arb_catalog(), profile in arb_profile()) {
        let plan = plan(&snapshot, &profile);

        let spent: u32 = plan
            .selected_rides
            .iter()
            .map(|s| s.ride.duration + s.charged_queue_time)
            .sum();
        prop_assert!(spent <= profile.budget_mins());
        prop_assert_eq!(plan.time_used, spent);
        prop_assert_eq!(plan.remaining_time, profile.budget_mins() - spent);
        prop_assert_eq!(
            plan.total_thrill,
            plan.selected_rides.iter().map(|s| s.ride.thrill).sum::<u32>()
        );
    }

    #[test]
    fn each_ride_at_most_once(snapshot in arb_catalog(), profile in arb_profile()) {
        let plan = plan(&snapshot, &profile);
        let ids: HashSet<_> = plan.selected_rides.iter().map(|s| s.ride.id.clone()).collect();
        prop_assert_eq!(ids.len(), plan.selected_rides.len());
    }

    #[test]
    fn restricted_bounds_respected(snapshot in arb_catalog(), profile in arb_profile()) {
        let plan = plan(&snapshot, &profile);
        for s in &plan.selected_rides {
            if s.ride.restricted {
                prop_assert!(s.ride.within_bounds(profile.age(), profile.weight()));
            }
        }
    }

    #[test]
    fn weather_veto(snapshot in arb_catalog(), profile in arb_profile()) {
        let plan = plan(&snapshot, &profile.with_bad_weather(true));
        prop_assert!(plan.selected_rides.iter().all(|s| !s.ride.affected_by_weather));
    }

    #[test]
    fn preferences_respected(snapshot in arb_catalog(), profile in arb_profile()) {
        let plan = plan(&snapshot, &profile);
        let wet: Vec<bool> = plan
            .selected_rides
            .iter()
            .map(|s| s.ride.ride_type.is_wet())
            .collect();

        match profile.preference() {
            RidePreference::DryOnly => prop_assert!(wet.iter().all(|w| !w)),
            RidePreference::WetOnly => prop_assert!(wet.iter().all(|w| *w)),
            RidePreference::DryFirst => {
                // No dry ride after the first wet one
                let first_wet = wet.iter().position(|w| *w).unwrap_or(wet.len());
                prop_assert!(wet[first_wet..].iter().all(|w| *w));
            }
            RidePreference::None => {}
        }
    }

    #[test]
    fn vip_discount_only_where_offered(snapshot in arb_catalog(), profile in arb_profile()) {
        let plan = plan(&snapshot, &profile);
        for s in &plan.selected_rides {
            if profile.is_vip() && s.ride.vip_access {
                prop_assert!(s.charged_queue_time <= s.ride.queue_time);
                prop_assert_eq!(s.charged_queue_time, vip_rate(s.ride.queue_time, 50));
            } else {
                prop_assert_eq!(s.charged_queue_time, s.ride.queue_time);
            }
        }
    }

    #[test]
    fn deterministic(snapshot in arb_catalog(), profile in arb_profile()) {
        prop_assert_eq!(plan(&snapshot, &profile), plan(&snapshot, &profile));
    }

    #[test]
    fn positions_are_dense(snapshot in arb_catalog(), profile in arb_profile()) {
        let plan = plan(&snapshot, &profile);
        for (i, s) in plan.selected_rides.iter().enumerate() {
            prop_assert_eq!(s.position, i);
        }
    }

    #[test]
    fn more_time_never_less_thrill(
        snapshot in arb_catalog(),
        profile in arb_profile(),
        extra in 0i64..120,
    ) {
        // Mandatory bonus can trade thrill for a mandatory ride, so compare
        // without it
        let config = PlannerConfig::new(720, 50, 0, 0);
        let planner = Planner::new(&config);
        let bigger = VisitorProfile::new(
            i64::from(profile.budget_mins()) + extra,
            i64::from(profile.age()),
            i64::from(profile.weight()),
            720,
        )
        .expect("still in range")
        .with_vip(profile.is_vip())
        .with_bad_weather(profile.bad_weather())
        .with_preference(profile.preference());

        let small = planner.plan(&snapshot, &profile).expect("in range");
        let large = planner.plan(&snapshot, &bigger).expect("in range");
        prop_assert!(large.total_thrill >= small.total_thrill);
    }
}

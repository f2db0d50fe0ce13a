//! Plan optimization.
//!
//! Runs the stages in order over one catalog snapshot: eligibility, queue
//! pricing, selection, sequencing and assembly. Each call is a pure function
//! of the snapshot, the profile and the configuration.

use tracing::debug;

use crate::catalog::CatalogSnapshot;
use crate::domain::{ValidationError, VisitorProfile};

use super::assemble::{Plan, assemble};
use super::config::PlannerConfig;
use super::eligibility::eligible_rides;
use super::queue::{PricedRide, price};
use super::select::select;
use super::sequence::sequence;

/// Error from plan optimization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Profile rejected by the planner's configuration
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Ride plan optimizer.
pub struct Planner<'a> {
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    pub fn new(config: &'a PlannerConfig) -> Self {
        Self { config }
    }

    /// Compute the best plan for `profile` over `snapshot`.
    ///
    /// An empty plan is a normal result when nothing is eligible or nothing
    /// fits.
    pub fn plan(
        &self,
        snapshot: &CatalogSnapshot,
        profile: &VisitorProfile,
    ) -> Result<Plan, PlanError> {
        if profile.budget_mins() > self.config.max_budget_mins {
            return Err(ValidationError::BudgetOutOfRange {
                budget: i64::from(profile.budget_mins()),
                max: self.config.max_budget_mins,
            }
            .into());
        }

        let priced: Vec<PricedRide> = eligible_rides(snapshot, profile, self.config)
            .into_iter()
            .map(|ride| price(ride, profile, self.config))
            .collect();

        let chosen = select(
            &priced,
            profile.budget_mins(),
            self.config.ride_gap_mins,
            self.config.mandatory_bonus,
        );

        debug!(
            revision = snapshot.revision(),
            catalog = snapshot.len(),
            eligible = priced.len(),
            selected = chosen.len(),
            "Plan computed"
        );

        let selected = chosen.into_iter().map(|i| priced[i].clone()).collect();
        let ordered = sequence(selected, profile.preference());
        Ok(assemble(ordered, profile, self.config.ride_gap_mins))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::ride;
    use crate::domain::{Ride, RidePreference, RideType};

    fn example_catalog() -> CatalogSnapshot {
        CatalogSnapshot::from_rides(
            vec![
                ride("L001", 8, 10, 5, RideType::Land),
                ride("L002", 5, 5, 2, RideType::Land),
                ride("W001", 9, 15, 10, RideType::Water),
            ],
            0,
        )
        .unwrap()
    }

    fn profile(budget: i64) -> VisitorProfile {
        VisitorProfile::new(budget, 25, 70, 720).unwrap()
    }

    fn ids(plan: &Plan) -> Vec<&str> {
        plan.selected_rides.iter().map(|s| s.ride.id.as_str()).collect()
    }

    #[test]
    fn combination_beats_single_best() {
        let config = PlannerConfig::default();
        let plan = Planner::new(&config)
            .plan(&example_catalog(), &profile(30))
            .unwrap();

        assert_eq!(ids(&plan), vec!["L001", "L002"]);
        assert_eq!(plan.total_thrill, 13);
        assert_eq!(plan.remaining_time, 8);
    }

    #[test]
    fn wet_only_exact_fit() {
        let config = PlannerConfig::default();
        let visitor = profile(25).with_preference(RidePreference::WetOnly);
        let plan = Planner::new(&config)
            .plan(&example_catalog(), &visitor)
            .unwrap();

        assert_eq!(ids(&plan), vec!["W001"]);
        assert_eq!(plan.total_thrill, 9);
        assert_eq!(plan.remaining_time, 0);
        assert_eq!(plan.inputs.ride_preference, RidePreference::WetOnly);
    }

    #[test]
    fn nothing_fits_is_an_empty_plan() {
        let config = PlannerConfig::default();
        let plan = Planner::new(&config)
            .plan(&example_catalog(), &profile(5))
            .unwrap();

        assert!(plan.is_empty());
        assert_eq!(plan.total_thrill, 0);
        assert_eq!(plan.remaining_time, 5);
    }

    #[test]
    fn restricted_ride_never_selected_outside_bounds() {
        let mut limited: Ride = ride("L007", 10, 1, 0, RideType::Land);
        limited.restricted = true;
        limited.max_age = 50;
        let mut rides: Vec<Ride> = example_catalog().rides().map(|r| (**r).clone()).collect();
        rides.push(limited);
        let snapshot = CatalogSnapshot::from_rides(rides, 0).unwrap();

        let config = PlannerConfig::default();
        let planner = Planner::new(&config);
        for budget in [1, 5, 30, 60, 720] {
            let senior = VisitorProfile::new(budget, 60, 70, 720).unwrap();
            let plan = planner.plan(&snapshot, &senior).unwrap();
            assert!(!ids(&plan).contains(&"L007"), "budget {budget}");
        }

        // Within bounds it is the best value ride in the park
        let young = VisitorProfile::new(1, 30, 70, 720).unwrap();
        let plan = planner.plan(&snapshot, &young).unwrap();
        assert_eq!(ids(&plan), vec!["L007"]);
    }

    #[test]
    fn dry_first_orders_water_last() {
        let config = PlannerConfig::default();
        let visitor = profile(60).with_preference(RidePreference::DryFirst);
        let plan = Planner::new(&config)
            .plan(&example_catalog(), &visitor)
            .unwrap();

        assert_eq!(ids(&plan), vec!["L001", "L002", "W001"]);
        let positions: Vec<usize> = plan.selected_rides.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn vip_discount_changes_what_fits() {
        let mut rides: Vec<Ride> = example_catalog().rides().map(|r| (**r).clone()).collect();
        for r in &mut rides {
            r.vip_access = true;
        }
        let snapshot = CatalogSnapshot::from_rides(rides, 0).unwrap();
        let config = PlannerConfig::default();
        let planner = Planner::new(&config);

        // Regular: L001 + W001 = 40 > 32, so W001 + L002 = 32 is best
        let regular = planner.plan(&snapshot, &profile(32)).unwrap();
        assert_eq!(ids(&regular), vec!["W001", "L002"]);
        assert_eq!(regular.total_thrill, 14);

        // VIP: L001 costs 12, W001 costs 20
        let vip = planner
            .plan(&snapshot, &profile(32).with_vip(true))
            .unwrap();
        assert_eq!(ids(&vip), vec!["W001", "L001"]);
        assert_eq!(vip.total_thrill, 17);
        assert_eq!(vip.remaining_time, 0);
        assert_eq!(vip.selected_rides[0].charged_queue_time, 5);
    }

    #[test]
    fn bad_weather_closes_exposed_rides() {
        let mut rides: Vec<Ride> = example_catalog().rides().map(|r| (**r).clone()).collect();
        rides[0].affected_by_weather = true;
        let snapshot = CatalogSnapshot::from_rides(rides, 0).unwrap();
        let config = PlannerConfig::default();

        let plan = Planner::new(&config)
            .plan(&snapshot, &profile(30).with_bad_weather(true))
            .unwrap();
        assert_eq!(ids(&plan), vec!["W001"]);
        assert!(plan.inputs.bad_weather);
    }

    #[test]
    fn mandatory_ride_included_when_it_fits() {
        let mut must = ride("K001", 1, 5, 5, RideType::Kids);
        must.mandatory = true;
        let mut rides: Vec<Ride> = example_catalog().rides().map(|r| (**r).clone()).collect();
        rides.push(must);
        let snapshot = CatalogSnapshot::from_rides(rides, 0).unwrap();
        let config = PlannerConfig::default();

        let plan = Planner::new(&config).plan(&snapshot, &profile(25)).unwrap();
        assert!(ids(&plan).contains(&"K001"));
        assert_eq!(ids(&plan), vec!["L001", "K001"]);
        assert_eq!(plan.total_thrill, 9);
    }

    #[test]
    fn ride_gap_is_charged_between_rides() {
        let config = PlannerConfig::new(720, 50, 10_000, 5);
        let plan = Planner::new(&config)
            .plan(&example_catalog(), &profile(30))
            .unwrap();

        assert_eq!(ids(&plan), vec!["L001", "L002"]);
        assert_eq!(plan.time_used, 27);
        assert_eq!(plan.remaining_time, 3);
    }

    #[test]
    fn budget_above_configured_ceiling_rejected() {
        let config = PlannerConfig::new(240, 50, 10_000, 0);
        let err = Planner::new(&config)
            .plan(&example_catalog(), &profile(300))
            .unwrap_err();

        assert_eq!(
            err,
            PlanError::Invalid(ValidationError::BudgetOutOfRange {
                budget: 300,
                max: 240
            })
        );
    }

    #[test]
    fn empty_catalog_is_an_empty_plan() {
        let config = PlannerConfig::default();
        let plan = Planner::new(&config)
            .plan(&CatalogSnapshot::default(), &profile(60))
            .unwrap();

        assert!(plan.is_empty());
        assert_eq!(plan.remaining_time, 60);
    }
}

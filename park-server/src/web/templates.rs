//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{Ride, RidePreference};
use crate::planner::{Plan, SelectedRide};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the planning form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub max_budget_mins: u32,
    pub preferences: Vec<PreferenceOption>,
}

impl IndexTemplate {
    pub fn new(max_budget_mins: u32) -> Self {
        let preferences = [
            RidePreference::None,
            RidePreference::DryOnly,
            RidePreference::WetOnly,
            RidePreference::DryFirst,
        ]
        .into_iter()
        .map(|p| PreferenceOption {
            value: p.as_str(),
            label: p.label(),
        })
        .collect();

        Self {
            max_budget_mins,
            preferences,
        }
    }
}

/// An entry in the ride preference dropdown.
#[derive(Debug, Clone)]
pub struct PreferenceOption {
    pub value: &'static str,
    pub label: &'static str,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Plan results fragment.
#[derive(Template)]
#[template(path = "plan_results.html")]
pub struct PlanResultsTemplate {
    pub plan: PlanView,
}

/// Ride catalog fragment.
#[derive(Template)]
#[template(path = "ride_list.html")]
pub struct RideListTemplate {
    pub rides: Vec<RideView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Format minutes as e.g. "2h 5m" or "45m".
pub fn format_minutes(mins: u32) -> String {
    let hours = mins / 60;
    let rest = mins % 60;
    if hours > 0 {
        format!("{}h {}m", hours, rest)
    } else {
        format!("{}m", rest)
    }
}

/// Plan view model for templates.
#[derive(Debug, Clone)]
pub struct PlanView {
    pub rides: Vec<PlanRideView>,
    pub total_thrill: u32,
    pub time_used: String,
    pub remaining_time: String,
    pub total_time: String,
    pub preference_label: &'static str,
    pub is_vip: bool,
    pub bad_weather: bool,
}

impl PlanView {
    /// Create from a computed plan.
    pub fn from_plan(plan: &Plan) -> Self {
        Self {
            rides: plan
                .selected_rides
                .iter()
                .map(PlanRideView::from_selected)
                .collect(),
            total_thrill: plan.total_thrill,
            time_used: format_minutes(plan.time_used),
            remaining_time: format_minutes(plan.remaining_time),
            total_time: format_minutes(plan.inputs.total_time),
            preference_label: plan.inputs.ride_preference.label(),
            is_vip: plan.inputs.is_vip,
            bad_weather: plan.inputs.bad_weather,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }
}

/// A ride in the plan, as displayed.
#[derive(Debug, Clone)]
pub struct PlanRideView {
    /// 1-based step number
    pub step: usize,
    pub id: String,
    pub name: String,
    pub ride_type: &'static str,
    pub is_wet: bool,
    pub thrill: u32,
    pub duration: u32,
    pub queue_time: u32,
    pub charged_queue_time: u32,
}

impl PlanRideView {
    pub fn from_selected(selected: &SelectedRide) -> Self {
        let ride = &selected.ride;
        Self {
            step: selected.position + 1,
            id: ride.id.to_string(),
            name: ride.name.clone(),
            ride_type: ride.ride_type.as_str(),
            is_wet: ride.ride_type.is_wet(),
            thrill: ride.thrill,
            duration: ride.duration,
            queue_time: ride.queue_time,
            charged_queue_time: selected.charged_queue_time,
        }
    }

    /// Whether the visitor skips part of the queue.
    pub fn is_discounted(&self) -> bool {
        self.charged_queue_time < self.queue_time
    }
}

/// Catalog ride view model.
#[derive(Debug, Clone)]
pub struct RideView {
    pub id: String,
    pub name: String,
    pub ride_type: &'static str,
    pub thrill: u32,
    pub fatigue: u32,
    pub duration: u32,
    pub queue_time: u32,
    pub mandatory: bool,
    pub vip_access: bool,
    pub affected_by_weather: bool,
    /// e.g. "Age 12-50, 40-130 kg"; empty for unrestricted rides
    pub restriction: String,
}

impl RideView {
    pub fn from_ride(ride: &Ride) -> Self {
        let restriction = if ride.restricted {
            format!(
                "Age {}-{}, {}-{} kg",
                ride.min_age, ride.max_age, ride.min_weight, ride.max_weight
            )
        } else {
            String::new()
        };

        Self {
            id: ride.id.to_string(),
            name: ride.name.clone(),
            ride_type: ride.ride_type.as_str(),
            thrill: ride.thrill,
            fatigue: ride.fatigue,
            duration: ride.duration,
            queue_time: ride.queue_time,
            mandatory: ride.mandatory,
            vip_access: ride.vip_access,
            affected_by_weather: ride.affected_by_weather,
            restriction,
        }
    }

    pub fn is_restricted(&self) -> bool {
        !self.restriction.is_empty()
    }
}

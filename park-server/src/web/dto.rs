//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::auth::Role;
use crate::domain::{Ride, RideId, RidePreference, RideType, ValidationError, VisitorProfile};
use crate::planner::{Plan, SelectedRide};

/// Request to generate a ride plan.
#[derive(Debug, Deserialize)]
pub struct GeneratePlanRequest {
    /// Time available in minutes
    pub total_time: i64,

    pub user_age: i64,

    /// Weight in kg
    pub user_weight: i64,

    #[serde(default)]
    pub is_vip: bool,

    #[serde(default)]
    pub bad_weather: bool,

    /// `""`, `dry_only`, `wet_only` or `dry_first`
    #[serde(default)]
    pub ride_preference: String,
}

impl GeneratePlanRequest {
    /// Validate into a visitor profile.
    pub fn to_profile(&self, max_budget_mins: u32) -> Result<VisitorProfile, ValidationError> {
        let preference: RidePreference = self.ride_preference.parse()?;
        Ok(
            VisitorProfile::new(self.total_time, self.user_age, self.user_weight, max_budget_mins)?
                .with_vip(self.is_vip)
                .with_bad_weather(self.bad_weather)
                .with_preference(preference),
        )
    }
}

/// A ride in a generated plan.
#[derive(Debug, Serialize)]
pub struct SelectedRideResult {
    /// Zero-based visiting order
    pub position: usize,
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub ride_type: RideType,
    pub thrill: u32,
    pub duration: u32,

    /// Standard queue time
    pub queue_time: u32,

    /// Queue time actually charged (discounted for VIPs on VIP-lane rides)
    pub vip_queue_time: u32,
}

impl SelectedRideResult {
    pub fn from_selected(selected: &SelectedRide) -> Self {
        let ride = &selected.ride;
        Self {
            position: selected.position,
            id: ride.id.to_string(),
            name: ride.name.clone(),
            ride_type: ride.ride_type,
            thrill: ride.thrill,
            duration: ride.duration,
            queue_time: ride.queue_time,
            vip_queue_time: selected.charged_queue_time,
        }
    }
}

/// Response for plan generation.
///
/// The `*_used` fields echo the validated inputs the plan was computed from.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub selected_rides: Vec<SelectedRideResult>,
    pub total_thrill: u32,
    pub remaining_time: u32,

    /// Minutes spent on rides, queues and walking
    pub time_used: u32,

    pub total_time_used: u32,
    pub user_age_used: u32,
    pub user_weight_used: u32,
    pub is_vip_used: bool,
    pub bad_weather_used: bool,
    pub ride_preference_used: RidePreference,
}

impl PlanResponse {
    pub fn from_plan(plan: &Plan) -> Self {
        Self {
            selected_rides: plan
                .selected_rides
                .iter()
                .map(SelectedRideResult::from_selected)
                .collect(),
            total_thrill: plan.total_thrill,
            remaining_time: plan.remaining_time,
            time_used: plan.time_used,
            total_time_used: plan.inputs.total_time,
            user_age_used: plan.inputs.user_age,
            user_weight_used: plan.inputs.user_weight,
            is_vip_used: plan.inputs.is_vip,
            bad_weather_used: plan.inputs.bad_weather,
            ride_preference_used: plan.inputs.ride_preference,
        }
    }
}

/// Request to add a ride to the catalog.
///
/// Numbers are taken as signed so that negative input gets a specific
/// message rather than a JSON type error.
#[derive(Debug, Deserialize)]
pub struct AddRideRequest {
    pub id: String,
    pub name: String,
    pub thrill: i64,
    pub duration: i64,
    pub queue_time: i64,
    pub fatigue: i64,
    #[serde(default)]
    pub mandatory: bool,
    #[serde(default)]
    pub restricted: bool,
    #[serde(default)]
    pub vip_access: bool,
    #[serde(default)]
    pub affected_by_weather: bool,
    #[serde(rename = "type")]
    pub ride_type: String,
    #[serde(default)]
    pub min_weight: i64,
    #[serde(default = "default_max_weight")]
    pub max_weight: i64,
    #[serde(default)]
    pub min_age: i64,
    #[serde(default = "default_max_age")]
    pub max_age: i64,
}

fn default_max_weight() -> i64 {
    200
}

fn default_max_age() -> i64 {
    100
}

fn non_negative(field: &'static str, value: i64) -> Result<u32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative { field });
    }
    u32::try_from(value).map_err(|_| ValidationError::TooLarge { field })
}

impl AddRideRequest {
    /// Convert into a validated ride.
    pub fn into_ride(self) -> Result<Ride, ValidationError> {
        let ride = Ride {
            id: RideId::parse(self.id.trim())?,
            name: self.name.trim().to_string(),
            thrill: non_negative("thrill", self.thrill)?,
            duration: non_negative("duration", self.duration)?,
            queue_time: non_negative("queue_time", self.queue_time)?,
            fatigue: non_negative("fatigue", self.fatigue)?,
            mandatory: self.mandatory,
            restricted: self.restricted,
            vip_access: self.vip_access,
            affected_by_weather: self.affected_by_weather,
            ride_type: self.ride_type.parse()?,
            min_weight: non_negative("min_weight", self.min_weight)?,
            max_weight: non_negative("max_weight", self.max_weight)?,
            min_age: non_negative("min_age", self.min_age)?,
            max_age: non_negative("max_age", self.max_age)?,
        };
        ride.validate()?;
        Ok(ride)
    }
}

/// Response for a successful ride addition.
#[derive(Debug, Serialize)]
pub struct AddRideResponse {
    pub message: String,
    pub ride: Ride,
}

/// Staff login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub staff_id: String,
    #[serde(default)]
    pub password: String,
}

/// Staff login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub staff_id: String,
    pub role: Role,
    /// RFC 3339
    pub expires_at: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `unavailable`
    pub status: &'static str,
    pub rides_count: usize,
    pub catalog_reachable: bool,
    pub catalog_revision: u64,
    pub cached_plans: u64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

//! Visitor profile and ride preference.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::ValidationError;

/// Accepted visitor ages (years).
pub const AGE_RANGE: std::ops::RangeInclusive<i64> = 1..=100;

/// Accepted visitor weights (kg).
pub const WEIGHT_RANGE: std::ops::RangeInclusive<i64> = 10..=300;

/// How the visitor wants wet and dry rides handled.
///
/// `DryOnly` and `WetOnly` restrict which rides may be chosen. `DryFirst`
/// only constrains the order of the plan: every dry ride comes before any
/// water ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum RidePreference {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "dry_only")]
    DryOnly,
    #[serde(rename = "wet_only")]
    WetOnly,
    #[serde(rename = "dry_first")]
    DryFirst,
}

impl RidePreference {
    /// The wire token. `None` is the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RidePreference::None => "",
            RidePreference::DryOnly => "dry_only",
            RidePreference::WetOnly => "wet_only",
            RidePreference::DryFirst => "dry_first",
        }
    }

    /// Human-readable label for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            RidePreference::None => "No preference (mixed)",
            RidePreference::DryOnly => "Dry rides only",
            RidePreference::WetOnly => "Wet rides only",
            RidePreference::DryFirst => "Dry rides first, then wet",
        }
    }
}

impl FromStr for RidePreference {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(RidePreference::None),
            "dry_only" => Ok(RidePreference::DryOnly),
            "wet_only" => Ok(RidePreference::WetOnly),
            "dry_first" => Ok(RidePreference::DryFirst),
            other => Err(ValidationError::UnknownPreference(other.to_string())),
        }
    }
}

impl fmt::Display for RidePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated visitor profile for one planning request.
///
/// Construct with [`VisitorProfile::new`], which enforces the accepted
/// ranges, then set the flags with the `with_*` methods.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisitorProfile {
    budget_mins: u32,
    age: u32,
    weight: u32,
    is_vip: bool,
    bad_weather: bool,
    preference: RidePreference,
}

impl VisitorProfile {
    /// Create a profile, rejecting out-of-range values.
    ///
    /// `max_budget_mins` is the operating ceiling for the time budget.
    pub fn new(
        budget_mins: i64,
        age: i64,
        weight: i64,
        max_budget_mins: u32,
    ) -> Result<Self, ValidationError> {
        if budget_mins < 1 || budget_mins > i64::from(max_budget_mins) {
            return Err(ValidationError::BudgetOutOfRange {
                budget: budget_mins,
                max: max_budget_mins,
            });
        }
        if !AGE_RANGE.contains(&age) {
            return Err(ValidationError::AgeOutOfRange(age));
        }
        if !WEIGHT_RANGE.contains(&weight) {
            return Err(ValidationError::WeightOutOfRange(weight));
        }

        // Ranges above guarantee these fit.
        Ok(Self {
            budget_mins: budget_mins as u32,
            age: age as u32,
            weight: weight as u32,
            is_vip: false,
            bad_weather: false,
            preference: RidePreference::None,
        })
    }

    pub fn with_vip(mut self, is_vip: bool) -> Self {
        self.is_vip = is_vip;
        self
    }

    pub fn with_bad_weather(mut self, bad_weather: bool) -> Self {
        self.bad_weather = bad_weather;
        self
    }

    pub fn with_preference(mut self, preference: RidePreference) -> Self {
        self.preference = preference;
        self
    }

    pub fn budget_mins(&self) -> u32 {
        self.budget_mins
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn is_vip(&self) -> bool {
        self.is_vip
    }

    pub fn bad_weather(&self) -> bool {
        self.bad_weather
    }

    pub fn preference(&self) -> RidePreference {
        self.preference
    }
}

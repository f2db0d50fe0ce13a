//! Ride type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::ride_id::RideId;

/// Ride category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RideType {
    Land,
    Water,
    Kids,
}

impl RideType {
    /// Returns the lowercase token used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RideType::Land => "land",
            RideType::Water => "water",
            RideType::Kids => "kids",
        }
    }

    /// Whether riders get wet. Land and kids rides are dry.
    pub fn is_wet(&self) -> bool {
        matches!(self, RideType::Water)
    }
}

impl FromStr for RideType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "land" => Ok(RideType::Land),
            "water" => Ok(RideType::Water),
            "kids" => Ok(RideType::Kids),
            _ => Err(ValidationError::UnknownRideType(s.to_string())),
        }
    }
}

impl fmt::Display for RideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_max_weight() -> u32 {
    200
}

fn default_max_age() -> u32 {
    100
}

/// A ride in the park catalog.
///
/// Rides are validated with [`Ride::validate`] when they enter the catalog
/// and are shared immutably (behind `Arc`) from then on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ride {
    pub id: RideId,
    pub name: String,

    /// Enjoyment value, 1-10.
    pub thrill: u32,

    /// Ride duration in minutes.
    pub duration: u32,

    /// Standard queue time in minutes.
    pub queue_time: u32,

    /// 1-10. Carried for display; the optimizer ignores it.
    pub fatigue: u32,

    /// Soft priority: preferred by the selection engine, never forced.
    #[serde(default)]
    pub mandatory: bool,

    /// When set, the age and weight bounds below are enforced.
    #[serde(default)]
    pub restricted: bool,

    /// Whether VIP visitors get the discounted queue.
    #[serde(default)]
    pub vip_access: bool,

    /// Closed in bad weather.
    #[serde(default)]
    pub affected_by_weather: bool,

    #[serde(rename = "type")]
    pub ride_type: RideType,

    #[serde(default)]
    pub min_weight: u32,
    #[serde(default = "default_max_weight")]
    pub max_weight: u32,
    #[serde(default)]
    pub min_age: u32,
    #[serde(default = "default_max_age")]
    pub max_age: u32,
}

impl Ride {
    /// Check the ride's invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !(1..=10).contains(&self.thrill) {
            return Err(ValidationError::ThrillOutOfRange(self.thrill));
        }
        if !(1..=10).contains(&self.fatigue) {
            return Err(ValidationError::FatigueOutOfRange(self.fatigue));
        }
        if self.duration == 0 {
            return Err(ValidationError::ZeroDuration);
        }
        if self.min_weight >= self.max_weight {
            return Err(ValidationError::InvalidBounds {
                what: "weight",
                min: self.min_weight,
                max: self.max_weight,
            });
        }
        if self.min_age >= self.max_age {
            return Err(ValidationError::InvalidBounds {
                what: "age",
                min: self.min_age,
                max: self.max_age,
            });
        }
        Ok(())
    }

    /// Whether a visitor of this age and weight is within the ride's bounds.
    ///
    /// Bounds are inclusive. This ignores `restricted`; callers decide
    /// whether the bounds apply.
    pub fn within_bounds(&self, age: u32, weight: u32) -> bool {
        (self.min_age..=self.max_age).contains(&age)
            && (self.min_weight..=self.max_weight).contains(&weight)
    }

    /// Whether the id prefix agrees with the declared type.
    ///
    /// Ids without a recognised prefix are considered consistent.
    pub fn prefix_matches_type(&self) -> bool {
        self.id.category().is_none_or(|c| c == self.ride_type)
    }
}

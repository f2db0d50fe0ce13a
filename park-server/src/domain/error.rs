//! Domain error types.
//!
//! These errors represent input that fails validation before it reaches the
//! optimizer or the ride catalog. They are distinct from storage/IO errors.

/// Validation failures for rides and visitor profiles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Ride identifier is malformed
    #[error("invalid ride id: {reason}")]
    InvalidRideId { reason: &'static str },

    /// Ride name is empty
    #[error("ride name cannot be empty")]
    EmptyName,

    /// Thrill outside 1..=10
    #[error("thrill must be between 1 and 10 (got {0})")]
    ThrillOutOfRange(u32),

    /// Fatigue outside 1..=10
    #[error("fatigue must be between 1 and 10 (got {0})")]
    FatigueOutOfRange(u32),

    /// Duration of zero minutes
    #[error("duration must be at least 1 minute")]
    ZeroDuration,

    /// Eligibility bounds with min >= max
    #[error("{what} bounds must satisfy min < max (got {min}..{max})")]
    InvalidBounds {
        what: &'static str,
        min: u32,
        max: u32,
    },

    /// A count of minutes or kilograms was negative
    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    /// A count of minutes or kilograms does not fit in 32 bits
    #[error("{field} is too large")]
    TooLarge { field: &'static str },

    /// Ride type token not recognised
    #[error("invalid ride type {0:?}: must be \"land\", \"water\", or \"kids\"")]
    UnknownRideType(String),

    /// Time budget is zero or above the operating ceiling
    #[error("total time must be between 1 and {max} minutes (got {budget})")]
    BudgetOutOfRange { budget: i64, max: u32 },

    /// Visitor age outside accepted range
    #[error("user age must be between 1 and 100 (got {0})")]
    AgeOutOfRange(i64),

    /// Visitor weight outside accepted range
    #[error("user weight must be between 10 and 300 kg (got {0})")]
    WeightOutOfRange(i64),

    /// Ride preference token not recognised
    #[error(
        "unknown ride preference {0:?}: expected \"\", \"none\", \"dry_only\", \"wet_only\" or \"dry_first\""
    )]
    UnknownPreference(String),
}

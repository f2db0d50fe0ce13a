//! Planner configuration.

/// Keeps high-thrill rides away from older visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntensityCap {
    /// Visitors strictly older than this are capped.
    pub above_age: u32,
    /// Highest thrill a capped visitor may be offered.
    pub max_thrill: u32,
}

/// Configuration parameters for plan optimization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Largest accepted time budget (minutes). Bounds the DP table; a park
    /// operating day.
    pub max_budget_mins: u32,

    /// Percentage knocked off the queue time of VIP-lane rides for VIP
    /// visitors. 0 disables the discount, 100 skips the queue entirely.
    pub vip_discount_percent: u32,

    /// Score added per mandatory ride. Must exceed the highest total thrill
    /// a plan can reach for mandatory rides to always win ties with
    /// non-mandatory combinations.
    pub mandatory_bonus: u32,

    /// Walking time between consecutive rides (minutes).
    pub ride_gap_mins: u32,

    /// Optional age-based thrill cap. Disabled by default.
    pub intensity_cap: Option<IntensityCap>,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_budget_mins: u32,
        vip_discount_percent: u32,
        mandatory_bonus: u32,
        ride_gap_mins: u32,
    ) -> Self {
        Self {
            max_budget_mins,
            vip_discount_percent: vip_discount_percent.min(100),
            mandatory_bonus,
            ride_gap_mins,
            intensity_cap: None,
        }
    }

    /// Enable the age-based thrill cap.
    pub fn with_intensity_cap(mut self, cap: IntensityCap) -> Self {
        self.intensity_cap = Some(cap);
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_budget_mins: 720, // 12 hours
            vip_discount_percent: 50,
            mandatory_bonus: 10_000,
            ride_gap_mins: 0,
            intensity_cap: None,
        }
    }
}

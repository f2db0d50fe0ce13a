//! Ride plan optimizer.
//!
//! Answers: "given this visitor and this much time, which rides should they
//! go on, and in what order, to get the most thrill?"
//!
//! The pipeline screens the catalog for eligible rides, prices each one
//! (duration plus the queue actually charged), picks the best-scoring subset
//! that fits the time budget with an exact knapsack, orders it, and packages
//! the result with its totals.

mod assemble;
mod config;
mod eligibility;
mod optimize;
mod queue;
mod select;
mod sequence;

#[cfg(test)]
mod properties;

pub use assemble::{Plan, PlanInputs, SelectedRide, assemble};
pub use config::{IntensityCap, PlannerConfig};
pub use eligibility::{Exclusion, eligible_rides, exclusion};
pub use optimize::{PlanError, Planner};
pub use queue::{PricedRide, charged_queue_time, price, vip_rate};
pub use select::select;
pub use sequence::sequence;

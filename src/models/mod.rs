//! Core data models for the Assembly Cost Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day_input;
mod day_result;
mod estimate;
mod public_holiday;
mod staff;

pub use day_input::{BreakDuration, DayInput};
pub use day_result::{DayResult, Extras, RoleLaborCost, TierHours, TierSurcharges};
pub use estimate::{CostSummary, CostTotals, Estimate, ProjectInfo};
pub use public_holiday::PublicHoliday;
pub use staff::{Role, StaffCounts};

//! Calculation logic for the Assembly Cost Engine.
//!
//! This module contains the daily cost calculation and its building blocks:
//! worked hours with midnight wrap-around, the overtime tier split, labor cost
//! per role, vehicle allocation and travel cost, day-level extras, and the
//! aggregation of daily results into an estimate.

mod aggregate;
mod daily_cost;
mod estimate;
mod extras;
mod labor_cost;
mod tier_split;
mod travel_cost;
mod worked_hours;

pub use aggregate::{aggregate, grand_total};
pub use daily_cost::compute_day;
pub use estimate::build_estimate;
pub use extras::calculate_extras;
pub use labor_cost::{LaborBreakdown, calculate_labor, calculate_role_labor};
pub use tier_split::{
    NORMAL_HOURS_LIMIT, SurchargeTier, TIER_1_LIMIT, TIER_1_MULTIPLIER, TIER_2_LIMIT,
    TIER_2_MULTIPLIER, TIER_3_MULTIPLIER, split_into_tiers,
};
pub use travel_cost::{VEHICLE_CAPACITY, calculate_travel_cost, vehicles_needed};
pub use worked_hours::{HOURS_PER_DAY, shift_span, worked_hours};

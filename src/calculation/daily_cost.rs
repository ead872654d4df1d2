//! Daily cost calculation.
//!
//! [`compute_day`] turns one [`DayInput`] into its [`DayResult`]: worked
//! hours, tier split, labor per role, vehicles and travel, extras and the day
//! total. The calculation is pure and total; it performs no validation and
//! cannot fail.
//!
//! Holiday status is carried through to the result for display only. It does
//! not change any amount.

use rust_decimal::Decimal;

use crate::config::RateConfig;
use crate::models::{DayInput, DayResult};

use super::{
    calculate_extras, calculate_labor, calculate_travel_cost, split_into_tiers, vehicles_needed,
    worked_hours,
};

/// Calculates the cost breakdown of one day.
///
/// # Example
///
/// ```
/// use assembly_cost_engine::calculation::compute_day;
/// use assembly_cost_engine::config::RateConfig;
/// use assembly_cost_engine::models::{BreakDuration, DayInput, StaffCounts};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = DayInput {
///     date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
///     is_holiday: false,
///     shift_start: 8,
///     shift_end: 17,
///     break_duration: BreakDuration::OneHour,
///     staff: StaffCounts { mechanics: 1, electricians: 0, programmers: 0 },
///     kilometers: 100,
///     lodging: false,
///     meals: false,
/// };
///
/// let result = compute_day(&day, &RateConfig::default());
///
/// assert_eq!(result.labor_cost, Decimal::from(560));
/// assert_eq!(result.travel_cost, Decimal::from(125));
/// assert_eq!(result.day_total, Decimal::from(685));
/// ```
pub fn compute_day(input: &DayInput, rates: &RateConfig) -> DayResult {
    let worked = worked_hours(input.shift_start, input.shift_end, input.break_duration)
        .max(Decimal::ZERO);
    let hours = split_into_tiers(worked);

    let labor = calculate_labor(&input.staff, &rates.hourly_rates, &hours);

    let vehicles = vehicles_needed(input.staff.total());
    let travel_cost = calculate_travel_cost(input.kilometers, rates.price_per_km, vehicles);

    let extras = calculate_extras(input, rates);

    let day_total = labor.total + travel_cost + extras.total;

    DayResult {
        input: *input,
        worked_hours: worked,
        hours,
        labor: labor.roles,
        labor_cost: labor.total,
        surcharges: labor.surcharges,
        vehicles,
        travel_cost,
        extras,
        day_total,
    }
}

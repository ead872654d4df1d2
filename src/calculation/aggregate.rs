//! Aggregation of daily results.

use rust_decimal::Decimal;

use crate::models::{CostSummary, CostTotals, DayResult};

/// Sums an ordered sequence of daily results.
///
/// The results are returned unchanged and in the same order. Dates are not
/// checked for uniqueness; a repeated date is summed like any other day.
///
/// # Example
///
/// ```
/// use assembly_cost_engine::calculation::aggregate;
///
/// let summary = aggregate(vec![]);
/// assert!(summary.days.is_empty());
/// assert!(summary.total().is_zero());
/// ```
pub fn aggregate(days: Vec<DayResult>) -> CostSummary {
    let totals = days.iter().fold(CostTotals::default(), |mut totals, day| {
        totals.grand_total += day.day_total;
        totals.labor_cost += day.labor_cost;
        totals.surcharges += day.surcharges.total();
        totals.travel_cost += day.travel_cost;
        totals.extras += day.extras.total;
        totals.normal_hours += day.hours.normal;
        totals.overtime_hours += day.hours.tier1 + day.hours.tier2 + day.hours.tier3;
        totals.vehicle_days += day.vehicles;
        totals
    });

    CostSummary { days, totals }
}

/// Returns the sum of all day totals.
pub fn grand_total(days: &[DayResult]) -> Decimal {
    days.iter().map(|day| day.day_total).sum()
}

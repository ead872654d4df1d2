//! Row-per-day view of an estimate.
//!
//! [`ReportRow`] flattens a [`DayResult`] and its echoed input into the fixed
//! column list shared by the table renderer and the spreadsheet export. This
//! is the only place where amounts are rounded.

use chrono::Weekday;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{DayResult, Role};

/// Column headers, in display order.
pub const COLUMNS: [&str; 20] = [
    "Date",
    "Weekday",
    "Holiday",
    "Time",
    "Break",
    "Mechanics",
    "Electricians",
    "Programmers",
    "Normal h",
    "OT 25% h",
    "OT 50% h",
    "OT 100% h",
    "km",
    "Vehicles",
    "Travel €",
    "Surcharge 25% €",
    "Surcharge 50% €",
    "Surcharge 100% €",
    "Extras €",
    "Day total €",
];

/// Rounds an amount to cents, halves away from zero.
///
/// # Example
///
/// ```
/// use assembly_cost_engine::report::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("54.375").unwrap()), Decimal::from_str("54.38").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// A single typed cell of a report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// Free text.
    Text(String),
    /// A whole number (headcount, kilometers, vehicles).
    Count(u32),
    /// Hours, rounded to two decimals.
    Hours(Decimal),
    /// Euro amount, rounded to cents.
    Money(Decimal),
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Text(text) => write!(f, "{}", text),
            CellValue::Count(count) => write!(f, "{}", count),
            CellValue::Hours(hours) => write!(f, "{}", hours.normalize()),
            CellValue::Money(amount) => write!(f, "{:.2}", amount),
        }
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// One report line, rounded for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    date: String,
    weekday: &'static str,
    holiday: &'static str,
    time: String,
    break_label: &'static str,
    staff: [u32; 3],
    hours: [Decimal; 4],
    kilometers: u32,
    vehicles: u32,
    travel_cost: Decimal,
    surcharges: [Decimal; 3],
    extras: Decimal,
    day_total: Decimal,
}

impl ReportRow {
    /// Returns the cells in [`COLUMNS`] order.
    pub fn cells(&self) -> Vec<CellValue> {
        let mut cells = vec![
            CellValue::Text(self.date.clone()),
            CellValue::Text(self.weekday.to_string()),
            CellValue::Text(self.holiday.to_string()),
            CellValue::Text(self.time.clone()),
            CellValue::Text(self.break_label.to_string()),
        ];
        cells.extend(self.staff.iter().copied().map(CellValue::Count));
        cells.extend(self.hours.iter().copied().map(CellValue::Hours));
        cells.push(CellValue::Count(self.kilometers));
        cells.push(CellValue::Count(self.vehicles));
        cells.push(CellValue::Money(self.travel_cost));
        cells.extend(self.surcharges.iter().copied().map(CellValue::Money));
        cells.push(CellValue::Money(self.extras));
        cells.push(CellValue::Money(self.day_total));
        cells
    }
}

impl From<&DayResult> for ReportRow {
    fn from(result: &DayResult) -> Self {
        let input = &result.input;
        let round_hours = |hours: Decimal| hours.round_dp(2);

        ReportRow {
            date: input.date.format("%Y-%m-%d").to_string(),
            weekday: weekday_name(input.weekday()),
            holiday: if input.is_holiday { "Yes" } else { "No" },
            time: input.shift_label(),
            break_label: input.break_duration.label(),
            staff: Role::ALL.map(|role| input.staff.get(role)),
            hours: [
                round_hours(result.hours.normal),
                round_hours(result.hours.tier1),
                round_hours(result.hours.tier2),
                round_hours(result.hours.tier3),
            ],
            kilometers: input.kilometers,
            vehicles: result.vehicles,
            travel_cost: round_money(result.travel_cost),
            surcharges: [
                round_money(result.surcharges.tier1),
                round_money(result.surcharges.tier2),
                round_money(result.surcharges.tier3),
            ],
            extras: round_money(result.extras.total),
            day_total: round_money(result.day_total),
        }
    }
}

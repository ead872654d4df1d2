//! Per-day input model.
//!
//! This module defines [`DayInput`], the immutable description of one
//! assembly day, and the [`BreakDuration`] options a day may deduct.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::StaffCounts;

/// The unpaid break deducted from every shift.
///
/// Only these four durations are offered.
///
/// # Example
///
/// ```
/// use assembly_cost_engine::models::BreakDuration;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(BreakDuration::FortyFiveMinutes.hours(), Decimal::from_str("0.75").unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakDuration {
    /// No break.
    #[default]
    None,
    /// 30 minute break.
    ThirtyMinutes,
    /// 45 minute break.
    FortyFiveMinutes,
    /// One hour break.
    OneHour,
}

impl BreakDuration {
    /// Every break option, shortest first.
    pub const ALL: [BreakDuration; 4] = [
        BreakDuration::None,
        BreakDuration::ThirtyMinutes,
        BreakDuration::FortyFiveMinutes,
        BreakDuration::OneHour,
    ];

    /// Returns the break length in hours.
    pub fn hours(self) -> Decimal {
        match self {
            BreakDuration::None => Decimal::ZERO,
            BreakDuration::ThirtyMinutes => Decimal::new(5, 1),
            BreakDuration::FortyFiveMinutes => Decimal::new(75, 2),
            BreakDuration::OneHour => Decimal::ONE,
        }
    }

    /// Returns the human-readable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            BreakDuration::None => "No break",
            BreakDuration::ThirtyMinutes => "30 minutes",
            BreakDuration::FortyFiveMinutes => "45 minutes",
            BreakDuration::OneHour => "1 hour",
        }
    }
}

/// One day of an assembly, as entered by the caller.
///
/// Shift hours are whole hours on a 24-hour clock. A `shift_end` less than or
/// equal to `shift_start` means the shift runs through midnight.
///
/// # Example
///
/// ```
/// use assembly_cost_engine::models::{BreakDuration, DayInput, StaffCounts};
/// use chrono::{NaiveDate, Weekday};
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
/// assert_eq!(day.weekday(), Weekday::Tue);
/// assert_eq!(day.shift_label(), "08:00 - 17:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayInput {
    /// The calendar date of the day.
    pub date: NaiveDate,
    /// Whether the date is a public holiday in the configured region.
    pub is_holiday: bool,
    /// Shift start hour (0-23).
    pub shift_start: u8,
    /// Shift end hour (0-23).
    pub shift_end: u8,
    /// Break deducted from the shift.
    pub break_duration: BreakDuration,
    /// Headcount per role.
    pub staff: StaffCounts,
    /// Kilometers driven on this day.
    pub kilometers: u32,
    /// Whether the lodging cost applies.
    pub lodging: bool,
    /// Whether the meal cost applies.
    pub meals: bool,
}

impl DayInput {
    /// Returns the day of the week of the date.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Returns the shift as `HH:00 - HH:00`.
    pub fn shift_label(&self) -> String {
        format!("{:02}:00 - {:02}:00", self.shift_start, self.shift_end)
    }
}

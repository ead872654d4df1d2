//! Worked hours calculation.
//!
//! Shifts are entered as whole start and end hours on a 24-hour clock. An end
//! hour at or before the start hour wraps through midnight, so a shift from
//! 22:00 to 06:00 spans 8 hours.
//!
//! Identical start and end hours are read as a full 24-hour shift, not as an
//! empty one.

use rust_decimal::Decimal;

use crate::models::BreakDuration;

/// Number of hours in a day.
pub const HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Returns the span between the start and end hour, wrapping through midnight.
///
/// # Examples
///
/// ```
/// use assembly_cost_engine::calculation::shift_span;
/// use rust_decimal::Decimal;
///
/// assert_eq!(shift_span(8, 17), Decimal::from(9));
/// assert_eq!(shift_span(22, 6), Decimal::from(8));
/// assert_eq!(shift_span(9, 9), Decimal::from(24));
/// ```
pub fn shift_span(shift_start: u8, shift_end: u8) -> Decimal {
    let start = Decimal::from(shift_start);
    let end = Decimal::from(shift_end);

    if shift_end <= shift_start {
        HOURS_PER_DAY - start + end
    } else {
        end - start
    }
}

/// Returns the shift span minus the break.
///
/// The result is not clipped; callers that need non-negative hours clip it
/// themselves.
///
/// # Example
///
/// ```
/// use assembly_cost_engine::calculation::worked_hours;
/// use assembly_cost_engine::models::BreakDuration;
/// use rust_decimal::Decimal;
///
/// assert_eq!(worked_hours(8, 17, BreakDuration::OneHour), Decimal::from(8));
/// ```
pub fn worked_hours(shift_start: u8, shift_end: u8, break_duration: BreakDuration) -> Decimal {
    shift_span(shift_start, shift_end) - break_duration.hours()
}

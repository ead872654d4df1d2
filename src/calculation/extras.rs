//! Day-level extras: flat rate, lodging and meals.

use rust_decimal::Decimal;

use crate::config::RateConfig;
use crate::models::{DayInput, Extras};

/// Calculates the fixed costs of a day.
///
/// The flat rate is charged on every day when enabled globally; lodging and
/// meals only on days flagged for them. None of these scale with headcount.
///
/// # Example
///
/// ```
/// use assembly_cost_engine::calculation::calculate_extras;
/// use assembly_cost_engine::config::RateConfig;
/// use assembly_cost_engine::models::{BreakDuration, DayInput, StaffCounts};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut rates = RateConfig::default();
/// rates.lodging_cost = Decimal::from(90);
///
/// let day = DayInput {
///     date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
///     is_holiday: false,
///     shift_start: 8,
///     shift_end: 17,
///     break_duration: BreakDuration::None,
///     staff: StaffCounts::default(),
///     kilometers: 0,
///     lodging: true,
///     meals: false,
/// };
///
/// assert_eq!(calculate_extras(&day, &rates).total, Decimal::from(90));
/// ```
pub fn calculate_extras(day: &DayInput, rates: &RateConfig) -> Extras {
    let flat_rate = if rates.flat_rate.enabled {
        rates.flat_rate.amount
    } else {
        Decimal::ZERO
    };
    let lodging = if day.lodging {
        rates.lodging_cost
    } else {
        Decimal::ZERO
    };
    let meals = if day.meals {
        rates.meals_cost
    } else {
        Decimal::ZERO
    };

    Extras {
        flat_rate,
        lodging,
        meals,
        total: flat_rate + lodging + meals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlatRate;
    use crate::models::{BreakDuration, StaffCounts};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn day(lodging: bool, meals: bool) -> DayInput {
        DayInput {
            date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
            is_holiday: false,
            shift_start: 8,
            shift_end: 17,
            break_duration: BreakDuration::None,
            staff: StaffCounts {
                mechanics: 4,
                electricians: 0,
                programmers: 0,
            },
            kilometers: 0,
            lodging,
            meals,
        }
    }

    fn rates(flat_enabled: bool) -> RateConfig {
        RateConfig {
            flat_rate: FlatRate {
                enabled: flat_enabled,
                amount: dec("50"),
            },
            lodging_cost: dec("89.90"),
            meals_cost: dec("28"),
            ..RateConfig::default()
        }
    }

    #[test]
    fn test_no_extras() {
        let extras = calculate_extras(&day(false, false), &rates(false));
        assert_eq!(extras, Extras::default());
    }

    #[test]
    fn test_disabled_flat_rate_is_ignored() {
        let extras = calculate_extras(&day(false, false), &rates(false));
        assert_eq!(extras.flat_rate, dec("0"));
    }

    #[test]
    fn test_all_extras() {
        let extras = calculate_extras(&day(true, true), &rates(true));
        assert_eq!(extras.flat_rate, dec("50"));
        assert_eq!(extras.lodging, dec("89.90"));
        assert_eq!(extras.meals, dec("28"));
        assert_eq!(extras.total, dec("167.90"));
    }

    #[test]
    fn test_extras_do_not_scale_with_headcount() {
        // Four mechanics, still one lodging amount
        let extras = calculate_extras(&day(true, false), &rates(false));
        assert_eq!(extras.total, dec("89.90"));
    }
}

//! Vehicle allocation and travel cost.
//!
//! The crew travels in vehicles of three seats each. Every started vehicle is
//! billed in full for the kilometers driven that day.

use rust_decimal::Decimal;

/// Number of people one vehicle carries.
pub const VEHICLE_CAPACITY: u32 = 3;

/// Returns the number of vehicles needed to carry `headcount` people.
///
/// # Examples
///
/// ```
/// use assembly_cost_engine::calculation::vehicles_needed;
///
/// assert_eq!(vehicles_needed(0), 0);
/// assert_eq!(vehicles_needed(3), 1);
/// assert_eq!(vehicles_needed(4), 2);
/// ```
pub fn vehicles_needed(headcount: u32) -> u32 {
    headcount.div_ceil(VEHICLE_CAPACITY)
}

/// Returns the kilometer cost for all vehicles.
///
/// # Example
///
/// ```
/// use assembly_cost_engine::calculation::calculate_travel_cost;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let cost = calculate_travel_cost(100, Decimal::from_str("1.25").unwrap(), 2);
/// assert_eq!(cost, Decimal::from(250));
/// ```
pub fn calculate_travel_cost(kilometers: u32, price_per_km: Decimal, vehicles: u32) -> Decimal {
    Decimal::from(kilometers) * price_per_km * Decimal::from(vehicles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_nobody_needs_no_vehicle() {
        assert_eq!(vehicles_needed(0), 0);
    }

    #[test]
    fn test_up_to_three_people_share_one_vehicle() {
        for headcount in 1..=3 {
            assert_eq!(vehicles_needed(headcount), 1, "headcount {}", headcount);
        }
    }

    #[test]
    fn test_four_to_six_people_need_two_vehicles() {
        for headcount in 4..=6 {
            assert_eq!(vehicles_needed(headcount), 2, "headcount {}", headcount);
        }
    }

    #[test]
    fn test_seven_people_need_three_vehicles() {
        assert_eq!(vehicles_needed(7), 3);
    }

    #[test]
    fn test_travel_cost_single_vehicle() {
        assert_eq!(calculate_travel_cost(100, dec("1.25"), 1), dec("125"));
    }

    #[test]
    fn test_travel_cost_without_vehicles_is_zero() {
        assert_eq!(calculate_travel_cost(500, dec("1.25"), 0), dec("0"));
    }

    #[test]
    fn test_travel_cost_without_kilometers_is_zero() {
        assert_eq!(calculate_travel_cost(0, dec("1.25"), 3), dec("0"));
    }

    proptest! {
        #[test]
        fn prop_vehicles_carry_everyone(headcount in 0u32..=30) {
            let vehicles = vehicles_needed(headcount);
            prop_assert!(vehicles * VEHICLE_CAPACITY >= headcount);
            if vehicles > 0 {
                // One vehicle fewer would leave someone behind
                prop_assert!((vehicles - 1) * VEHICLE_CAPACITY < headcount);
            }
        }
    }
}

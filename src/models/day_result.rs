//! Daily cost breakdown models.
//!
//! This module contains the [`DayResult`] type and the structures it is made
//! of: the hours per surcharge tier, the surcharge amounts, the labor cost per
//! role and the day-level extras.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DayInput, Role};
use crate::calculation::SurchargeTier;

/// Worked hours split across the surcharge tiers.
///
/// # Example
///
/// ```
/// use assembly_cost_engine::models::TierHours;
/// use rust_decimal::Decimal;
///
/// let hours = TierHours {
///     normal: Decimal::from(8),
///     tier1: Decimal::from(2),
///     tier2: Decimal::from(1),
///     tier3: Decimal::ZERO,
/// };
/// assert_eq!(hours.total(), Decimal::from(11));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierHours {
    /// Hours 0-8 at the base rate.
    pub normal: Decimal,
    /// Hours 8-10 at 125%.
    pub tier1: Decimal,
    /// Hours 10-12 at 150%.
    pub tier2: Decimal,
    /// Hours beyond 12 at 200%.
    pub tier3: Decimal,
}

impl TierHours {
    /// Returns the hours falling into the given tier.
    pub fn get(&self, tier: SurchargeTier) -> Decimal {
        match tier {
            SurchargeTier::Normal => self.normal,
            SurchargeTier::Tier1 => self.tier1,
            SurchargeTier::Tier2 => self.tier2,
            SurchargeTier::Tier3 => self.tier3,
        }
    }

    /// Returns the sum of all tiers.
    pub fn total(&self) -> Decimal {
        self.normal + self.tier1 + self.tier2 + self.tier3
    }

    /// Returns the hours weighted by each tier's multiplier.
    ///
    /// Multiplying this by an hourly rate gives the labor cost of one person.
    pub fn weighted(&self) -> Decimal {
        SurchargeTier::ALL
            .iter()
            .map(|tier| self.get(*tier) * tier.multiplier())
            .sum()
    }
}

/// The surcharge portion of overtime pay, per overtime tier.
///
/// A surcharge is the amount paid on top of the base rate, i.e.
/// `hours × rate × (multiplier - 1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSurcharges {
    /// Surcharge for hours 8-10 (25%).
    pub tier1: Decimal,
    /// Surcharge for hours 10-12 (50%).
    pub tier2: Decimal,
    /// Surcharge for hours beyond 12 (100%).
    pub tier3: Decimal,
}

impl TierSurcharges {
    /// Returns the sum of all surcharges.
    pub fn total(&self) -> Decimal {
        self.tier1 + self.tier2 + self.tier3
    }
}

impl std::ops::Add for TierSurcharges {
    type Output = TierSurcharges;

    fn add(self, other: TierSurcharges) -> TierSurcharges {
        TierSurcharges {
            tier1: self.tier1 + other.tier1,
            tier2: self.tier2 + other.tier2,
            tier3: self.tier3 + other.tier3,
        }
    }
}

/// Labor cost of one role for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleLaborCost {
    /// The role.
    pub role: Role,
    /// Number of people of this role.
    pub headcount: u32,
    /// Hourly base rate of the role.
    pub rate: Decimal,
    /// Labor cost including all surcharges.
    pub amount: Decimal,
    /// Surcharge share of `amount`, per overtime tier.
    pub surcharges: TierSurcharges,
}

/// Day-level fixed costs, independent of hours and headcount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extras {
    /// The daily flat rate, if enabled.
    pub flat_rate: Decimal,
    /// Lodging cost, if flagged for the day.
    pub lodging: Decimal,
    /// Meal cost, if flagged for the day.
    pub meals: Decimal,
    /// Sum of the above.
    pub total: Decimal,
}

/// The cost breakdown of one assembly day.
///
/// Every amount is kept at full precision; rounding happens only when the
/// result is rendered. The originating [`DayInput`] is echoed so that reports
/// can be built from results alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayResult {
    /// The input this result was computed from.
    pub input: DayInput,
    /// Worked hours after the break, never negative.
    pub worked_hours: Decimal,
    /// Worked hours per surcharge tier.
    pub hours: TierHours,
    /// Labor cost per role, in [`Role::ALL`] order.
    pub labor: Vec<RoleLaborCost>,
    /// Labor cost summed over all roles.
    pub labor_cost: Decimal,
    /// Overtime surcharges summed over all roles.
    pub surcharges: TierSurcharges,
    /// Number of vehicles needed to carry the crew.
    pub vehicles: u32,
    /// Kilometer cost for all vehicles.
    pub travel_cost: Decimal,
    /// Flat rate, lodging and meals.
    pub extras: Extras,
    /// `labor_cost + travel_cost + extras.total`.
    pub day_total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_tier_hours_get() {
        let hours = TierHours {
            normal: dec("8"),
            tier1: dec("2"),
            tier2: dec("1.5"),
            tier3: dec("0"),
        };
        assert_eq!(hours.get(SurchargeTier::Normal), dec("8"));
        assert_eq!(hours.get(SurchargeTier::Tier1), dec("2"));
        assert_eq!(hours.get(SurchargeTier::Tier2), dec("1.5"));
        assert_eq!(hours.get(SurchargeTier::Tier3), dec("0"));
    }

    #[test]
    fn test_tier_hours_weighted() {
        // 8×1 + 2×1.25 + 2×1.5 + 1×2 = 15.5
        let hours = TierHours {
            normal: dec("8"),
            tier1: dec("2"),
            tier2: dec("2"),
            tier3: dec("1"),
        };
        assert_eq!(hours.weighted(), dec("15.5"));
    }

    #[test]
    fn test_surcharges_add() {
        let a = TierSurcharges {
            tier1: dec("10"),
            tier2: dec("0"),
            tier3: dec("5"),
        };
        let b = TierSurcharges {
            tier1: dec("2.5"),
            tier2: dec("1"),
            tier3: dec("0"),
        };
        let sum = a + b;
        assert_eq!(sum.tier1, dec("12.5"));
        assert_eq!(sum.tier2, dec("1"));
        assert_eq!(sum.tier3, dec("5"));
        assert_eq!(sum.total(), dec("18.5"));
    }

    #[test]
    fn test_tier_hours_serialize_as_strings() {
        let hours = TierHours {
            normal: dec("8"),
            tier1: dec("0.5"),
            tier2: Decimal::ZERO,
            tier3: Decimal::ZERO,
        };
        let json = serde_json::to_string(&hours).unwrap();
        assert!(json.contains("\"normal\":\"8\""));
        assert!(json.contains("\"tier1\":\"0.5\""));
    }
}

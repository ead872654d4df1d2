//! Overtime tier decomposition.
//!
//! Worked hours are split into four consecutive bands, each paid at its own
//! multiplier of the hourly base rate:
//!
//! | Tier   | Hours      | Multiplier |
//! |--------|------------|------------|
//! | Normal | 0 - 8      | 100%       |
//! | Tier 1 | 8 - 10     | 125%       |
//! | Tier 2 | 10 - 12    | 150%       |
//! | Tier 3 | beyond 12  | 200%       |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TierHours;

/// Hours paid at the base rate before overtime starts.
pub const NORMAL_HOURS_LIMIT: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Upper bound of the 125% band.
pub const TIER_1_LIMIT: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Upper bound of the 150% band.
pub const TIER_2_LIMIT: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Multiplier for hours 8 - 10.
pub const TIER_1_MULTIPLIER: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// Multiplier for hours 10 - 12.
pub const TIER_2_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Multiplier for hours beyond 12.
pub const TIER_3_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// A band of worked hours with a fixed rate multiplier.
///
/// # Example
///
/// ```
/// use assembly_cost_engine::calculation::SurchargeTier;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(SurchargeTier::Tier1.multiplier(), Decimal::from_str("1.25").unwrap());
/// assert_eq!(SurchargeTier::Tier1.surcharge_rate(), Decimal::from_str("0.25").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurchargeTier {
    /// Hours 0 - 8 at 100%.
    Normal,
    /// Hours 8 - 10 at 125%.
    Tier1,
    /// Hours 10 - 12 at 150%.
    Tier2,
    /// Hours beyond 12 at 200%.
    Tier3,
}

impl SurchargeTier {
    /// Every tier, lowest band first.
    pub const ALL: [SurchargeTier; 4] = [
        SurchargeTier::Normal,
        SurchargeTier::Tier1,
        SurchargeTier::Tier2,
        SurchargeTier::Tier3,
    ];

    /// The overtime tiers, i.e. every tier that carries a surcharge.
    pub const OVERTIME: [SurchargeTier; 3] = [
        SurchargeTier::Tier1,
        SurchargeTier::Tier2,
        SurchargeTier::Tier3,
    ];

    /// Returns the factor applied to the hourly base rate.
    pub fn multiplier(self) -> Decimal {
        match self {
            SurchargeTier::Normal => Decimal::ONE,
            SurchargeTier::Tier1 => TIER_1_MULTIPLIER,
            SurchargeTier::Tier2 => TIER_2_MULTIPLIER,
            SurchargeTier::Tier3 => TIER_3_MULTIPLIER,
        }
    }

    /// Returns the share of the base rate paid on top of it.
    pub fn surcharge_rate(self) -> Decimal {
        self.multiplier() - Decimal::ONE
    }
}

impl std::fmt::Display for SurchargeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurchargeTier::Normal => write!(f, "normal"),
            SurchargeTier::Tier1 => write!(f, "25%"),
            SurchargeTier::Tier2 => write!(f, "50%"),
            SurchargeTier::Tier3 => write!(f, "100%"),
        }
    }
}

fn clamp(hours: Decimal, low: Decimal, high: Decimal) -> Decimal {
    hours.min(high).max(low)
}

/// Splits worked hours into the four surcharge tiers.
///
/// Each tier is clipped to its own band and is never negative, so worked
/// hours at or below zero yield zero in every tier.
///
/// # Examples
///
/// ```
/// use assembly_cost_engine::calculation::split_into_tiers;
/// use rust_decimal::Decimal;
///
/// let hours = split_into_tiers(Decimal::from(13));
/// assert_eq!(hours.normal, Decimal::from(8));
/// assert_eq!(hours.tier1, Decimal::from(2));
/// assert_eq!(hours.tier2, Decimal::from(2));
/// assert_eq!(hours.tier3, Decimal::from(1));
/// ```
pub fn split_into_tiers(worked_hours: Decimal) -> TierHours {
    let band_1 = TIER_1_LIMIT - NORMAL_HOURS_LIMIT;
    let band_2 = TIER_2_LIMIT - TIER_1_LIMIT;

    TierHours {
        normal: clamp(worked_hours, Decimal::ZERO, NORMAL_HOURS_LIMIT),
        tier1: clamp(worked_hours - NORMAL_HOURS_LIMIT, Decimal::ZERO, band_1),
        tier2: clamp(worked_hours - TIER_1_LIMIT, Decimal::ZERO, band_2),
        tier3: (worked_hours - TIER_2_LIMIT).max(Decimal::ZERO),
    }
}

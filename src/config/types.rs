//! Configuration types for cost estimation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::holiday::GermanState;
use crate::models::{BreakDuration, Role};

/// Hourly base rate per role, in euros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRates {
    /// Hourly rate for mechanics.
    pub mechanic: Decimal,
    /// Hourly rate for electricians.
    pub electrician: Decimal,
    /// Hourly rate for programmers.
    pub programmer: Decimal,
}

impl RoleRates {
    /// Returns the hourly rate for the given role.
    pub fn rate(&self, role: Role) -> Decimal {
        match role {
            Role::Mechanic => self.mechanic,
            Role::Electrician => self.electrician,
            Role::Programmer => self.programmer,
        }
    }
}

/// The optional flat rate charged once per day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRate {
    /// Whether the flat rate is charged at all.
    #[serde(default)]
    pub enabled: bool,
    /// Amount charged per day when enabled.
    #[serde(default)]
    pub amount: Decimal,
}

/// Rates applied to every day of an estimate.
///
/// A `RateConfig` is built once per session and passed by reference into
/// each daily calculation.
///
/// # Example
///
/// ```
/// use assembly_cost_engine::config::RateConfig;
/// use assembly_cost_engine::models::Role;
/// use rust_decimal::Decimal;
///
/// let rates = RateConfig::default();
/// assert_eq!(rates.hourly_rates.rate(Role::Mechanic), Decimal::from(70));
/// assert!(!rates.flat_rate.enabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Hourly base rate per role.
    pub hourly_rates: RoleRates,
    /// Price per kilometer and vehicle.
    pub price_per_km: Decimal,
    /// Daily flat rate.
    #[serde(default)]
    pub flat_rate: FlatRate,
    /// Lodging cost for days flagged with lodging.
    #[serde(default)]
    pub lodging_cost: Decimal,
    /// Meal cost for days flagged with meals.
    #[serde(default)]
    pub meals_cost: Decimal,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            hourly_rates: RoleRates {
                mechanic: Decimal::from(70),
                electrician: Decimal::from(75),
                programmer: Decimal::from(100),
            },
            price_per_km: Decimal::new(125, 2),
            flat_rate: FlatRate::default(),
            lodging_cost: Decimal::ZERO,
            meals_cost: Decimal::ZERO,
        }
    }
}

impl RateConfig {
    /// Checks that every rate and cost lies between zero and its limit.
    ///
    /// Within these bounds no daily calculation can overflow.
    pub fn validate(&self, limits: &InputLimits) -> EngineResult<()> {
        let amounts = [
            ("hourly_rates.mechanic", self.hourly_rates.mechanic, limits.max_hourly_rate),
            ("hourly_rates.electrician", self.hourly_rates.electrician, limits.max_hourly_rate),
            ("hourly_rates.programmer", self.hourly_rates.programmer, limits.max_hourly_rate),
            ("price_per_km", self.price_per_km, limits.max_price_per_km),
            ("flat_rate.amount", self.flat_rate.amount, limits.max_extra_cost),
            ("lodging_cost", self.lodging_cost, limits.max_extra_cost),
            ("meals_cost", self.meals_cost, limits.max_extra_cost),
        ];

        for (field, amount, max) in amounts {
            if amount < Decimal::ZERO {
                return Err(EngineError::InvalidInput {
                    field: format!("rates.{}", field),
                    message: format!("must not be negative, got {}", amount),
                });
            }
            if amount > max {
                return Err(EngineError::InvalidInput {
                    field: format!("rates.{}", field),
                    message: format!("must not exceed {}, got {}", max, amount),
                });
            }
        }

        Ok(())
    }
}

/// Checks that an hour of day lies in `0..=23`.
pub(crate) fn check_hour(field: impl Into<String>, hour: u8) -> EngineResult<()> {
    if hour > 23 {
        return Err(EngineError::InvalidInput {
            field: field.into(),
            message: format!("hour must be between 0 and 23, got {}", hour),
        });
    }
    Ok(())
}

/// Upper bounds for request values and rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// Maximum number of days in one estimate.
    pub max_days: u32,
    /// Maximum headcount per role and day.
    pub max_headcount: u32,
    /// Maximum kilometers per day.
    pub max_kilometers: u32,
    /// Maximum hourly rate of any role.
    pub max_hourly_rate: Decimal,
    /// Maximum price per kilometer.
    pub max_price_per_km: Decimal,
    /// Maximum flat rate, lodging or meal cost.
    pub max_extra_cost: Decimal,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_days: 14,
            max_headcount: 10,
            max_kilometers: 2000,
            max_hourly_rate: Decimal::from(1000),
            max_price_per_km: Decimal::from(50),
            max_extra_cost: Decimal::from(10000),
        }
    }
}

/// Defaults used when an estimate request leaves a value open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateDefaults {
    /// Holiday region code (e.g., "BW").
    pub region: String,
    /// Default shift start hour.
    pub shift_start: u8,
    /// Default shift end hour.
    pub shift_end: u8,
    /// Default break for all days.
    #[serde(default)]
    pub break_duration: BreakDuration,
    /// Request limits.
    #[serde(default)]
    pub limits: InputLimits,
}

impl Default for EstimateDefaults {
    fn default() -> Self {
        Self {
            region: "BW".to_string(),
            shift_start: 8,
            shift_end: 17,
            break_duration: BreakDuration::None,
            limits: InputLimits::default(),
        }
    }
}

impl EstimateDefaults {
    /// Checks the default region code and shift hours.
    pub fn validate(&self) -> EngineResult<()> {
        self.region.parse::<GermanState>()?;
        check_hour("shift_start", self.shift_start)?;
        check_hour("shift_end", self.shift_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_rates() {
        let rates = RateConfig::default();
        assert_eq!(rates.hourly_rates.rate(Role::Mechanic), dec("70"));
        assert_eq!(rates.hourly_rates.rate(Role::Electrician), dec("75"));
        assert_eq!(rates.hourly_rates.rate(Role::Programmer), dec("100"));
        assert_eq!(rates.price_per_km, dec("1.25"));
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(RateConfig::default().validate(&InputLimits::default()).is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let mut rates = RateConfig::default();
        rates.price_per_km = dec("-0.10");

        match rates.validate(&InputLimits::default()) {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "rates.price_per_km");
            }
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_rate_above_limit() {
        let mut rates = RateConfig::default();
        rates.hourly_rates.mechanic = Decimal::MAX;

        match rates.validate(&InputLimits::default()) {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "rates.hourly_rates.mechanic");
            }
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_rates_at_limit() {
        let limits = InputLimits::default();
        let mut rates = RateConfig::default();
        rates.hourly_rates.programmer = limits.max_hourly_rate;
        rates.price_per_km = limits.max_price_per_km;
        rates.lodging_cost = limits.max_extra_cost;

        assert!(rates.validate(&limits).is_ok());
    }

    #[test]
    fn test_validate_rejects_extra_cost_above_limit() {
        let mut rates = RateConfig::default();
        rates.meals_cost = dec("10000.01");

        match rates.validate(&InputLimits::default()) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "rates.meals_cost"),
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_validate() {
        assert!(EstimateDefaults::default().validate().is_ok());

        let mut defaults = EstimateDefaults::default();
        defaults.region = "BX".to_string();
        assert!(matches!(defaults.validate(), Err(EngineError::UnknownRegion { .. })));

        let mut defaults = EstimateDefaults::default();
        defaults.shift_end = 24;
        match defaults.validate() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "shift_end"),
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_limits_use_defaults() {
        let limits: InputLimits = serde_yaml::from_str("max_days: 5").unwrap();
        assert_eq!(limits.max_days, 5);
        assert_eq!(limits.max_hourly_rate, Decimal::from(1000));
    }

    #[test]
    fn test_rate_config_deserializes_with_optional_extras() {
        let yaml = r#"
hourly_rates:
  mechanic: "65.00"
  electrician: "72.50"
  programmer: "95.00"
price_per_km: "1.10"
"#;
        let rates: RateConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rates.hourly_rates.electrician, dec("72.50"));
        assert!(!rates.flat_rate.enabled);
        assert_eq!(rates.lodging_cost, Decimal::ZERO);
    }

    #[test]
    fn test_default_limits() {
        let limits = InputLimits::default();
        assert_eq!(limits.max_days, 14);
        assert_eq!(limits.max_headcount, 10);
        assert_eq!(limits.max_kilometers, 2000);
    }
}

//! Estimate-level models.
//!
//! This module contains [`ProjectInfo`], the [`CostSummary`] produced by
//! aggregating daily results, and the complete [`Estimate`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DayResult;

/// Customer and job details printed alongside an estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Customer name.
    #[serde(default)]
    pub customer: String,
    /// Project name.
    #[serde(default)]
    pub project: String,
    /// Order number.
    #[serde(default)]
    pub order_number: String,
    /// Assembly site.
    #[serde(default)]
    pub site: String,
}

/// Totals over all days of an estimate.
///
/// # Example
///
/// ```
/// use assembly_cost_engine::models::CostTotals;
/// use rust_decimal::Decimal;
///
/// let totals = CostTotals::default();
/// assert_eq!(totals.grand_total, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostTotals {
    /// Sum of all day totals.
    pub grand_total: Decimal,
    /// Sum of all labor costs.
    pub labor_cost: Decimal,
    /// Sum of all overtime surcharges.
    pub surcharges: Decimal,
    /// Sum of all travel costs.
    pub travel_cost: Decimal,
    /// Sum of all extras.
    pub extras: Decimal,
    /// Sum of normal hours.
    pub normal_hours: Decimal,
    /// Sum of hours in any overtime tier.
    pub overtime_hours: Decimal,
    /// Sum of vehicles over all days.
    pub vehicle_days: u32,
}

/// The ordered daily results and their totals.
///
/// `days` is exactly the sequence that was aggregated, in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Daily results in chronological (input) order.
    pub days: Vec<DayResult>,
    /// Totals over `days`.
    pub totals: CostTotals,
}

impl CostSummary {
    /// Returns the grand total.
    pub fn total(&self) -> Decimal {
        self.totals.grand_total
    }
}

/// A complete cost estimate for an assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    /// Customer and job details.
    pub project: ProjectInfo,
    /// Holiday region the days were checked against.
    pub region: String,
    /// Daily results and totals.
    #[serde(flatten)]
    pub summary: CostSummary,
}

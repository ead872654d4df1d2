//! Public holiday model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A public holiday in a region.
///
/// # Example
///
/// ```
/// use assembly_cost_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 6).unwrap(),
///     name: "Epiphany".to_string(),
///     region: "BW".to_string(),
/// };
/// assert_eq!(holiday.region, "BW");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g., "Whit Monday").
    pub name: String,
    /// The region code the holiday was looked up for (e.g., "BW").
    pub region: String,
}

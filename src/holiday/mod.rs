//! Public holiday lookup.
//!
//! Holiday status is informational: it is shown next to each day of an
//! estimate but never changes the calculated cost. The calculation only sees
//! the boolean that a [`HolidayOracle`] reports for the date.

mod easter;
mod german;

use chrono::NaiveDate;

use crate::error::EngineResult;

pub use easter::easter_sunday;
pub use german::{GermanHolidayCalendar, GermanState};

/// Answers whether a date is a public holiday in a region.
pub trait HolidayOracle {
    /// Returns the name of the holiday on `date` in `region`, if any.
    ///
    /// Fails with [`EngineError::UnknownRegion`](crate::error::EngineError::UnknownRegion)
    /// when the region code is not recognised.
    fn holiday_name(&self, date: NaiveDate, region: &str) -> EngineResult<Option<String>>;

    /// Returns whether `date` is a public holiday in `region`.
    fn is_holiday(&self, date: NaiveDate, region: &str) -> EngineResult<bool> {
        Ok(self.holiday_name(date, region)?.is_some())
    }
}

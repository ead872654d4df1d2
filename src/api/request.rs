//! Request types for the Assembly Cost Engine API.
//!
//! This module defines the JSON request structure shared by the `/estimate`
//! and `/estimate/xlsx` endpoints, and turns it into validated [`DayInput`]s.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::{check_hour, ConfigLoader, RateConfig};
use crate::error::{EngineError, EngineResult};
use crate::holiday::HolidayOracle;
use crate::models::{BreakDuration, DayInput, ProjectInfo, StaffCounts};

/// Request body for the estimate endpoints.
///
/// Everything except `start_date` and `days` is optional and falls back to
/// the loaded configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Customer and job details.
    #[serde(default)]
    pub project: ProjectInfo,
    /// Holiday region code, e.g. `BW`.
    #[serde(default)]
    pub region: Option<String>,
    /// Date of the first day.
    pub start_date: NaiveDate,
    /// Shift start hour for days that do not set their own.
    #[serde(default)]
    pub shift_start: Option<u8>,
    /// Shift end hour for days that do not set their own.
    #[serde(default)]
    pub shift_end: Option<u8>,
    /// Break deducted on every day.
    #[serde(default)]
    pub break_duration: Option<BreakDuration>,
    /// Rates replacing the configured ones for this request.
    #[serde(default)]
    pub rates: Option<RateConfig>,
    /// The planned days, in order.
    pub days: Vec<DayRequest>,
}

/// A single day in an estimate request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayRequest {
    /// Calendar date; defaults to `start_date` plus the day's index.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Shift start hour override.
    #[serde(default)]
    pub shift_start: Option<u8>,
    /// Shift end hour override.
    #[serde(default)]
    pub shift_end: Option<u8>,
    /// Number of mechanics.
    #[serde(default)]
    pub mechanics: u32,
    /// Number of electricians.
    #[serde(default)]
    pub electricians: u32,
    /// Number of programmers.
    #[serde(default)]
    pub programmers: u32,
    /// Kilometers driven.
    #[serde(default)]
    pub kilometers: u32,
    /// Whether lodging is needed.
    #[serde(default)]
    pub lodging: bool,
    /// Whether meals are provided.
    #[serde(default)]
    pub meals: bool,
}

/// A validated request, ready for calculation.
#[derive(Debug, Clone)]
pub struct PlannedEstimate {
    /// Customer and job details.
    pub project: ProjectInfo,
    /// Holiday region code the days were checked against.
    pub region: String,
    /// Fully resolved days.
    pub days: Vec<DayInput>,
    /// Rates for every day.
    pub rates: RateConfig,
}

fn invalid(field: impl Into<String>, message: impl Into<String>) -> EngineError {
    EngineError::InvalidInput {
        field: field.into(),
        message: message.into(),
    }
}

fn check_max(field: impl Into<String>, value: u32, max: u32) -> EngineResult<()> {
    if value > max {
        return Err(invalid(field, format!("must not exceed {}, got {}", max, value)));
    }
    Ok(())
}

impl EstimateRequest {
    /// Validates the request and resolves defaults, dates and holiday flags.
    ///
    /// Returns [`EngineError::InvalidInput`] for out-of-range values and
    /// [`EngineError::UnknownRegion`] for an unrecognised region code.
    pub fn plan(
        self,
        config: &ConfigLoader,
        oracle: &dyn HolidayOracle,
    ) -> EngineResult<PlannedEstimate> {
        let defaults = config.defaults();
        let limits = defaults.limits;

        if self.days.is_empty() {
            return Err(invalid("days", "at least one day is required"));
        }
        if self.days.len() > limits.max_days as usize {
            return Err(invalid(
                "days",
                format!("at most {} days are allowed, got {}", limits.max_days, self.days.len()),
            ));
        }

        let shift_start = self.shift_start.unwrap_or(defaults.shift_start);
        let shift_end = self.shift_end.unwrap_or(defaults.shift_end);
        check_hour("shift_start", shift_start)?;
        check_hour("shift_end", shift_end)?;

        let break_duration = self.break_duration.unwrap_or(defaults.break_duration);
        let rates = self.rates.unwrap_or(*config.rates());
        rates.validate(&limits)?;

        let region = self.region.unwrap_or_else(|| defaults.region.clone());

        let mut days = Vec::with_capacity(self.days.len());
        for (index, day) in self.days.into_iter().enumerate() {
            let field = |name: &str| format!("days[{}].{}", index, name);

            let date = match day.date {
                Some(date) => date,
                None => self
                    .start_date
                    .checked_add_days(Days::new(index as u64))
                    .ok_or_else(|| invalid(field("date"), "date is out of range"))?,
            };

            let day_start = day.shift_start.unwrap_or(shift_start);
            let day_end = day.shift_end.unwrap_or(shift_end);
            check_hour(field("shift_start"), day_start)?;
            check_hour(field("shift_end"), day_end)?;

            check_max(field("mechanics"), day.mechanics, limits.max_headcount)?;
            check_max(field("electricians"), day.electricians, limits.max_headcount)?;
            check_max(field("programmers"), day.programmers, limits.max_headcount)?;
            check_max(field("kilometers"), day.kilometers, limits.max_kilometers)?;

            days.push(DayInput {
                date,
                is_holiday: oracle.is_holiday(date, &region)?,
                shift_start: day_start,
                shift_end: day_end,
                break_duration,
                staff: StaffCounts {
                    mechanics: day.mechanics,
                    electricians: day.electricians,
                    programmers: day.programmers,
                },
                kilometers: day.kilometers,
                lodging: day.lodging,
                meals: day.meals,
            });
        }

        Ok(PlannedEstimate {
            project: self.project,
            region,
            days,
            rates,
        })
    }
}

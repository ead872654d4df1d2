//! Application state for the Assembly Cost Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::holiday::GermanHolidayCalendar;

/// Shared application state.
///
/// Holds the loaded rate and estimate configuration and the holiday
/// calendar. Nothing in it changes after startup.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    calendar: GermanHolidayCalendar,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            calendar: GermanHolidayCalendar,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the holiday calendar.
    pub fn calendar(&self) -> &GermanHolidayCalendar {
        &self.calendar
    }
}

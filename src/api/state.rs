//! Application state for the Attendance Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::clock::{Clock, SystemClock};
use crate::config::CalendarLoader;

/// Shared application state.
///
/// Holds the loaded school calendar and the clock that supplies "today" for
/// future-date clamping.
#[derive(Clone)]
pub struct AppState {
    /// The loaded school calendar.
    calendar: Arc<CalendarLoader>,
    /// Source of today's date.
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new application state reading the system clock.
    pub fn new(calendar: CalendarLoader) -> Self {
        Self::with_clock(calendar, SystemClock)
    }

    /// Creates a new application state with an explicit clock.
    pub fn with_clock(calendar: CalendarLoader, clock: impl Clock + 'static) -> Self {
        Self {
            calendar: Arc::new(calendar),
            clock: Arc::new(clock),
        }
    }

    /// Returns a reference to the calendar loader.
    pub fn calendar(&self) -> &CalendarLoader {
        &self.calendar
    }

    /// Returns today's date according to the configured clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

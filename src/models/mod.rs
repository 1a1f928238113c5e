//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calendar_rules;
mod date_range;
mod summary;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use calendar_rules::{CalendarRules, DAY_KEY_FORMAT, day_key, is_canonical_day_key};
pub use date_range::DateRange;
pub use summary::{AttendanceSummary, WorkingDayBreakdown};

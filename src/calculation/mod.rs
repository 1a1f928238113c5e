//! Calculation logic for the Attendance Engine.
//!
//! This module contains the day classification rules, working-day counting
//! with future-date clamping, attendance percentage calculation and the
//! per-student attendance summary.

mod attendance_percentage;
mod attendance_summary;
mod day_classification;
mod working_days;

pub use attendance_percentage::{
    MAX_ATTENDANCE_PERCENTAGE, attendance_percentage_value, calculate_attendance_percentage,
    calculate_attendance_percentage_strict,
};
pub use attendance_summary::summarize_attendance;
pub use day_classification::{DayClassification, DayType, classify_day, get_day_type};
pub use working_days::{calculate_working_day_breakdown, calculate_working_days};

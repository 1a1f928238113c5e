//! Result models for working-day and attendance calculations.
//!
//! This module contains the [`WorkingDayBreakdown`] produced for a single
//! range evaluation and the [`AttendanceSummary`] built on top of it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-rule counts for one working-day evaluation.
///
/// Every enumerated day lands in exactly one bucket, so
/// `working_days + holiday_days + announcement_holiday_days + weekend_days`
/// always equals `total_days`. Special working days are included in
/// `working_days` and also reported on their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDayBreakdown {
    /// The requested first day.
    pub start_date: NaiveDate,
    /// The requested last day.
    pub requested_end_date: NaiveDate,
    /// The last day actually evaluated after clamping to today.
    pub effective_end_date: NaiveDate,
    /// Whether the requested end was pulled back to today.
    pub clamped: bool,
    /// Number of days enumerated.
    pub total_days: u32,
    /// Number of days counted as working.
    pub working_days: u32,
    /// Working days that were forced by a special override.
    pub special_working_days: u32,
    /// Days excluded by the holiday calendar.
    pub holiday_days: u32,
    /// Days excluded only by an announcement.
    pub announcement_holiday_days: u32,
    /// Days excluded as weekends.
    pub weekend_days: u32,
}

impl WorkingDayBreakdown {
    /// Creates a breakdown with every count at zero.
    pub fn empty(
        start_date: NaiveDate,
        requested_end_date: NaiveDate,
        effective_end_date: NaiveDate,
        clamped: bool,
    ) -> Self {
        Self {
            start_date,
            requested_end_date,
            effective_end_date,
            clamped,
            total_days: 0,
            working_days: 0,
            special_working_days: 0,
            holiday_days: 0,
            announcement_holiday_days: 0,
            weekend_days: 0,
        }
    }

    /// Returns the number of days excluded by any rule.
    pub fn excluded_days(&self) -> u32 {
        self.holiday_days + self.announcement_holiday_days + self.weekend_days
    }
}

/// A student's attendance over a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// The student the records belong to.
    pub student_id: String,
    /// Distinct dates marked present or late.
    pub present_days: u32,
    /// Distinct dates marked only absent.
    pub absent_days: u32,
    /// Distinct dates marked only excused.
    pub excused_days: u32,
    /// Working days in the evaluated range.
    pub working_days: u32,
    /// The display percentage, e.g. `"87%"`.
    pub percentage: String,
    /// How the working-day count was reached.
    pub breakdown: WorkingDayBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_breakdown_has_no_days() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        let breakdown = WorkingDayBreakdown::empty(start, end, end, false);
        assert_eq!(breakdown.total_days, 0);
        assert_eq!(breakdown.working_days, 0);
        assert_eq!(breakdown.excluded_days(), 0);
    }

    #[test]
    fn test_breakdown_serialization_uses_snake_case() {
        let day = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        let breakdown = WorkingDayBreakdown::empty(day, day, day, true);
        let json = serde_json::to_string(&breakdown).unwrap();
        assert!(json.contains("\"effective_end_date\":\"2026-01-12\""));
        assert!(json.contains("\"announcement_holiday_days\":0"));
        assert!(json.contains("\"clamped\":true"));
    }
}

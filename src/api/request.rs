//! Request types for the Attendance Engine API.
//!
//! This module defines the JSON request structures for the calculation
//! endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus, CalendarRules, DateRange};

/// Longest span, in days, a single request may enumerate (twenty years).
pub const MAX_RANGE_DAYS: i64 = 366 * 20;

/// A date supplied either as `YYYY-MM-DD` or as a datetime.
///
/// Dashboard pages often send timestamps; only the calendar day is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    /// A plain calendar date.
    Date(NaiveDate),
    /// A datetime whose time of day is ignored.
    DateTime(NaiveDateTime),
}

impl DateInput {
    /// Returns the calendar day.
    pub fn date(self) -> NaiveDate {
        match self {
            DateInput::Date(date) => date,
            DateInput::DateTime(datetime) => datetime.date(),
        }
    }
}

/// Builds the requested range and checks the part that would be enumerated.
///
/// Only the days up to `today` are walked, so a range ending in the future is
/// measured from its start to `today`. Empty ranges always pass.
///
/// # Errors
///
/// Returns [`EngineError::RangeTooLong`] if more than [`MAX_RANGE_DAYS`] days
/// would be enumerated.
pub fn bounded_range(
    start: DateInput,
    end: DateInput,
    today: NaiveDate,
) -> EngineResult<DateRange> {
    let range = DateRange::new(start.date(), end.date());
    let effective = range.clamp_to(today);
    if effective.is_empty() {
        return Ok(range);
    }

    let days = (effective.end - effective.start).num_days() + 1;
    if days > MAX_RANGE_DAYS {
        return Err(EngineError::RangeTooLong {
            days,
            max: MAX_RANGE_DAYS,
        });
    }

    Ok(range)
}

fn default_use_school_calendar() -> bool {
    true
}

/// Calendar fields shared by the range-based requests.
///
/// Lists are merged onto the loaded school calendar unless
/// `use_school_calendar` is `false`, in which case they are used alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarRequest {
    /// Extra holiday day keys.
    #[serde(default)]
    pub holidays: Vec<String>,
    /// Extra announcement-holiday day keys.
    #[serde(default)]
    pub announcement_holidays: Vec<String>,
    /// Extra special working day keys.
    #[serde(default)]
    pub special_dates: Vec<String>,
    /// Overrides the weekend policy when present.
    #[serde(default)]
    pub exclude_weekends: Option<bool>,
    /// Whether to start from the loaded school calendar.
    #[serde(default = "default_use_school_calendar")]
    pub use_school_calendar: bool,
    /// Reject day keys that are not `YYYY-MM-DD`.
    #[serde(default)]
    pub strict: bool,
}

impl CalendarRequest {
    /// Builds the calendar rules for this request.
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`EngineError::InvalidDate`](crate::error::EngineError::InvalidDate)
    /// if any resulting set entry is not a canonical day key.
    pub fn resolve(&self, school: &CalendarRules) -> EngineResult<CalendarRules> {
        let mut rules = if self.use_school_calendar {
            school.clone()
        } else {
            CalendarRules::new()
        };

        rules.extend_holidays(self.holidays.iter().cloned());
        rules.extend_announcement_holidays(self.announcement_holidays.iter().cloned());
        rules.extend_special_dates(self.special_dates.iter().cloned());
        if let Some(exclude_weekends) = self.exclude_weekends {
            rules.exclude_weekends = exclude_weekends;
        }

        if self.strict {
            rules.validate()?;
        }

        Ok(rules)
    }
}

/// Request body for the `/working-days` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDaysRequest {
    /// First day of the range (inclusive).
    pub start_date: DateInput,
    /// Last day of the range (inclusive).
    pub end_date: DateInput,
    /// Calendar rules for the evaluation.
    #[serde(flatten)]
    pub calendar: CalendarRequest,
}

impl WorkingDaysRequest {
    /// Returns the requested range, bounded by [`bounded_range`].
    pub fn range(&self, today: NaiveDate) -> EngineResult<DateRange> {
        bounded_range(self.start_date, self.end_date, today)
    }
}

/// Request body for the `/attendance-percentage` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendancePercentageRequest {
    /// Days attended.
    pub present_count: i64,
    /// Working days in the period.
    pub working_days: i64,
    /// Reject negative counts instead of computing with them.
    #[serde(default)]
    pub strict: bool,
}

/// One attendance mark in a summary request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecordRequest {
    /// The day of the mark.
    pub date: DateInput,
    /// The recorded mark.
    pub status: AttendanceStatus,
}

impl From<AttendanceRecordRequest> for AttendanceRecord {
    fn from(req: AttendanceRecordRequest) -> Self {
        AttendanceRecord {
            date: req.date.date(),
            status: req.status,
        }
    }
}

/// Request body for the `/attendance-summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSummaryRequest {
    /// The student the records belong to.
    pub student_id: String,
    /// First day of the range (inclusive).
    pub start_date: DateInput,
    /// Last day of the range (inclusive).
    pub end_date: DateInput,
    /// The student's attendance marks.
    #[serde(default)]
    pub records: Vec<AttendanceRecordRequest>,
    /// Calendar rules for the evaluation.
    #[serde(flatten)]
    pub calendar: CalendarRequest,
}

impl AttendanceSummaryRequest {
    /// Returns the requested range, bounded by [`bounded_range`].
    pub fn range(&self, today: NaiveDate) -> EngineResult<DateRange> {
        bounded_range(self.start_date, self.end_date, today)
    }
}

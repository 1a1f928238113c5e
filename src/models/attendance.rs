//! Attendance record models.
//!
//! This module contains the [`AttendanceRecord`] and [`AttendanceStatus`] types
//! describing one student's mark for one day, as supplied by the data layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The mark recorded for a student on a given day.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceStatus;
///
/// assert!(AttendanceStatus::Late.is_attended());
/// assert!(!AttendanceStatus::Excused.is_attended());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The student attended.
    Present,
    /// The student attended but arrived late.
    Late,
    /// The student did not attend.
    Absent,
    /// The student did not attend with an accepted reason.
    Excused,
}

impl AttendanceStatus {
    /// Returns `true` if this status counts toward the present-day count.
    pub fn is_attended(self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::Late)
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "present"),
            AttendanceStatus::Late => write!(f, "late"),
            AttendanceStatus::Absent => write!(f, "absent"),
            AttendanceStatus::Excused => write!(f, "excused"),
        }
    }
}

/// One attendance mark for one day.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     status: AttendanceStatus::Present,
/// };
/// assert!(record.status.is_attended());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The day the mark applies to.
    pub date: NaiveDate,
    /// The recorded mark.
    pub status: AttendanceStatus,
}

//! Attendance summary over a range.
//!
//! Combines a student's dated attendance records with the working-day count to
//! produce the figures shown on student and parent dashboards.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{
    AttendanceRecord, AttendanceStatus, AttendanceSummary, CalendarRules, DateRange,
};

use super::{calculate_attendance_percentage, calculate_working_day_breakdown};

/// Ranks statuses so that one mark per date survives.
fn status_rank(status: AttendanceStatus) -> u8 {
    match status {
        s if s.is_attended() => 2,
        AttendanceStatus::Excused => 1,
        _ => 0,
    }
}

/// Summarises a student's attendance over a range.
///
/// # Behavior
///
/// - Working days come from [`calculate_working_day_breakdown`], so the range
///   is clamped to `today` and the calendar rules apply
/// - Only records dated between the range start and the effective end count
/// - Several records for one date collapse to one mark: attended beats
///   excused, and excused beats absent
/// - The percentage is derived from distinct attended dates
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::summarize_attendance;
/// use attendance_engine::models::{AttendanceRecord, AttendanceStatus, CalendarRules, DateRange};
/// use chrono::NaiveDate;
///
/// let date = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let week = DateRange::new(date("2026-01-12"), date("2026-01-18"));
/// let records = vec![
///     AttendanceRecord { date: date("2026-01-12"), status: AttendanceStatus::Present },
///     AttendanceRecord { date: date("2026-01-13"), status: AttendanceStatus::Late },
///     AttendanceRecord { date: date("2026-01-14"), status: AttendanceStatus::Absent },
///     AttendanceRecord { date: date("2026-01-15"), status: AttendanceStatus::Present },
/// ];
///
/// let rules = CalendarRules::new();
/// let summary = summarize_attendance("stu_001", &records, &week, &rules, date("2026-10-15"));
/// assert_eq!(summary.present_days, 3);
/// assert_eq!(summary.working_days, 5);
/// assert_eq!(summary.percentage, "60%");
/// ```
pub fn summarize_attendance(
    student_id: &str,
    records: &[AttendanceRecord],
    range: &DateRange,
    rules: &CalendarRules,
    today: NaiveDate,
) -> AttendanceSummary {
    let breakdown = calculate_working_day_breakdown(range, rules, today);
    let window = DateRange::new(range.start, breakdown.effective_end_date);

    let mut marks: BTreeMap<NaiveDate, AttendanceStatus> = BTreeMap::new();
    for record in records.iter().filter(|r| window.contains_date(r.date)) {
        marks
            .entry(record.date)
            .and_modify(|current| {
                if status_rank(record.status) > status_rank(*current) {
                    *current = record.status;
                }
            })
            .or_insert(record.status);
    }

    let mut present_days = 0;
    let mut absent_days = 0;
    let mut excused_days = 0;
    for status in marks.values() {
        match status {
            s if s.is_attended() => present_days += 1,
            AttendanceStatus::Excused => excused_days += 1,
            _ => absent_days += 1,
        }
    }

    let working_days = breakdown.working_days;
    AttendanceSummary {
        student_id: student_id.to_string(),
        present_days,
        absent_days,
        excused_days,
        working_days,
        percentage: calculate_attendance_percentage(
            i64::from(present_days),
            i64::from(working_days),
        ),
        breakdown,
    }
}

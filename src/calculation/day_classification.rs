//! Day detection and classification logic.
//!
//! This module determines the weekday type of a date and applies the calendar
//! rules, in precedence order, to decide whether a single day is a working day.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{CalendarRules, day_key};

/// The type of day by weekday alone.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayType {
    /// Returns `true` for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, DayType::Saturday | DayType::Sunday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2026-01-12 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// The outcome of applying the calendar rules to one day.
///
/// Variants are listed in rule precedence order; the first rule that matches
/// decides the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClassification {
    /// Forced working by a special override.
    SpecialWorkingDay,
    /// Excluded by the holiday calendar.
    Holiday,
    /// Excluded by an announcement holiday.
    AnnouncementHoliday,
    /// Excluded as a Saturday or Sunday.
    Weekend,
    /// An ordinary working day.
    Working,
}

impl DayClassification {
    /// Returns `true` if the day counts toward working days.
    pub fn is_working(self) -> bool {
        matches!(
            self,
            DayClassification::SpecialWorkingDay | DayClassification::Working
        )
    }
}

/// Classifies a single day against the calendar rules.
///
/// Rules are evaluated in this order, first match wins:
///
/// 1. Special working day: always working, even on a weekend or holiday.
/// 2. Holiday or announcement holiday: excluded. A day in both sets is
///    reported as [`DayClassification::Holiday`].
/// 3. Weekend, when `exclude_weekends` is set: excluded.
/// 4. Otherwise working.
///
/// Membership is exact string equality against the `YYYY-MM-DD` key of `date`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{classify_day, DayClassification};
/// use attendance_engine::models::CalendarRules;
/// use chrono::NaiveDate;
///
/// // 2025-12-28 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2025, 12, 28).unwrap();
///
/// let rules = CalendarRules::new();
/// assert_eq!(classify_day(sunday, &rules), DayClassification::Weekend);
///
/// let rules = rules.with_special_date(sunday);
/// assert_eq!(classify_day(sunday, &rules), DayClassification::SpecialWorkingDay);
/// ```
pub fn classify_day(date: NaiveDate, rules: &CalendarRules) -> DayClassification {
    let key = day_key(date);

    if rules.is_special_date(&key) {
        return DayClassification::SpecialWorkingDay;
    }
    if rules.is_holiday(&key) {
        return DayClassification::Holiday;
    }
    if rules.is_announcement_holiday(&key) {
        return DayClassification::AnnouncementHoliday;
    }
    if rules.exclude_weekends && get_day_type(date).is_weekend() {
        return DayClassification::Weekend;
    }

    DayClassification::Working
}

//! Inclusive date range model.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// An inclusive range of calendar dates.
///
/// A range whose start is after its end is empty; it is not an error.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let term = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
/// );
///
/// assert!(term.contains_date(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()));
/// assert!(!term.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// The first date of the range (inclusive).
    pub start: NaiveDate,
    /// The last date of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Creates a range from datetimes, discarding the time of day.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::DateRange;
    /// use chrono::NaiveDateTime;
    ///
    /// let parse = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
    /// let start = parse("2026-01-12 23:30:00");
    /// let end = parse("2026-01-12 00:15:00");
    ///
    /// // Same calendar day, so the range holds exactly one day.
    /// let range = DateRange::from_datetimes(start, end);
    /// assert_eq!(range.start, range.end);
    /// ```
    pub fn from_datetimes(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::new(start.date(), end.date())
    }

    /// Returns `true` if the range holds no days.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Checks if a date falls within the range, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns the range with its end clamped to `today`.
    ///
    /// The result may be empty if the whole range lies after `today`.
    pub fn clamp_to(&self, today: NaiveDate) -> Self {
        Self::new(self.start, self.end.min(today))
    }

    /// Iterates over every day in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

//! Calendar exception rules used by the working-day calculation.
//!
//! This module contains the [`CalendarRules`] type bundling the holiday,
//! announcement-holiday and special-working-day sets with the weekend policy,
//! and the canonical day key used for all set membership tests.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The `chrono` format string for canonical day keys (`YYYY-MM-DD`).
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Returns the canonical day key for a date.
///
/// # Example
///
/// ```
/// use attendance_engine::models::day_key;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// assert_eq!(day_key(date), "2026-01-05");
/// ```
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Checks whether a string is a canonical day key.
///
/// A value is canonical only if it parses as a date and formats back to the
/// exact same string, so `"2026-1-5"` and `" 2026-01-05"` are rejected.
///
/// # Example
///
/// ```
/// use attendance_engine::models::is_canonical_day_key;
///
/// assert!(is_canonical_day_key("2026-01-05"));
/// assert!(!is_canonical_day_key("2026-1-5"));
/// assert!(!is_canonical_day_key("05/01/2026"));
/// ```
pub fn is_canonical_day_key(value: &str) -> bool {
    NaiveDate::parse_from_str(value, DAY_KEY_FORMAT)
        .map(|date| day_key(date) == value)
        .unwrap_or(false)
}

fn default_exclude_weekends() -> bool {
    true
}

/// The calendar rules evaluated for every day in a range.
///
/// Set entries are stored verbatim as day-key strings. Entries that are not
/// canonical are kept but can never match an enumerated day.
///
/// # Example
///
/// ```
/// use attendance_engine::models::CalendarRules;
/// use chrono::NaiveDate;
///
/// let rules = CalendarRules::new()
///     .with_holiday(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap())
///     .with_special_date(NaiveDate::from_ymd_opt(2025, 12, 28).unwrap());
///
/// assert!(rules.exclude_weekends);
/// assert!(rules.is_holiday("2025-12-25"));
/// assert!(rules.is_special_date("2025-12-28"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRules {
    /// Calendar-declared holidays.
    #[serde(default)]
    pub holidays: BTreeSet<String>,
    /// Whether Saturdays and Sundays are excluded.
    #[serde(default = "default_exclude_weekends")]
    pub exclude_weekends: bool,
    /// Days forced to count as working, overriding holidays and weekends.
    #[serde(default)]
    pub special_dates: BTreeSet<String>,
    /// Holidays declared through administrative announcements.
    #[serde(default)]
    pub announcement_holidays: BTreeSet<String>,
}

impl Default for CalendarRules {
    fn default() -> Self {
        Self {
            holidays: BTreeSet::new(),
            exclude_weekends: true,
            special_dates: BTreeSet::new(),
            announcement_holidays: BTreeSet::new(),
        }
    }
}

impl CalendarRules {
    /// Creates empty rules with weekends excluded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a calendar holiday.
    pub fn with_holiday(mut self, date: NaiveDate) -> Self {
        self.holidays.insert(day_key(date));
        self
    }

    /// Adds an announcement holiday.
    pub fn with_announcement_holiday(mut self, date: NaiveDate) -> Self {
        self.announcement_holidays.insert(day_key(date));
        self
    }

    /// Adds a special working day.
    pub fn with_special_date(mut self, date: NaiveDate) -> Self {
        self.special_dates.insert(day_key(date));
        self
    }

    /// Sets the weekend policy.
    pub fn with_exclude_weekends(mut self, exclude_weekends: bool) -> Self {
        self.exclude_weekends = exclude_weekends;
        self
    }

    /// Adds raw holiday keys without canonicalisation.
    pub fn extend_holidays<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.holidays.extend(keys.into_iter().map(Into::into));
    }

    /// Adds raw announcement-holiday keys without canonicalisation.
    pub fn extend_announcement_holidays<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.announcement_holidays
            .extend(keys.into_iter().map(Into::into));
    }

    /// Adds raw special-working-day keys without canonicalisation.
    pub fn extend_special_dates<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special_dates.extend(keys.into_iter().map(Into::into));
    }

    /// Returns `true` if the key is a calendar holiday.
    pub fn is_holiday(&self, key: &str) -> bool {
        self.holidays.contains(key)
    }

    /// Returns `true` if the key is an announcement holiday.
    pub fn is_announcement_holiday(&self, key: &str) -> bool {
        self.announcement_holidays.contains(key)
    }

    /// Returns `true` if the key is a special working day.
    pub fn is_special_date(&self, key: &str) -> bool {
        self.special_dates.contains(key)
    }

    /// Rejects any set entry that is not a canonical day key.
    ///
    /// The calculation never calls this; it backs the opt-in strict mode.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] for the first offending entry,
    /// checking holidays, then announcement holidays, then special dates.
    pub fn validate(&self) -> EngineResult<()> {
        let sets = [
            ("holidays", &self.holidays),
            ("announcement_holidays", &self.announcement_holidays),
            ("special_dates", &self.special_dates),
        ];

        for (field, keys) in sets {
            if let Some(bad) = keys.iter().find(|key| !is_canonical_day_key(key)) {
                return Err(EngineError::InvalidDate {
                    field: field.to_string(),
                    value: bad.clone(),
                });
            }
        }

        Ok(())
    }
}

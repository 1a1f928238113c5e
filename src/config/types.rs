//! Configuration types for school calendars.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Dates are kept as strings
//! so that they reach the calendar rules exactly as written.

use serde::Deserialize;

use crate::models::CalendarRules;

fn default_exclude_weekends() -> bool {
    true
}

/// Metadata about the school calendar.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarMetadata {
    /// The human-readable name of the calendar (e.g., "Greenfield Public School").
    pub name: String,
    /// The academic year this calendar covers (e.g., "2025-26").
    pub academic_year: String,
    /// Whether Saturdays and Sundays are non-working by default.
    #[serde(default = "default_exclude_weekends")]
    pub exclude_weekends: bool,
}

/// A holiday declared on the school calendar.
#[derive(Debug, Clone, Deserialize)]
pub struct Holiday {
    /// The day key of the holiday.
    pub date: String,
    /// The name of the holiday (e.g., "Republic Day").
    pub name: String,
}

/// Holidays configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// All declared holidays.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// A day forced to be a working day.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecialWorkingDay {
    /// The day key of the working day.
    pub date: String,
    /// Why the day is working (e.g., "Makeup class").
    #[serde(default)]
    pub reason: String,
}

/// Special working days configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecialDaysConfig {
    /// All special working days.
    #[serde(default)]
    pub special_working_days: Vec<SpecialWorkingDay>,
}

/// An administrative announcement that may declare holidays.
#[derive(Debug, Clone, Deserialize)]
pub struct Announcement {
    /// Identifier of the announcement.
    pub id: String,
    /// Headline of the announcement.
    pub title: String,
    /// Day keys declared as holidays by this announcement.
    #[serde(default)]
    pub holidays: Vec<String>,
}

/// A fully loaded school calendar.
#[derive(Debug, Clone)]
pub struct SchoolCalendar {
    metadata: CalendarMetadata,
    holidays: Vec<Holiday>,
    special_working_days: Vec<SpecialWorkingDay>,
    announcements: Vec<Announcement>,
}

impl SchoolCalendar {
    /// Creates a new school calendar.
    pub fn new(
        metadata: CalendarMetadata,
        holidays: Vec<Holiday>,
        special_working_days: Vec<SpecialWorkingDay>,
        announcements: Vec<Announcement>,
    ) -> Self {
        Self {
            metadata,
            holidays,
            special_working_days,
            announcements,
        }
    }

    /// Returns the calendar metadata.
    pub fn metadata(&self) -> &CalendarMetadata {
        &self.metadata
    }

    /// Returns the declared holidays.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Returns the special working days.
    pub fn special_working_days(&self) -> &[SpecialWorkingDay] {
        &self.special_working_days
    }

    /// Returns the announcements.
    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    /// Builds the calendar rules for this calendar.
    ///
    /// Announcement holidays from all announcements are merged into one set.
    pub fn rules(&self) -> CalendarRules {
        let mut rules = CalendarRules::new().with_exclude_weekends(self.metadata.exclude_weekends);
        rules.extend_holidays(self.holidays.iter().map(|h| h.date.clone()));
        rules.extend_special_dates(self.special_working_days.iter().map(|d| d.date.clone()));
        rules.extend_announcement_holidays(
            self.announcements
                .iter()
                .flat_map(|a| a.holidays.iter().cloned()),
        );
        rules
    }
}

//! Configuration loading functionality.
//!
//! This module provides the [`CalendarLoader`] type for loading school
//! calendars from YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{CalendarRules, is_canonical_day_key};

use super::types::{
    Announcement, CalendarMetadata, HolidaysConfig, SchoolCalendar, SpecialDaysConfig,
};

/// Loads and provides access to a school calendar.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── calendar.yaml       # Calendar metadata and weekend policy
/// ├── holidays.yaml       # Declared holidays
/// ├── special_days.yaml   # Special working days
/// └── announcements/      # Optional, one file per announcement
///     └── 2026-02-rain-closure.yaml
/// ```
///
/// Dates that are not in `YYYY-MM-DD` form are kept (they will never match a
/// day) and reported with a `warn` event.
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::CalendarLoader;
///
/// let loader = CalendarLoader::load("./config/default").unwrap();
/// println!("Calendar: {}", loader.metadata().name);
/// let rules = loader.rules();
/// println!("{} holidays", rules.holidays.len());
/// ```
#[derive(Debug, Clone)]
pub struct CalendarLoader {
    calendar: SchoolCalendar,
    rules: CalendarRules,
}

impl CalendarLoader {
    /// Loads a calendar from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if a required file is missing
    /// - [`EngineError::ConfigParseError`] if a file contains invalid YAML or
    ///   is missing a required field
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::CalendarLoader;
    ///
    /// let loader = CalendarLoader::load("./config/default")?;
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<CalendarMetadata>(&path.join("calendar.yaml"))?;
        let holidays = Self::load_yaml::<HolidaysConfig>(&path.join("holidays.yaml"))?;
        let special_days = Self::load_yaml::<SpecialDaysConfig>(&path.join("special_days.yaml"))?;
        let announcements = Self::load_announcements(&path.join("announcements"))?;

        let calendar = SchoolCalendar::new(
            metadata,
            holidays.holidays,
            special_days.special_working_days,
            announcements,
        );
        Self::warn_non_canonical(&calendar);

        info!(
            calendar = %calendar.metadata().name,
            academic_year = %calendar.metadata().academic_year,
            holidays = calendar.holidays().len(),
            special_working_days = calendar.special_working_days().len(),
            announcements = calendar.announcements().len(),
            "Loaded school calendar"
        );

        Ok(Self::from_calendar(calendar))
    }

    /// Wraps an already-built calendar.
    pub fn from_calendar(calendar: SchoolCalendar) -> Self {
        let rules = calendar.rules();
        Self { calendar, rules }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every announcement file, in file name order.
    ///
    /// A missing directory means there are no announcements.
    fn load_announcements(dir: &Path) -> EngineResult<Vec<Announcement>> {
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let dir_str = dir.display().to_string();
        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }
        paths.sort();

        paths
            .iter()
            .map(|path| Self::load_yaml::<Announcement>(path))
            .collect()
    }

    fn warn_non_canonical(calendar: &SchoolCalendar) {
        let holidays = calendar
            .holidays()
            .iter()
            .map(|h| ("holidays", h.date.as_str()));
        let special = calendar
            .special_working_days()
            .iter()
            .map(|d| ("special_working_days", d.date.as_str()));
        let announced = calendar.announcements().iter().flat_map(|a| {
            a.holidays
                .iter()
                .map(|date| ("announcements", date.as_str()))
        });

        for (source, date) in holidays.chain(special).chain(announced) {
            if !is_canonical_day_key(date) {
                warn!(source, date, "Calendar date is not YYYY-MM-DD and will never match");
            }
        }
    }

    /// Returns the loaded calendar.
    pub fn calendar(&self) -> &SchoolCalendar {
        &self.calendar
    }

    /// Returns the calendar metadata.
    pub fn metadata(&self) -> &CalendarMetadata {
        self.calendar.metadata()
    }

    /// Returns the calendar rules built from the loaded files.
    pub fn rules(&self) -> &CalendarRules {
        &self.rules
    }
}

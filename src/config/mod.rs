//! Configuration loading for school calendars.
//!
//! This module loads a school calendar (metadata, holidays, special working
//! days and announcements) from a directory of YAML files and turns it into
//! [`CalendarRules`](crate::models::CalendarRules).
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::CalendarLoader;
//!
//! let loader = CalendarLoader::load("./config/default").unwrap();
//! println!("Loaded calendar: {}", loader.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::CalendarLoader;
pub use types::{
    Announcement, CalendarMetadata, Holiday, HolidaysConfig, SchoolCalendar, SpecialDaysConfig,
    SpecialWorkingDay,
};

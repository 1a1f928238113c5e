//! Attendance Engine for school dashboards
//!
//! This crate counts working days over a date range under a school calendar
//! (holidays, announcement holidays, special working days and weekends) and
//! derives attendance percentages for student, faculty, institution and parent
//! views.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;

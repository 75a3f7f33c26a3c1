//! Calendar display utility in the style of a classic Unix `cal`.
//!
//! Features:
//! - Single month or whole year, Sunday-first week grid
//! - `-y` / `-m` tagged arguments alongside bare `[[month] year]`
//! - Validation errors reported with usage text, never by exiting inside the library

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod types;

//! # al-time
//!
//! Date, weekday, holiday calendar, and working-day counting types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait, holiday sets, and working-day counting.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Orthodox Easter computation.
pub mod easter;

/// `Weekday` enum.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, HolidaySet, WeekendsOnly};
pub use calendars::Greece;
pub use date::Date;
pub use weekday::Weekday;

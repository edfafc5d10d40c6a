//! # annualleaves
//!
//! Greek public-holiday calendar, working-day counting, and leave-tracking
//! core.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `al-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! annualleaves = "0.1"
//! ```
//!
//! ```rust
//! use annualleaves::time::{Calendar, Date, Greece};
//!
//! let from = Date::from_ymd(2024, 5, 1).unwrap();
//! let until = Date::from_ymd(2024, 5, 10).unwrap();
//! let days = Greece.working_days(Some(from), Some(until)).unwrap();
//! assert_eq!(days, 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types and error definitions.
pub use al_core as core;

/// Date, weekday, holiday calendar, and working-day counting types.
pub use al_time as time;

/// Leave records and quota arithmetic.
pub use al_leaves as leaves;

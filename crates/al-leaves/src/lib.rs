//! # al-leaves
//!
//! Annual and parental leave records and quota arithmetic.
//!
//! The UI and sync layers live outside this workspace; this crate gives them
//! the leave data model, the wire format, and the balance arithmetic, all on
//! top of the `al-time` working-day counter.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Leave records and their wire format.
pub mod leave;

/// Yearly quota arithmetic.
pub mod quota;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use leave::{AnnualLeave, Leave, ParentalLeave};
pub use quota::{remaining, used, DEFAULT_ANNUAL_QUOTA, DEFAULT_PARENTAL_QUOTA};

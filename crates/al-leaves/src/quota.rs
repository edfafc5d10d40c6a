//! Yearly quota arithmetic.
//!
//! Quotas are stored per user and year by the external sync layer; these
//! defaults seed a year that has no stored value yet.

use crate::leave::Leave;

/// Default annual-leave quota for a year with no stored value.
pub const DEFAULT_ANNUAL_QUOTA: i64 = 20;

/// Default parental-leave quota for a year with no stored value.
pub const DEFAULT_PARENTAL_QUOTA: i64 = 4;

/// Working days consumed by the given records.
pub fn used(leaves: &[Leave]) -> i64 {
    leaves.iter().map(|leave| i64::from(leave.days())).sum()
}

/// Days left of `total` after the given records.
///
/// Signed: taking more leave than the quota allows is representable and the
/// UI renders it as a negative balance.
pub fn remaining(total: i64, leaves: &[Leave]) -> i64 {
    total - used(leaves)
}

//! Error types for annualleaves-rs.
//!
//! A single `thiserror`-derived enum covers the whole workspace. The only
//! fallible operations are date construction, date parsing, and leave-record
//! preconditions; the holiday and working-day computations themselves only
//! propagate these.

use thiserror::Error;

/// The top-level error type used throughout annualleaves-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Date construction or arithmetic produced an out-of-range result.
    #[error("date error: {0}")]
    Date(String),

    /// A date string could not be parsed.
    #[error("cannot parse date {input:?}: {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Precondition violated (raised by the `ensure!` macro).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout annualleaves-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use al_core::ensure;
/// fn non_empty(name: &str) -> al_core::Result<()> {
///     ensure!(!name.is_empty(), "name must not be empty");
///     Ok(())
/// }
/// assert!(non_empty("Maria").is_ok());
/// assert!(non_empty("").is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = Error::Date("year 2500 out of range".into());
        assert_eq!(e.to_string(), "date error: year 2500 out of range");

        let e = Error::Parse {
            input: "2024-13-01".into(),
            reason: "month 13 out of range".into(),
        };
        assert!(e.to_string().contains("2024-13-01"));
    }

    #[test]
    fn ensure_macro() {
        fn check(x: i32) -> Result<i32> {
            ensure!(x >= 0, "x must be non-negative, got {x}");
            Ok(x)
        }
        assert_eq!(check(3), Ok(3));
        assert_eq!(
            check(-1),
            Err(Error::Precondition("x must be non-negative, got -1".into()))
        );
    }
}

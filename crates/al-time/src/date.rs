//! `Date` type.
//!
//! A calendar date is stored as a day serial relative to the Unix epoch
//! (1970-01-01 = serial 0), the same day-number convention the surrounding
//! application uses for persisted timestamps. Serials before the epoch are
//! negative.
//!
//! # Supported range
//! 1900-01-01 (serial −25567) through 2199-12-31 (serial 84005). Dates are
//! validated on construction; arithmetic that would leave the range fails.

use crate::weekday::Weekday;
use al_core::errors::{Error, Result};
use al_core::Year;

/// A calendar date in the proleptic Gregorian calendar.
///
/// Immutable, `Copy`, ordered by day serial.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

impl Date {
    /// Minimum supported date: January 1, 1900.
    pub const MIN: Date = Date(-25_567);

    /// Maximum supported date: December 31, 2199.
    pub const MAX: Date = Date(84_005);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1-12), and day-of-month (1-31).
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {last}] for {year}-{month:02}"
            )));
        }
        Ok(Date(days_from_civil(
            i32::from(year),
            i32::from(month),
            i32::from(day),
        )))
    }

    /// Create a date from a day count since the Unix epoch.
    ///
    /// The application's persistence layer stores dates this way (via epoch
    /// milliseconds); see [`Date::from_epoch_milli`].
    pub fn from_epoch_day(day: i64) -> Result<Self> {
        if day < i64::from(Self::MIN.0) || day > i64::from(Self::MAX.0) {
            return Err(Error::Date(format!("epoch day {day} out of range")));
        }
        Ok(Date(day as i32))
    }

    /// Create a date from a millisecond timestamp, truncating the time of day.
    pub fn from_epoch_milli(millis: i64) -> Result<Self> {
        Self::from_epoch_day(millis / MILLIS_PER_DAY)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The day serial relative to 1970-01-01.
    pub fn epoch_day(&self) -> i32 {
        self.0
    }

    /// The midnight-UTC millisecond timestamp of this date.
    pub fn epoch_milli(&self) -> i64 {
        i64::from(self.0) * MILLIS_PER_DAY
    }

    /// The year (1900-2199).
    pub fn year(&self) -> Year {
        civil_from_days(self.0).0
    }

    /// The month (1-12).
    pub fn month(&self) -> u8 {
        civil_from_days(self.0).1
    }

    /// The day of the month (1-31).
    pub fn day_of_month(&self) -> u8 {
        civil_from_days(self.0).2
    }

    /// The day of the week.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (ISO ordinal 4).
        let w = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always lands in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative `n` goes backward).
    ///
    /// Fails if the result leaves the supported range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if !(Self::MIN.0..=Self::MAX.0).contains(&serial) {
            return Err(Error::Date(format!(
                "date arithmetic: serial {serial} out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Calendar days from `self` to `other`; positive when `other` is later.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    // ── Formatting ────────────────────────────────────────────────────────────

    /// Format for display as e.g. `07 May 2024`.
    ///
    /// This is the human-facing form the application shows next to leave
    /// records; the machine form is the ISO `Display` implementation.
    pub fn to_display_string(&self) -> String {
        let (y, m, d) = civil_from_days(self.0);
        format!("{d:02} {} {y}", MONTH_ABBREV[m as usize - 1])
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

// ── Parsing and display ───────────────────────────────────────────────────────

impl std::str::FromStr for Date {
    type Err = Error;

    /// Parse the storage format `yyyy-MM-dd`, e.g. `2024-05-07`.
    fn from_str(s: &str) -> Result<Self> {
        let parse_err = |reason: String| Error::Parse {
            input: s.to_string(),
            reason,
        };
        let mut parts = s.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(parse_err("expected yyyy-MM-dd".into()));
        };
        if y.len() != 4 || m.len() != 2 || d.len() != 2 {
            return Err(parse_err("expected yyyy-MM-dd".into()));
        }
        let year: Year = y
            .parse()
            .map_err(|_| parse_err(format!("invalid year {y:?}")))?;
        let month: u8 = m
            .parse()
            .map_err(|_| parse_err(format!("invalid month {m:?}")))?;
        let day: u8 = d
            .parse()
            .map_err(|_| parse_err(format!("invalid day {d:?}")))?;
        Self::from_ymd(year, month, day).map_err(|e| parse_err(e.to_string()))
    }
}

impl std::fmt::Display for Date {
    /// The storage format `yyyy-MM-dd`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = civil_from_days(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Serde (optional) ──────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a day serial relative to 1970-01-01.
///
/// Standard civil-calendar conversion over 400-year eras; the shifted year
/// starts in March so leap days fall at the end of the era year.
fn days_from_civil(year: i32, month: i32, day: i32) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let mp = (month + 9) % 12; // Mar = 0 .. Feb = 11
    let doy = (153 * mp + 2) / 5 + day - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - 719_468
}

/// Decompose a day serial into (year, month, day).
fn civil_from_days(serial: i32) -> (Year, u8, u8) {
    let z = serial + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i32::from(month <= 2);
    (year as Year, month as u8, day as u8)
}

/// Month abbreviations for [`Date::to_display_string`].
const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// ── Tests ─────────────────────────────────────────────────────────────────────

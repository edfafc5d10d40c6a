//! `Calendar` trait and the working-day counter.
//!
//! A calendar knows the observed public holidays of each year and can count
//! the working days inside a date range, excluding weekends and holidays.

use std::collections::HashSet;

use crate::date::Date;
use al_core::errors::Result;
use al_core::{Days, Year};

/// The observed holidays of one calendar year.
///
/// Produced fresh on each request; a pure function of the year.
pub type HolidaySet = HashSet<Date>;

/// A public-holiday calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Greece"`).
    fn name(&self) -> &str;

    /// The set of observed holidays for `year`.
    ///
    /// Fails only when `year` is outside the supported `Date` range.
    fn holidays(&self, year: Year) -> Result<HolidaySet>;

    /// Return `true` if `date` falls on a weekend.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is an observed holiday.
    fn is_holiday(&self, date: Date) -> Result<bool> {
        Ok(self.holidays(date.year())?.contains(&date))
    }

    /// Return `true` if `date` is a working day: neither a weekend day nor
    /// an observed holiday.
    fn is_business_day(&self, date: Date) -> Result<bool> {
        Ok(!self.is_weekend(date) && !self.is_holiday(date)?)
    }

    /// Count the working days in the inclusive range `[start, end]`.
    ///
    /// An absent endpoint yields 0, as does `start` after `end`; neither is
    /// an error. Holiday sets are unioned over every year the range touches,
    /// so ranges may span year boundaries freely.
    fn working_days(&self, start: Option<Date>, end: Option<Date>) -> Result<Days> {
        let (Some(start), Some(end)) = (start, end) else {
            return Ok(0);
        };
        if start > end {
            return Ok(0);
        }

        let mut holidays = HolidaySet::new();
        for year in start.year()..=end.year() {
            holidays.extend(self.holidays(year)?);
        }

        let mut count = 0;
        let mut d = start;
        loop {
            if !self.is_weekend(d) && !holidays.contains(&d) {
                count += 1;
            }
            if d == end {
                break;
            }
            d = d.add_days(1)?;
        }
        Ok(count)
    }
}

/// A calendar with no holidays at all; only weekends are non-working.
///
/// Useful as a baseline in tests and as the neutral fallback when no
/// country-specific calendar applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn holidays(&self, _year: Year) -> Result<HolidaySet> {
        Ok(HolidaySet::new())
    }
}

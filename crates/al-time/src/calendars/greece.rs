//! Greece calendar.

use crate::calendar::{Calendar, HolidaySet};
use crate::date::Date;
use crate::easter::orthodox_easter;
use crate::weekday::Weekday;
use al_core::errors::Result;
use al_core::Year;

/// Greece calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Epiphany (Jan 6)
/// * Clean Monday (48 days before Orthodox Easter)
/// * Independence Day (Mar 25)
/// * Good Friday (Orthodox Easter − 2)
/// * Easter Monday (Orthodox Easter + 1)
/// * Labour Day (May 1, subject to the shift rule below)
/// * Pentecost Monday (Orthodox Easter + 50)
/// * Dormition of the Theotokos (Aug 15)
/// * Ochi Day (Oct 28)
/// * Christmas Day (Dec 25)
/// * Synaxis of the Theotokos (Dec 26)
///
/// Labour Day moves: when May 1 lands on a weekend it is observed on the
/// following Monday, and when it falls inside Great Week (the seven days
/// before Easter through Easter Monday) it is observed on the Tuesday after
/// Easter instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greece;

impl Greece {
    /// The observed Labour Day for `year`, applying the shift rule.
    ///
    /// Exactly one of the three branches applies; the returned date replaces
    /// May 1 in the holiday set, it is never an addition to it.
    fn labour_day(year: Year, easter: Date) -> Result<Date> {
        let first_of_may = Date::from_ymd(year, 5, 1)?;
        let weekday = first_of_may.weekday();
        if weekday.is_weekend() {
            return first_of_may.add_days(i32::from(weekday.days_until(Weekday::Monday)));
        }
        let great_week_start = easter.add_days(-7)?;
        let great_week_end = easter.add_days(1)?;
        if first_of_may > great_week_start && first_of_may < great_week_end {
            easter.add_days(2)
        } else {
            Ok(first_of_may)
        }
    }
}

impl Calendar for Greece {
    fn name(&self) -> &str {
        "Greece"
    }

    fn holidays(&self, year: Year) -> Result<HolidaySet> {
        let easter = orthodox_easter(year)?;

        let mut holidays = HolidaySet::with_capacity(12);
        // New Year's Day
        holidays.insert(Date::from_ymd(year, 1, 1)?);
        // Epiphany
        holidays.insert(Date::from_ymd(year, 1, 6)?);
        // Clean Monday
        holidays.insert(easter.add_days(-48)?);
        // Independence Day
        holidays.insert(Date::from_ymd(year, 3, 25)?);
        // Good Friday
        holidays.insert(easter.add_days(-2)?);
        // Easter Monday
        holidays.insert(easter.add_days(1)?);
        // Labour Day, possibly shifted
        holidays.insert(Self::labour_day(year, easter)?);
        // Pentecost Monday
        holidays.insert(easter.add_days(50)?);
        // Dormition of the Theotokos
        holidays.insert(Date::from_ymd(year, 8, 15)?);
        // Ochi Day
        holidays.insert(Date::from_ymd(year, 10, 28)?);
        // Christmas Day
        holidays.insert(Date::from_ymd(year, 12, 25)?);
        // Synaxis of the Theotokos
        holidays.insert(Date::from_ymd(year, 12, 26)?);
        Ok(holidays)
    }
}

//! Orthodox Easter computation.

use crate::date::Date;
use al_core::errors::Result;
use al_core::Year;

/// Fixed Julian-to-Gregorian calendar offset, in days.
///
/// The drift between the two calendars grows by roughly a day per century;
/// 13 days is exact for 1900 through 2099. Later years inside the supported
/// `Date` range still compute, but land one or more days off. Callers that
/// ever need dates beyond that window must adjust this constant per the
/// standard drift table.
const JULIAN_TO_GREGORIAN_DAYS: i32 = 13;

/// Compute the Gregorian date of Orthodox Easter Sunday for `year`.
///
/// Uses the Meeus Julian-calendar algorithm, then shifts by
/// [`JULIAN_TO_GREGORIAN_DAYS`] to express the result in the Gregorian
/// calendar. Fails only when `year` is outside the supported `Date` range.
///
/// # Example
/// ```
/// use al_time::easter::orthodox_easter;
/// use al_time::Date;
///
/// let easter = orthodox_easter(2024).unwrap();
/// assert_eq!(easter, Date::from_ymd(2024, 5, 5).unwrap());
/// ```
pub fn orthodox_easter(year: Year) -> Result<Date> {
    let y = i32::from(year);
    let a = y % 4;
    let b = y % 7;
    let c = y % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34).rem_euclid(7);
    // Julian-calendar Easter Sunday; the division packs month and day into
    // one quantity (March 22 = lowest possible Easter).
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;
    let julian = Date::from_ymd(year, month as u8, day as u8)?;
    julian.add_days(JULIAN_TO_GREGORIAN_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn reference_years() {
        // Published Orthodox Easter dates (Gregorian calendar).
        let expected = [
            (2018, 4, 8),
            (2019, 4, 28),
            (2020, 4, 19),
            (2021, 5, 2),
            (2022, 4, 24),
            (2023, 4, 16),
            (2024, 5, 5),
            (2025, 4, 20),
            (2026, 4, 12),
        ];
        for (y, m, d) in expected {
            assert_eq!(
                orthodox_easter(y).unwrap(),
                date(y, m, d),
                "Orthodox Easter {y}"
            );
        }
    }

    #[test]
    fn always_a_sunday() {
        for year in 1900..=2099 {
            assert_eq!(
                orthodox_easter(year).unwrap().weekday(),
                crate::weekday::Weekday::Sunday,
                "easter {year} not a Sunday"
            );
        }
    }

    #[test]
    fn out_of_range_year() {
        assert!(orthodox_easter(1899).is_err());
        assert!(orthodox_easter(2200).is_err());
    }
}

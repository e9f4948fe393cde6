//! date.rs
//!
//! Calendar-day helpers shared by the age and birthday calculations.
//!
//! Everything downstream works on `NaiveDate`: a Gregorian (year, month, day)
//! with no time of day. Timestamp-bearing values are folded down to the
//! calendar day they fall on before any arithmetic happens.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Anything that can be reduced to a calendar day.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

/// The day is taken in the timestamp's own zone, so a `DateTime<Local>`
/// yields the local calendar day.
impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Strips the time-of-day component.
pub fn normalize<D: CalendarDay>(date: &D) -> NaiveDate {
    date.calendar_day()
}

/// Today's date on the local system clock.
pub fn today() -> NaiveDate {
    normalize(&Local::now())
}

/// Whether the year after `date` can still be represented, which the
/// next-birthday search needs.
pub fn is_supported(date: NaiveDate) -> bool {
    date.year() < NaiveDate::MAX.year()
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
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
        _ => 30, // should never occur but keeps function total
    }
}

/// The month before `(year, month)`, wrapping January back to December.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

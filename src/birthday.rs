//! Next occurrence of a birthday on or after a reference date.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::date::is_leap_year;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextBirthday {
    pub date: NaiveDate,
    pub days_until: i64,
}

impl NextBirthday {
    pub fn is_today(&self) -> bool {
        self.days_until == 0
    }
}

/// Finds the next birthday on or after `today`.
///
/// Feb 29 birthdays fall on Feb 28 in non-leap years. `today` should pass
/// [`is_supported`](crate::date::is_supported); past that the date clamps to
/// `NaiveDate::MAX`.
pub fn next_birthday(birthdate: NaiveDate, today: NaiveDate) -> NextBirthday {
    let mut date = occurrence_in(birthdate, today.year());
    if date < today {
        date = occurrence_in(birthdate, today.year() + 1);
    }

    NextBirthday {
        date,
        days_until: (date - today).num_days(),
    }
}

/// The birthday as it falls in `year`.
fn occurrence_in(birthdate: NaiveDate, year: i32) -> NaiveDate {
    let (month, day) = match (birthdate.month(), birthdate.day()) {
        (2, 29) if !is_leap_year(year) => (2, 28),
        md => md,
    };

    // Only `year` past the last representable one fails; never precede `today`.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MAX)
}

//! age.rs
//!
//! Calendar age in the format:
//!     "X years, Y months, Z days"
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so we implement the calendar-aware borrowing rules manually.
//!
//! This logic correctly handles:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from previous month)
//!   • leap years
//!   • varying month lengths

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::date::{days_in_month, previous_month};

/// Elapsed calendar time between a birth date and a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Age {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Computes the age on `today` of someone born on `birthdate`.
///
/// Expects `birthdate <= today`; callers validate that first. When the
/// borrowed month is shorter than the birth day (Jan 31 -> Mar 1), days are
/// clamped to 0.
pub fn compute_age(birthdate: NaiveDate, today: NaiveDate) -> Age {
    debug_assert!(birthdate <= today, "birth date {birthdate} is after {today}");

    let mut years = today.year() - birthdate.year();
    let mut months = today.month() as i32 - birthdate.month() as i32;
    let mut days = today.day() as i32 - birthdate.day() as i32;

    // Fix day underflow
    if days < 0 {
        months -= 1;

        let (prev_year, prev_month) = previous_month(today.year(), today.month());

        // Add days from the previous month (28–31 depending on month & leap year)
        days += days_in_month(prev_year, prev_month) as i32;

        // Jan 31 -> Mar 1: the borrowed month is shorter than the birth day.
        days = days.max(0);
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    Age {
        years: years.max(0) as u32,
        months: months as u32,
        days: days as u32,
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

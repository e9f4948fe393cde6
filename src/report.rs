use chrono::NaiveDate;
use serde::Serialize;

use crate::age::{Age, compute_age};
use crate::birthday::{NextBirthday, next_birthday};

/// Age and next birthday for one birth date, as of `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Report {
    pub birth_date: NaiveDate,
    pub today: NaiveDate,
    pub age: Age,
    pub next_birthday: NextBirthday,
}

impl Report {
    /// Runs both calculations. `birth_date` must already be validated.
    pub fn new(birth_date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            birth_date,
            today,
            age: compute_age(birth_date, today),
            next_birthday: next_birthday(birth_date, today),
        }
    }

    /// One-line summary, e.g.
    /// "You are 23 years, 0 months and 0 days old. Your next birthday is in 365 day(s) on Thu Feb 29 2024."
    pub fn summary(&self) -> String {
        let Age {
            years,
            months,
            days,
        } = self.age;
        format!(
            "You are {years} years, {months} months and {days} days old. \
             Your next birthday is in {} day(s) on {}.",
            self.next_birthday.days_until,
            self.next_birthday.date.format("%a %b %d %Y")
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

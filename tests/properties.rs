//! Property tests for the age and next-birthday calculations.
//!
//! Run with: `cargo test --test properties`

use agecalc::date::{days_in_month, is_leap_year, previous_month};
use agecalc::{compute_age, next_birthday};
use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

/// Dates between 1900-01-01 and roughly 2100.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..73_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(offset)
    })
}

/// A (birth, today) pair with birth <= today.
fn ordered_dates() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (any_date(), 0i64..40_000).prop_map(|(birth, gap)| (birth, birth + Duration::days(gap)))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: age components stay in range for ordered inputs.
    #[test]
    fn property_age_components_in_range((birth, today) in ordered_dates()) {
        let age = compute_age(birth, today);

        let (py, pm) = previous_month(today.year(), today.month());
        prop_assert!(age.months <= 11);
        prop_assert!(age.days <= days_in_month(py, pm).max(today.day()));
        prop_assert!(age.years as i32 <= today.year() - birth.year());
    }

    /// PROPERTY: a date is zero days old on itself.
    #[test]
    fn property_same_day_is_zero(d in any_date()) {
        let age = compute_age(d, d);
        prop_assert_eq!((age.years, age.months, age.days), (0, 0, 0));
    }

    /// PROPERTY: the next birthday is never in the past and within a year.
    #[test]
    fn property_next_birthday_not_before_today((birth, today) in ordered_dates()) {
        let next = next_birthday(birth, today);

        prop_assert!(next.date >= today);
        prop_assert!(next.days_until >= 0);
        prop_assert!(next.days_until <= 366);
        prop_assert_eq!(next.days_until, (next.date - today).num_days());
    }

    /// PROPERTY: the next birthday keeps the birth month/day, except Feb 29
    /// which lands on Feb 28 outside leap years.
    #[test]
    fn property_next_birthday_matches_birth_day((birth, today) in ordered_dates()) {
        let next = next_birthday(birth, today);

        prop_assert_eq!(next.date.month(), birth.month());
        if birth.month() == 2 && birth.day() == 29 && !is_leap_year(next.date.year()) {
            prop_assert_eq!(next.date.day(), 28);
        } else {
            prop_assert_eq!(next.date.day(), birth.day());
        }
    }

    /// PROPERTY: on the birthday itself the age has no months or days.
    #[test]
    fn property_age_on_birthday_is_whole_years((birth, today) in ordered_dates()) {
        let next = next_birthday(birth, today);
        if next.is_today() && !(birth.month() == 2 && birth.day() == 29) {
            let age = compute_age(birth, today);
            prop_assert_eq!((age.months, age.days), (0, 0));
        }
    }
}

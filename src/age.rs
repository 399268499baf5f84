//! age.rs
//!
//! Core age calculation: elapsed years, months, and days between a date of
//! birth and a reference "today" date.
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so we implement the calendar-aware borrowing rules
//! manually:
//!   • day underflow borrows from the month preceding `today`, clamping
//!     month-end birth days to that month's length
//!   • month underflow borrows from years
//!   • leap years and varying month lengths are respected
//!
//! Validation is part of the contract: the raw (day, month, year) triple is
//! checked here regardless of whatever range the calling UI offered, and a
//! birth date after `today` is rejected as its own error kind.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Why a calculation request was rejected. Both are user-correctable input
/// states, not crashes; the messages are the exact strings shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AgeError {
    #[error("Invalid date! Please select a valid date.")]
    InvalidDate,
    #[error("Date of birth cannot be in the future!")]
    FutureDate,
}

/// Elapsed calendar time, split into whole years, months, and days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Age {
    pub years: i32,
    pub months: u32,
    pub days: u32,
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years as i64),
            self.months,
            plural(self.months as i64),
            self.days,
            plural(self.days as i64)
        )
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Computes the age on `today` for a birth date given as raw selector values.
///
/// Validates that (year, month, day) is a real proleptic-Gregorian date and
/// that it does not lie after `today`. A birth date equal to `today` yields
/// an all-zero `Age`.
pub fn compute_age(day: u32, month: u32, year: i32, today: NaiveDate) -> Result<Age, AgeError> {
    let birth = NaiveDate::from_ymd_opt(year, month, day).ok_or(AgeError::InvalidDate)?;

    if birth > today {
        return Err(AgeError::FutureDate);
    }

    let mut years = today.year() - birth.year();
    let mut months = today.month() as i32 - birth.month() as i32;
    let mut days = today.day() as i32 - birth.day() as i32;

    // Fix day underflow
    if days < 0 {
        months -= 1;

        // Determine the previous month relative to `today`; January borrows
        // from December of the prior year.
        let (prev_year, prev_month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };

        days += days_in_month(prev_year, prev_month) as i32;

        // A month-end birth day can exceed the borrowed-from month entirely
        // (31 Jan seen on 1 Mar). Clamp the birth day to that month's
        // length, which leaves today's day-of-month.
        if days < 0 {
            days = today.day() as i32;
        }
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    Ok(Age {
        years,
        months: months as u32,
        days: days as u32,
    })
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

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(15, 6, 2000, date(2023, 6, 15), Age { years: 23, months: 0, days: 0 })]
    #[case(31, 1, 2000, date(2000, 2, 1), Age { years: 0, months: 0, days: 1 })]
    #[case(15, 12, 1999, date(2000, 1, 10), Age { years: 0, months: 0, days: 26 })]
    #[case(10, 5, 2000, date(2023, 10, 20), Age { years: 23, months: 5, days: 10 })]
    #[case(29, 2, 2000, date(2001, 2, 28), Age { years: 0, months: 11, days: 30 })]
    #[case(31, 1, 2023, date(2023, 3, 1), Age { years: 0, months: 1, days: 1 })]
    #[case(30, 1, 2023, date(2023, 3, 1), Age { years: 0, months: 1, days: 1 })]
    #[case(29, 2, 2000, date(2001, 3, 1), Age { years: 1, months: 0, days: 0 })]
    #[case(31, 12, 2023, date(2024, 3, 1), Age { years: 0, months: 2, days: 1 })]
    #[case(1, 1, 1900, date(2023, 1, 1), Age { years: 123, months: 0, days: 0 })]
    fn computes_expected_age(
        #[case] day: u32,
        #[case] month: u32,
        #[case] year: i32,
        #[case] today: NaiveDate,
        #[case] expected: Age,
    ) {
        assert_eq!(compute_age(day, month, year, today), Ok(expected));
    }

    #[rstest]
    fn birth_equal_to_today_is_zero_age() {
        let today = date(2023, 11, 20);
        assert_eq!(
            compute_age(20, 11, 2023, today),
            Ok(Age { years: 0, months: 0, days: 0 })
        );
    }

    #[rstest]
    fn birth_one_day_after_today_is_rejected() {
        let today = date(2023, 11, 20);
        assert_eq!(compute_age(21, 11, 2023, today), Err(AgeError::FutureDate));
    }

    #[rstest]
    #[case(31, 2, 2023)]
    #[case(29, 2, 2001)]
    #[case(31, 4, 2020)]
    #[case(0, 6, 2000)]
    #[case(15, 13, 2000)]
    #[case(32, 1, 2000)]
    fn impossible_dates_are_rejected(#[case] day: u32, #[case] month: u32, #[case] year: i32) {
        let today = date(2023, 11, 20);
        assert_eq!(compute_age(day, month, year, today), Err(AgeError::InvalidDate));
    }

    #[rstest]
    fn leap_day_birth_is_valid_in_leap_years() {
        let today = date(2023, 11, 20);
        assert!(compute_age(29, 2, 2000, today).is_ok());
    }

    #[rstest]
    fn impossible_date_in_a_future_year_is_still_invalid() {
        let today = date(2023, 11, 20);
        assert_eq!(compute_age(31, 2, 2030, today), Err(AgeError::InvalidDate));
    }

    #[rstest]
    #[case(Age { years: 1, months: 1, days: 1 }, "1 year, 1 month, 1 day")]
    #[case(Age { years: 23, months: 0, days: 10 }, "23 years, 0 months, 10 days")]
    fn age_display_pluralizes_per_unit(#[case] age: Age, #[case] expected: &str) {
        assert_eq!(age.to_string(), expected);
    }

    #[rstest]
    #[case(2000, true)]
    #[case(1900, false)]
    #[case(2024, true)]
    #[case(2023, false)]
    fn leap_year_rule(#[case] year: i32, #[case] leap: bool) {
        assert_eq!(is_leap_year(year), leap);
        assert_eq!(days_in_month(year, 2), if leap { 29 } else { 28 });
    }

    /// Field-wise calendar add used to invert the computation: add the year
    /// and month components (clamping the day to the target month's length),
    /// then step forward by whole days.
    fn add_age(birth: NaiveDate, age: Age) -> NaiveDate {
        let total =
            birth.year() * 12 + birth.month() as i32 - 1 + age.years * 12 + age.months as i32;
        let (y, m) = (total.div_euclid(12), total.rem_euclid(12) as u32 + 1);
        let d = birth.day().min(days_in_month(y, m));
        NaiveDate::from_ymd_opt(y, m, d).unwrap() + chrono::Days::new(age.days as u64)
    }

    proptest! {
        // Birth days capped at 28 so the clamp in `add_age` never fires; the
        // leap-day anniversary cases are pinned by the unit tests above.
        #[test]
        fn age_is_bounded_and_reconstructs_today(
            year in 1900i32..=2023,
            month in 1u32..=12,
            day in 1u32..=28,
            offset in 0u64..30_000,
        ) {
            let birth = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let today = birth + chrono::Days::new(offset);
            let age = compute_age(day, month, year, today).unwrap();

            prop_assert!(age.years >= 0);
            prop_assert!(age.months <= 11);
            prop_assert!(age.days <= 30);
            prop_assert_eq!(add_age(birth, age), today);
        }

        // Month-end birth days (29-31) trigger the day-underflow clamp when
        // `today` sits just past a shorter month; the result must still land
        // inside the unit bounds.
        #[test]
        fn age_is_bounded_for_month_end_births(
            year in 1900i32..=2023,
            month in 1u32..=12,
            day in 29u32..=31,
            offset in 0u64..30_000,
        ) {
            prop_assume!(day <= days_in_month(year, month));
            let birth = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let today = birth + chrono::Days::new(offset);
            let age = compute_age(day, month, year, today).unwrap();

            prop_assert!(age.years >= 0);
            prop_assert!(age.months <= 11);
            prop_assert!(age.days <= 30);
        }
    }
}

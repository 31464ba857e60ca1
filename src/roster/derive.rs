//! Derived fields computed against the run date.

use chrono::{Datelike, NaiveDate};

const DAYS_PER_YEAR: f64 = 365.25;

/// Whole years between `birth_date` and `run_date`.
///
/// One year is subtracted while the (month, day) of the birthday has not yet
/// been reached. A Feb 29 birthday therefore counts as reached on Mar 1.
pub fn age(birth_date: Option<NaiveDate>, run_date: NaiveDate) -> Option<i64> {
    let birth = birth_date?;
    let mut years = i64::from(run_date.year()) - i64::from(birth.year());
    if (run_date.month(), run_date.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    Some(years)
}

/// Elapsed days over 365.25, rounded half-to-even to one decimal place.
pub fn tenure_years(hire_date: Option<NaiveDate>, run_date: NaiveDate) -> Option<f64> {
    let hire = hire_date?;
    let days = (run_date - hire).num_days() as f64;
    Some(round_one_decimal(days / DAYS_PER_YEAR))
}

/// Round to one decimal place, ties to even.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// A hire date strictly after the run date marks the whole record as invalid.
pub fn is_future_hire(hire_date: Option<NaiveDate>, run_date: NaiveDate) -> bool {
    hire_date.is_some_and(|hire| hire > run_date)
}

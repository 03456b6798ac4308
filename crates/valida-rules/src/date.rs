//! Calendar-date rules relative to a caller-supplied `today`.
//!
//! Nothing here reads the system clock; callers pass the reference date so
//! results are reproducible.

use std::fmt::Display;

use chrono::{Datelike, NaiveDate};

use valida_core::{check, codes, ValidationResult, ValueValidator};

/// Whole years elapsed from `birth` to `on`, or `None` if `on` precedes
/// `birth`.
pub fn age_on(birth: NaiveDate, on: NaiveDate) -> Option<u32> {
    if on < birth {
        return None;
    }
    let mut years = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

pub fn validate_not_future(field: &str, today: NaiveDate) -> ValueValidator<NaiveDate> {
    let field = field.to_string();
    check(move |date: &NaiveDate| {
        if *date > today {
            ValidationResult::failure(
                format!("{field} must not be after {today}."),
                field.as_str(),
                codes::FUTURE_DATE,
            )
        } else {
            ValidationResult::success()
        }
    })
}

pub fn validate_not_past(field: &str, today: NaiveDate) -> ValueValidator<NaiveDate> {
    let field = field.to_string();
    check(move |date: &NaiveDate| {
        if *date < today {
            ValidationResult::failure(
                format!("{field} must not be before {today}."),
                field.as_str(),
                codes::PAST_DATE,
            )
        } else {
            ValidationResult::success()
        }
    })
}

/// Age on `today` must lie in `min..=max` years. Dates after `today` are
/// left to [`validate_not_future`].
pub fn validate_age_between(field: &str, today: NaiveDate, min: u32, max: u32) -> ValueValidator<NaiveDate> {
    let field = field.to_string();
    valida_core::validator(move |birth: &NaiveDate| {
        let age = age_on(*birth, today)?;
        Some(if (min..=max).contains(&age) {
            ValidationResult::success()
        } else {
            ValidationResult::failure(
                format!("{field} must correspond to an age between {min} and {max}, got {age}."),
                field.as_str(),
                codes::INVALID_AGE,
            )
        })
    })
}

/// `(from, to)` must satisfy `from <= to`.
pub fn validate_range_order<T>(field: &str) -> ValueValidator<(T, T)>
where
    T: PartialOrd + Display + 'static,
{
    let field = field.to_string();
    check(move |(from, to): &(T, T)| {
        if from <= to {
            ValidationResult::success()
        } else {
            ValidationResult::failure(
                format!("{field} start {from} must not be after end {to}."),
                field.as_str(),
                codes::INVALID_RANGE,
            )
        }
    })
}

//! Field-agnostic string validators: presence, length, character class,
//! and arbitrary patterns.
//!
//! Only [`required`] fails on blank input. Every other validator treats
//! blank input as "not applicable" so that presence and shape are reported
//! independently.

use regex::Regex;

use valida_core::{codes, validator, ValidationResult, ValueValidator};

use crate::normalize::is_blank;
use crate::pattern::guarded_result;

/// The value must be present and not whitespace-only.
pub fn required(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        Some(if is_blank(value) {
            ValidationResult::failure(format!("{field} is required."), field.as_str(), codes::REQUIRED)
        } else {
            ValidationResult::success()
        })
    })
}

/// At least `min` characters (after trimming).
pub fn min_length(field: &str, min: usize) -> ValueValidator<str> {
    length_check(field, Some(min), None)
}

/// At most `max` characters (after trimming).
pub fn max_length(field: &str, max: usize) -> ValueValidator<str> {
    length_check(field, None, Some(max))
}

/// Between `min` and `max` characters inclusive (after trimming).
pub fn length_between(field: &str, min: usize, max: usize) -> ValueValidator<str> {
    length_check(field, Some(min), Some(max))
}

/// Exactly `len` characters (after trimming).
pub fn exact_length(field: &str, len: usize) -> ValueValidator<str> {
    length_check(field, Some(len), Some(len))
}

fn length_check(field: &str, min: Option<usize>, max: Option<usize>) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let len = value.trim().chars().count();
        let too_short = min.map_or(false, |m| len < m);
        let too_long = max.map_or(false, |m| len > m);
        if !too_short && !too_long {
            return Some(ValidationResult::success());
        }
        let message = match (min, max) {
            (Some(a), Some(b)) if a == b => format!("{field} must be exactly {a} characters."),
            (Some(a), Some(b)) => format!("{field} must be between {a} and {b} characters."),
            (Some(a), None) => format!("{field} must be at least {a} characters."),
            (None, Some(b)) => format!("{field} must be at most {b} characters."),
            (None, None) => format!("{field} has an invalid length."),
        };
        Some(ValidationResult::failure(message, field.as_str(), codes::INVALID_LENGTH))
    })
}

/// Only ASCII digits (after trimming).
pub fn digits_only(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        Some(if value.trim().chars().all(|c| c.is_ascii_digit()) {
            ValidationResult::success()
        } else {
            ValidationResult::failure(
                format!("{field} must contain only digits."),
                field.as_str(),
                codes::INVALID_FORMAT,
            )
        })
    })
}

/// The trimmed value must match `pattern`.
pub fn matches(field: &str, pattern: Regex, expected: &str, code: &'static str) -> ValueValidator<str> {
    let field = field.to_string();
    let expected = expected.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        Some(guarded_result(&pattern, value.trim(), &field, || {
            ValidationResult::failure(
                format!("{field} must be {expected}."),
                field.as_str(),
                code,
            )
        }))
    })
}

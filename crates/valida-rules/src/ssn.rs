//! US Social Security Numbers: `AAA-GG-SSSS`.
//!
//! Structural rules follow the SSA's randomisation-era assignment rules:
//! area `000`, `666` and `900`-`999` are never issued, nor group `00` or
//! serial `0000`. A handful of numbers published in advertising are also
//! rejected.

use once_cell::sync::Lazy;
use regex::Regex;

use valida_core::{codes, validator, ValidationResult, ValueValidator};

use crate::normalize::{digits, is_blank};
use crate::pattern::{compile, guarded_result};

static SSN_SHAPE: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]{3}-?[0-9]{2}-?[0-9]{4}$"));

const ADVERTISING_NUMBERS: [&str; 3] = ["078051120", "219099999", "457555462"];

/// The three SSN components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SsnParts<'a> {
    pub area: &'a str,
    pub group: &'a str,
    pub serial: &'a str,
}

/// Canonical `AAA-GG-SSSS` form, or `None` if `input` is not SSN-shaped.
pub fn normalize(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if !SSN_SHAPE.is_match(trimmed) {
        return None;
    }
    let d = digits(trimmed);
    Some(format!("{}-{}-{}", &d[..3], &d[3..5], &d[5..]))
}

/// Split a nine-digit string into its components.
pub fn split(nine_digits: &str) -> Option<SsnParts<'_>> {
    if nine_digits.len() != 9 || !nine_digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(SsnParts {
        area: &nine_digits[..3],
        group: &nine_digits[3..5],
        serial: &nine_digits[5..],
    })
}

/// Digits of a shaped SSN, or `None` if the input is not SSN-shaped.
fn shaped_digits(value: &str) -> Option<String> {
    let trimmed = value.trim();
    SSN_SHAPE.is_match(trimmed).then(|| digits(trimmed))
}

fn component_check<F>(field: &str, code: &'static str, check: F) -> ValueValidator<str>
where
    F: Fn(SsnParts<'_>) -> Option<String> + Send + Sync + 'static,
{
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let d = shaped_digits(value)?;
        let parts = split(&d)?;
        Some(match check(parts) {
            None => ValidationResult::success(),
            Some(problem) => ValidationResult::failure(format!("{field} {problem}."), field.as_str(), code),
        })
    })
}

/// `AAA-GG-SSSS` or nine digits.
pub fn validate_format(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        Some(guarded_result(&SSN_SHAPE, value.trim(), &field, || {
            ValidationResult::failure(
                format!("{field} must be in the format AAA-GG-SSSS."),
                field.as_str(),
                codes::INVALID_SSN_FORMAT,
            )
        }))
    })
}

pub fn validate_area(field: &str) -> ValueValidator<str> {
    component_check(field, codes::INVALID_AREA_NUMBER, |p| {
        let invalid = p.area == "000" || p.area == "666" || p.area.starts_with('9');
        invalid.then(|| format!("has an invalid area number {}", p.area))
    })
}

pub fn validate_group(field: &str) -> ValueValidator<str> {
    component_check(field, codes::INVALID_GROUP_NUMBER, |p| {
        (p.group == "00").then(|| format!("has an invalid group number {}", p.group))
    })
}

pub fn validate_serial(field: &str) -> ValueValidator<str> {
    component_check(field, codes::INVALID_SERIAL_NUMBER, |p| {
        (p.serial == "0000").then(|| format!("has an invalid serial number {}", p.serial))
    })
}

/// Known advertising numbers, including the `987-65-4320`..`4329` block.
pub fn is_advertising_number(nine_digits: &str) -> bool {
    ADVERTISING_NUMBERS.contains(&nine_digits)
        || (nine_digits.len() == 9 && nine_digits.starts_with("98765432"))
}

pub fn validate_not_advertising(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let d = shaped_digits(value)?;
        Some(if is_advertising_number(&d) {
            ValidationResult::failure(
                format!("{field} is a number reserved for advertising."),
                field.as_str(),
                codes::ADVERTISING_NUMBER,
            )
        } else {
            ValidationResult::success()
        })
    })
}

/// Every SSN rule, in reporting order.
pub fn chain(field: &str) -> Vec<ValueValidator<str>> {
    vec![
        validate_format(field),
        validate_area(field),
        validate_group(field),
        validate_serial(field),
        validate_not_advertising(field),
    ]
}

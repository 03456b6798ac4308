//! ABA routing transit numbers (United States).
//!
//! Nine digits. The first two form the Federal Reserve routing symbol,
//! which must fall in one of the assigned ranges; the ninth is an ABA check
//! digit over the first eight.

use once_cell::sync::Lazy;
use regex::Regex;

use valida_core::{codes, validator, ValidationResult, ValueValidator};

use crate::checksum;
use crate::normalize::{compact, is_blank};
use crate::pattern::{compile, guarded_match, too_long, Guarded};

static ROUTING_SHAPE: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]{9}$"));

pub fn normalize(input: &str) -> String {
    compact(input)
}

/// Whether the two-digit prefix is an assigned Federal Reserve symbol:
/// 00-12 (government and regular), 21-32 (thrift), 61-72 (electronic) or
/// 80 (traveller's cheques).
pub fn is_assigned_prefix(prefix: u32) -> bool {
    matches!(prefix, 0..=12 | 21..=32 | 61..=72 | 80)
}

pub fn validate_format(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let normalized = normalize(value);
        let shaped = match guarded_match(&ROUTING_SHAPE, &normalized) {
            Guarded::Match => true,
            Guarded::NoMatch => false,
            Guarded::TooLong => return Some(too_long(&field)),
        };
        let prefix_ok = shaped
            && normalized[..2]
                .parse::<u32>()
                .map_or(false, is_assigned_prefix);
        Some(if prefix_ok {
            ValidationResult::success()
        } else {
            ValidationResult::failure(
                format!("{field} must be 9 digits starting with a valid Federal Reserve routing symbol."),
                field.as_str(),
                codes::INVALID_FORMAT,
            )
        })
    })
}

/// The ABA check digit must verify. Only runs on 9-digit input.
pub fn validate_checksum(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let normalized = normalize(value);
        if !ROUTING_SHAPE.is_match(&normalized) {
            return None;
        }
        Some(if checksum::aba_is_valid(&normalized) {
            ValidationResult::success()
        } else {
            ValidationResult::failure(
                format!("{field} has an invalid check digit."),
                field.as_str(),
                codes::INVALID_CHECKSUM,
            )
        })
    })
}

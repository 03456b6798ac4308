//! SWIFT/BIC codes (ISO 9362).
//!
//! `BBBB CC LL [bbb]`: 4-letter institution code, 2-letter country code,
//! 2-character location code, optional 3-character branch code.

use once_cell::sync::Lazy;
use regex::Regex;

use valida_core::{codes, validator, CountryCode, ValidationResult, ValueValidator};

use crate::normalize::{compact, is_blank};
use crate::pattern::{compile, guarded_result};

static SWIFT_SHAPE: Lazy<Regex> =
    Lazy::new(|| compile(r"^[A-Z]{4}[A-Z]{2}[A-Z0-9]{2}([A-Z0-9]{3})?$"));

/// Branch code implied by an 8-character BIC.
pub const PRIMARY_OFFICE_BRANCH: &str = "XXX";

pub fn normalize(input: &str) -> String {
    compact(input)
}

/// Whether a compacted value has the BIC8/BIC11 shape.
pub fn is_well_formed(normalized: &str) -> bool {
    SWIFT_SHAPE.is_match(normalized)
}

pub fn validate_format(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let normalized = normalize(value);
        Some(guarded_result(&SWIFT_SHAPE, &normalized, &field, || {
            ValidationResult::failure(
                format!(
                    "{field} must be 8 or 11 characters: a 4-letter bank code, a 2-letter country code, a 2-character location code and an optional 3-character branch code."
                ),
                field.as_str(),
                codes::INVALID_SWIFT_FORMAT,
            )
        }))
    })
}

/// Characters 5-6 must name `country`. Wildcards and malformed codes pass.
pub fn validate_country(field: &str, country: CountryCode) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) || country.is_wildcard() {
            return None;
        }
        let normalized = normalize(value);
        if !is_well_formed(&normalized) {
            return None;
        }
        let embedded = &normalized[4..6];
        Some(if embedded == country.alpha2() {
            ValidationResult::success()
        } else {
            ValidationResult::failure(
                format!(
                    "{field} belongs to country {embedded}, expected {} ({}).",
                    country.name(),
                    country.alpha2()
                ),
                field.as_str(),
                codes::SWIFT_COUNTRY_MISMATCH,
            )
        })
    })
}

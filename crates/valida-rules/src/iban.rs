//! # IBAN Validators (ISO 13616)
//!
//! An IBAN is a two-letter country code, two check digits, and a
//! country-specific BBAN of up to 30 alphanumerics. The validators here
//! split the concerns so a single malformed IBAN can report each problem:
//!
//! - [`validate_format`]: overall shape.
//! - [`validate_length`]: total length for the issuing country.
//! - [`validate_bban_structure`]: BBAN shape for the issuing country.
//! - [`validate_checksum`]: mod-97 check digits.
//! - [`validate_country_matches`]: prefix agrees with an expected country.
//!
//! All validators compact their input (strip spaces/hyphens, uppercase)
//! and treat blank input as not applicable.

use once_cell::sync::Lazy;
use regex::Regex;

use valida_core::{codes, validator, CountryCode, ValidationResult, ValueValidator};

use crate::bban;
use crate::checksum;
use crate::normalize::{compact, is_blank};
use crate::pattern::{compile, guarded_result};

static IBAN_SHAPE: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{11,30}$"));

/// Canonical (compacted, uppercase) form of an IBAN.
pub fn normalize(input: &str) -> String {
    compact(input)
}

/// Whether a compacted value has the overall IBAN shape.
pub fn looks_like_iban(normalized: &str) -> bool {
    IBAN_SHAPE.is_match(normalized)
}

/// The issuing country of a compacted IBAN, if it is a known country.
pub fn country_of(normalized: &str) -> Option<CountryCode> {
    normalized.get(..2).and_then(CountryCode::from_alpha2)
}

pub fn validate_format(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let normalized = normalize(value);
        Some(guarded_result(&IBAN_SHAPE, &normalized, &field, || {
            ValidationResult::failure(
                format!(
                    "{field} must be a 2-letter country code, 2 check digits and up to 30 alphanumeric characters."
                ),
                field.as_str(),
                codes::INVALID_IBAN_FORMAT,
            )
        }))
    })
}

/// Total length must equal the registered IBAN length.
///
/// For a real `country` its length is used; for wildcards the length of the
/// country named in the IBAN prefix is used. Unknown prefixes and values
/// without the IBAN shape pass.
pub fn validate_length(field: &str, country: CountryCode) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let normalized = normalize(value);
        if !looks_like_iban(&normalized) {
            return None;
        }
        let issuing = if country.is_wildcard() {
            country_of(&normalized)?
        } else {
            country
        };
        let expected = issuing.iban_length()?;
        let actual = normalized.chars().count();
        Some(if actual == expected {
            ValidationResult::success()
        } else {
            ValidationResult::failure(
                format!(
                    "{field} must be {expected} characters for {}, got {actual}.",
                    issuing.name()
                ),
                field.as_str(),
                codes::INVALID_IBAN_LENGTH,
            )
        })
    })
}

/// The BBAN part must match the structure registered for the prefix country.
pub fn validate_bban_structure(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let normalized = normalize(value);
        if !looks_like_iban(&normalized) {
            return None;
        }
        let issuing = country_of(&normalized)?;
        let rule = bban::BBAN_FORMATS.rule(issuing)?;
        let bban = &normalized[4..];
        Some(if rule.matches(bban).is_match() {
            ValidationResult::success()
        } else {
            ValidationResult::failure(
                format!(
                    "{field} has an invalid {} account part. Expected {}.",
                    issuing.name(),
                    rule.expected
                ),
                field.as_str(),
                codes::INVALID_BBAN_FORMAT,
            )
        })
    })
}

/// Mod-97 check digits must verify.
///
/// Only runs on IBAN-shaped values; shape problems are reported by
/// [`validate_format`].
pub fn validate_checksum(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let normalized = normalize(value);
        if !looks_like_iban(&normalized) {
            return None;
        }
        let remainder = checksum::iban_remainder(&normalized)?;
        Some(if remainder == 1 {
            ValidationResult::success()
        } else {
            ValidationResult::failure(
                format!("{field} has an invalid checksum."),
                field.as_str(),
                codes::INVALID_IBAN_CHECKSUM,
            )
        })
    })
}

/// The IBAN prefix must name `country`. Wildcards pass.
pub fn validate_country_matches(field: &str, country: CountryCode) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) || country.is_wildcard() {
            return None;
        }
        let normalized = normalize(value);
        let prefix = normalized.get(..2)?;
        Some(if prefix == country.alpha2() {
            ValidationResult::success()
        } else {
            ValidationResult::failure(
                format!(
                    "{field} is issued in {prefix} but {} ({}) was expected.",
                    country.name(),
                    country.alpha2()
                ),
                field.as_str(),
                codes::IBAN_COUNTRY_MISMATCH,
            )
        })
    })
}

/// The full IBAN chain for one field, in reporting order.
pub fn chain(field: &str, country: CountryCode) -> Vec<ValueValidator<str>> {
    vec![
        validate_format(field),
        validate_country_matches(field, country),
        validate_length(field, country),
        validate_bban_structure(field),
        validate_checksum(field),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use valida_core::run_validators;

    fn run(value: &str, country: CountryCode) -> ValidationResult {
        run_validators(value, &chain("Iban", country))
    }

    #[test]
    fn valid_ibans() {
        assert!(run("DE89370400440532013000", CountryCode::Germany).is_valid());
        assert!(run("gb82 west 1234 5698 7654 32", CountryCode::All).is_valid());
        assert!(run("FR14 2004 1010 0505 0001 3M02 606", CountryCode::Unknown).is_valid());
    }

    #[test]
    fn bad_checksum() {
        let r = run("DE89370400440532013001", CountryCode::Germany);
        assert_eq!(r.codes(), vec!["InvalidIbanChecksum"]);
    }

    #[test]
    fn wrong_length_for_country() {
        let r = run("DE8937040044053201300", CountryCode::Germany);
        assert!(r.has_code(codes::INVALID_IBAN_LENGTH));
        assert!(r.has_code(codes::INVALID_BBAN_FORMAT));
    }

    #[test]
    fn country_mismatch() {
        let r = run("GB82WEST12345698765432", CountryCode::Germany);
        assert_eq!(r.codes(), vec!["IbanCountryMismatch"]);
    }

    #[test]
    fn malformed_reports_format_only() {
        let r = run("NOT-AN-IBAN!", CountryCode::All);
        assert_eq!(r.codes(), vec!["InvalidIbanFormat"]);
    }

    #[test]
    fn blank_is_not_applicable() {
        assert!(run("", CountryCode::Germany).is_valid());
    }

    #[test]
    fn country_of_prefix() {
        assert_eq!(country_of("DE89"), Some(CountryCode::Germany));
        assert_eq!(country_of("QQ12"), None);
        assert_eq!(country_of("D"), None);
    }
}

//! Domestic bank account numbers.
//!
//! A bank account number is either a domestic account number in the
//! country's local layout, or an IBAN. IBAN-shaped input is skipped by the
//! domestic table and validated by the IBAN rules instead (see
//! [`validate_iban_when_present`]).

use once_cell::sync::Lazy;
use regex::Regex;

use valida_core::{codes, run_validators, validator, CountryCode, ValidationResult, ValueValidator};

use crate::iban;
use crate::normalize::{compact, is_blank};
use crate::pattern::{compile, guarded_result, CountryTable, Guarded};

pub(crate) static ACCOUNT_FORMATS: Lazy<CountryTable> = Lazy::new(|| {
    use CountryCode::*;
    CountryTable::new(
        "bank account number",
        &[
            (UnitedKingdom, r"^[0-9]{8}$", "8 digits"),
            (UnitedStates, r"^[0-9]{4,17}$", "4 to 17 digits"),
            (Canada, r"^[0-9]{7,12}$", "7 to 12 digits"),
            (Australia, r"^[0-9]{6,10}$", "6 to 10 digits"),
            (NewZealand, r"^[0-9]{15,16}$", "15 or 16 digits"),
            (India, r"^[0-9]{9,18}$", "9 to 18 digits"),
            (Japan, r"^[0-9]{7}$", "7 digits"),
            (China, r"^[0-9]{16,19}$", "16 to 19 digits"),
            (Mexico, r"^[0-9]{18}$", "an 18-digit CLABE"),
            (Singapore, r"^[0-9]{9,12}$", "9 to 12 digits"),
            (HongKong, r"^[0-9]{9,12}$", "9 to 12 digits"),
            (SouthAfrica, r"^[0-9]{9,11}$", "9 to 11 digits"),
            (SouthKorea, r"^[0-9]{10,14}$", "10 to 14 digits"),
            (Ireland, r"^[0-9]{8}$", "8 digits"),
            (Germany, r"^[0-9]{1,10}$", "up to 10 digits"),
            (France, r"^[0-9A-Z]{11}$", "11 alphanumeric characters"),
            (Spain, r"^[0-9]{20}$", "20 digits"),
            (Netherlands, r"^[0-9]{9,10}$", "9 or 10 digits"),
        ],
    )
});

static ACCOUNT_CHARS: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Z0-9]{4,34}$"));

/// Canonical (compacted, uppercase) form of an account number.
pub fn normalize(input: &str) -> String {
    compact(input)
}

/// The number must match `country`'s domestic layout.
///
/// IBAN-shaped and over-length input is not applicable here.
pub fn validate_country_format(field: &str, country: CountryCode) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let normalized = normalize(value);
        if iban::looks_like_iban(&normalized) {
            return None;
        }
        let rule = ACCOUNT_FORMATS.rule(country)?;
        match rule.matches(&normalized) {
            Guarded::Match => Some(ValidationResult::success()),
            Guarded::NoMatch => Some(ValidationResult::failure(
                format!(
                    "{field} is not a valid {} {}. Expected {}.",
                    country.name(),
                    ACCOUNT_FORMATS.subject(),
                    rule.expected
                ),
                field.as_str(),
                codes::INVALID_COUNTRY_ACCOUNT_NUMBER_FORMAT,
            )),
            Guarded::TooLong => None,
        }
    })
}

/// 4 to 34 alphanumeric characters after compaction.
pub fn validate_length(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let normalized = normalize(value);
        Some(guarded_result(&ACCOUNT_CHARS, &normalized, &field, || {
            ValidationResult::failure(
                format!("{field} must be between 4 and 34 letters or digits."),
                field.as_str(),
                codes::INVALID_LENGTH,
            )
        }))
    })
}

/// Runs the full IBAN chain when the input is IBAN-shaped; otherwise not
/// applicable.
pub fn validate_iban_when_present(field: &str, country: CountryCode) -> ValueValidator<str> {
    let chain = iban::chain(field, country);
    validator(move |value: &str| {
        let normalized = normalize(value);
        if !iban::looks_like_iban(&normalized) {
            return None;
        }
        Some(run_validators(normalized.as_str(), &chain))
    })
}

/// Mask all but the last four characters of a normalised account number.
pub fn mask(normalized: &str) -> String {
    let chars: Vec<char> = normalized.chars().collect();
    let keep = chars.len().min(4);
    let hidden = chars.len() - keep;
    std::iter::repeat('*')
        .take(hidden)
        .chain(chars[hidden..].iter().copied())
        .collect()
}

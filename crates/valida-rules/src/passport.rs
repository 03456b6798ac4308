//! Passport numbers.
//!
//! [`validate_format`] applies the ICAO 9303 document-number baseline (5 to
//! 20 letters or digits). [`validate_country_format`] layers the issuing
//! country's own layout on top.

use once_cell::sync::Lazy;
use regex::Regex;

use valida_core::{codes, validator, CountryCode, ValidationResult, ValueValidator};

use crate::normalize::{compact, is_blank};
use crate::pattern::{compile, country_format, guarded_result, CountryTable};

static PASSPORT_SHAPE: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Z0-9]{5,20}$"));

pub(crate) static PASSPORT_FORMATS: Lazy<CountryTable> = Lazy::new(|| {
    use CountryCode::*;
    CountryTable::new(
        "passport number",
        &[
            (UnitedStates, r"^[A-Z0-9][0-9]{8}$", "9 characters: an optional letter followed by digits"),
            (UnitedKingdom, r"^[0-9]{9}$", "9 digits"),
            (Canada, r"^[A-Z]{2}[0-9]{6}$", "2 letters and 6 digits"),
            (Australia, r"^[A-Z]{1,2}[0-9]{7}$", "1 or 2 letters and 7 digits"),
            (Germany, r"^[CFGHJKLMNPRTVWXYZ0-9]{9}$", "9 characters from the German document alphabet"),
            (France, r"^[0-9]{2}[A-Z]{2}[0-9]{5}$", "2 digits, 2 letters and 5 digits"),
            (India, r"^[A-Z][0-9]{7}$", "a letter and 7 digits"),
            (China, r"^(E[A-Z0-9]|[GDSP][0-9])[0-9]{7}$", "a series letter and 8 characters"),
            (Japan, r"^[A-Z]{2}[0-9]{7}$", "2 letters and 7 digits"),
            (Ireland, r"^[A-Z0-9]{2}[0-9]{7}$", "2 characters and 7 digits"),
            (Italy, r"^[A-Z0-9]{2}[0-9]{7}$", "2 characters and 7 digits"),
            (Spain, r"^[A-Z0-9]{2,3}[0-9]{6}$", "2 or 3 characters and 6 digits"),
            (Netherlands, r"^[A-NP-Z]{2}[A-NP-Z0-9]{6}[0-9]$", "9 characters without the letter O"),
            (Brazil, r"^[A-Z]{2}[0-9]{6}$", "2 letters and 6 digits"),
            (Mexico, r"^[A-Z][0-9]{8}$", "a letter and 8 digits"),
            (NewZealand, r"^[A-Z]{2}[0-9]{6}$", "2 letters and 6 digits"),
            (Singapore, r"^[A-Z][0-9]{7}[A-Z]$", "a letter, 7 digits and a letter"),
            (SouthKorea, r"^[MSRGD][0-9]{3}[A-Z0-9][0-9]{4}$", "a type letter and 8 characters"),
            (Pakistan, r"^[A-Z]{2}[0-9]{7}$", "2 letters and 7 digits"),
            (SouthAfrica, r"^[A-Z][0-9]{8}$", "a letter and 8 digits"),
            (Switzerland, r"^[A-Z][0-9]{7}$", "a letter and 7 digits"),
            (Sweden, r"^[0-9]{8}$", "8 digits"),
            (Norway, r"^[A-Z]{2}[A-Z0-9][0-9]{6}$", "2 letters and 7 characters"),
        ],
    )
});

pub fn normalize(input: &str) -> String {
    compact(input)
}

/// 5 to 20 letters or digits, any issuing country.
pub fn validate_format(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let normalized = normalize(value);
        Some(guarded_result(&PASSPORT_SHAPE, &normalized, &field, || {
            ValidationResult::failure(
                format!("{field} must be 5 to 20 letters or digits."),
                field.as_str(),
                codes::INVALID_PASSPORT_FORMAT,
            )
        }))
    })
}

pub fn validate_country_format(field: &str, country: CountryCode) -> ValueValidator<str> {
    country_format(&PASSPORT_FORMATS, field, country, codes::INVALID_PASSPORT_FORMAT, normalize)
}

//! # Telephone Numbers
//!
//! Numbers are normalised by removing spaces, hyphens, dots and
//! parentheses. [`validate_format`] checks the E.164 envelope (optional
//! `+`, 7 to 15 digits). [`validate_country_format`] additionally strips an
//! international prefix (`+cc` or `00cc`) that must match the country's
//! calling code, then matches the remaining national number.

use once_cell::sync::Lazy;
use regex::Regex;

use valida_core::{codes, validator, CountryCode, ValidationResult, ValueValidator};

use crate::normalize::is_blank;
use crate::pattern::{compile, guarded_result, CountryTable, Guarded};

static E164_ENVELOPE: Lazy<Regex> = Lazy::new(|| compile(r"^\+?[0-9]{7,15}$"));

pub(crate) static NATIONAL_FORMATS: Lazy<CountryTable> = Lazy::new(|| {
    use CountryCode::*;
    CountryTable::new(
        "phone number",
        &[
            (UnitedStates, r"^1?[2-9][0-9]{2}[2-9][0-9]{6}$", "a 10-digit NANP number"),
            (Canada, r"^1?[2-9][0-9]{2}[2-9][0-9]{6}$", "a 10-digit NANP number"),
            (UnitedKingdom, r"^0?[1-9][0-9]{8,9}$", "10 or 11 digits including the leading 0"),
            (Germany, r"^0?[1-9][0-9]{5,13}$", "6 to 14 digits after the leading 0"),
            (France, r"^0?[1-9][0-9]{8}$", "10 digits including the leading 0"),
            (Australia, r"^0?[2-478][0-9]{8}$", "10 digits including the leading 0"),
            (India, r"^0?[1-9][0-9]{9}$", "10 digits"),
            (Japan, r"^0?[1-9][0-9]{8,9}$", "10 or 11 digits including the leading 0"),
            (China, r"^0?[1-9][0-9]{8,10}$", "9 to 11 digits"),
            (Ireland, r"^0?[1-9][0-9]{6,9}$", "7 to 10 digits after the leading 0"),
            (Netherlands, r"^0?[1-9][0-9]{8}$", "10 digits including the leading 0"),
            (Spain, r"^[6-9][0-9]{8}$", "9 digits starting with 6, 7, 8 or 9"),
            (Italy, r"^[03][0-9]{5,10}$", "6 to 11 digits starting with 0 or 3"),
            (Pakistan, r"^0?[1-9][0-9]{7,9}$", "8 to 10 digits after the leading 0"),
            (Singapore, r"^[3689][0-9]{7}$", "8 digits"),
            (HongKong, r"^[2-9][0-9]{7}$", "8 digits"),
            (Brazil, r"^0?[1-9]{2}9?[0-9]{8}$", "a 2-digit area code and 8 or 9 digits"),
            (Mexico, r"^[0-9]{10}$", "10 digits"),
            (SouthAfrica, r"^0?[1-8][0-9]{8}$", "10 digits including the leading 0"),
            (NewZealand, r"^0?[2-9][0-9]{7,9}$", "8 to 10 digits after the leading 0"),
            (UnitedArabEmirates, r"^0?[2-9][0-9]{7,8}$", "8 or 9 digits after the leading 0"),
            (SaudiArabia, r"^0?[1-9][0-9]{7,8}$", "8 or 9 digits after the leading 0"),
            (Switzerland, r"^0?[1-9][0-9]{8}$", "10 digits including the leading 0"),
            (Sweden, r"^0?[1-9][0-9]{6,9}$", "7 to 10 digits after the leading 0"),
            (Norway, r"^[2-9][0-9]{7}$", "8 digits"),
            (SouthKorea, r"^0?[1-9][0-9]{7,9}$", "8 to 10 digits after the leading 0"),
        ],
    )
});

/// Remove formatting characters, keeping digits and a leading `+`.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '.' | '(' | ')'))
        .collect()
}

/// The domestic trunk prefix dropped when writing a number in E.164.
pub fn trunk_prefix(country: CountryCode) -> Option<char> {
    use CountryCode::*;
    match country {
        UnitedStates | Canada => Some('1'),
        Spain | Italy | Singapore | HongKong | Mexico | Norway => None,
        _ if country.is_wildcard() => None,
        _ => Some('0'),
    }
}

/// Strip an international prefix for `country`.
///
/// `None` when the number carries an international prefix for a different
/// calling code, or `country` has no calling code.
pub fn national_number(country: CountryCode, normalized: &str) -> Option<String> {
    let calling = country.calling_code()?;
    let international = normalized
        .strip_prefix('+')
        .or_else(|| normalized.strip_prefix("00"));
    match international {
        Some(rest) => rest.strip_prefix(calling).map(str::to_string),
        None => Some(normalized.to_string()),
    }
}

/// Canonical E.164 rendering (`+<cc><national>`) for a number already valid
/// for `country`.
pub fn to_e164(country: CountryCode, normalized: &str) -> Option<String> {
    let calling = country.calling_code()?;
    let national = national_number(country, normalized)?;
    let national = match trunk_prefix(country) {
        Some(trunk) => national.strip_prefix(trunk).unwrap_or(national.as_str()).to_string(),
        None => national,
    };
    Some(format!("+{calling}{national}"))
}

pub fn validate_format(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let normalized = normalize(value);
        Some(guarded_result(&E164_ENVELOPE, &normalized, &field, || {
            ValidationResult::failure(
                format!("{field} must contain 7 to 15 digits with an optional leading +."),
                field.as_str(),
                codes::INVALID_PHONE_FORMAT,
            )
        }))
    })
}

pub fn validate_country_format(field: &str, country: CountryCode) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let rule = NATIONAL_FORMATS.rule(country)?;
        let normalized = normalize(value);
        let failure = |expected: &str| {
            ValidationResult::failure(
                format!(
                    "{field} is not a valid {} {}. Expected {expected}.",
                    country.name(),
                    NATIONAL_FORMATS.subject()
                ),
                field.as_str(),
                codes::INVALID_COUNTRY_PHONE_FORMAT,
            )
        };
        let Some(national) = national_number(country, &normalized) else {
            let calling = country.calling_code().unwrap_or_default();
            return Some(failure(&format!("the international prefix +{calling}")));
        };
        match rule.matches(&national) {
            Guarded::Match => Some(ValidationResult::success()),
            Guarded::NoMatch => Some(failure(rule.expected)),
            Guarded::TooLong => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope() {
        let v = validate_format("Phone");
        assert!(v("+44 20 7946 0958").unwrap().is_valid());
        assert!(v("(555) 123-4567").unwrap().is_valid());
        assert_eq!(v("12345").unwrap().codes(), vec!["InvalidPhoneFormat"]);
        assert!(!v("+1 555 CALL NOW").unwrap().is_valid());
    }

    #[test]
    fn national_numbers() {
        let us = validate_country_format("Phone", CountryCode::UnitedStates);
        assert!(us("(212) 555-0123").unwrap().is_valid());
        assert!(us("+1 212 555 0123").unwrap().is_valid());
        assert!(!us("(112) 555-0123").unwrap().is_valid());

        let gb = validate_country_format("Phone", CountryCode::UnitedKingdom);
        assert!(gb("020 7946 0958").unwrap().is_valid());
        assert!(gb("0044 20 7946 0958").unwrap().is_valid());
    }

    #[test]
    fn foreign_prefix_is_rejected() {
        let gb = validate_country_format("Phone", CountryCode::UnitedKingdom);
        let r = gb("+49 30 1234567").unwrap();
        assert_eq!(r.codes(), vec!["InvalidCountryPhoneFormat"]);
        assert!(r.errors()[0].message().contains("+44"));
    }

    #[test]
    fn e164_rendering() {
        assert_eq!(
            to_e164(CountryCode::UnitedKingdom, "02079460958").as_deref(),
            Some("+442079460958")
        );
        assert_eq!(
            to_e164(CountryCode::UnitedStates, "+12125550123").as_deref(),
            Some("+12125550123")
        );
        assert_eq!(to_e164(CountryCode::Spain, "612345678").as_deref(), Some("+34612345678"));
        assert_eq!(to_e164(CountryCode::All, "612345678"), None);
    }
}

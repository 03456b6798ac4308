use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, CountryCode, TryCreate, ValidaError, ValidatedString,
    ValidatedValue,
};
use valida_rules::{common, phone};

use crate::macros::string_value_object;

const FIELD: &str = "PhoneNumber";

/// A telephone number for a given country, stored in E.164 form so that
/// national and international notations of one number are equal
/// (`"020 7946 0958"` and `"+44 (20) 7946-0958"` both become
/// `"+442079460958"`). Wildcard countries have no calling code; their
/// numbers are stored with formatting characters removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PhoneNumber {
    country: CountryCode,
    #[serde(rename = "number")]
    inner: ValidatedString,
}

/// E.164 caps a number at 15 digits after the `+`.
const MAX_E164_LENGTH: usize = 16;

fn canonical(country: CountryCode, value: &str) -> String {
    let normalized = phone::normalize(value);
    phone::to_e164(country, &normalized)
        .filter(|e164| e164.len() <= MAX_E164_LENGTH)
        .unwrap_or(normalized)
}

impl PhoneNumber {
    pub fn try_create(country: CountryCode, value: &str, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        let validators = vec![
            common::required(field),
            phone::validate_format(field),
            phone::validate_country_format(field, country),
        ];
        let result = run_validators(value, &validators);
        resolve("PhoneNumber", result, || Self {
            country,
            inner: ValidatedValue::new(canonical(country, value), validators),
        })
    }

    pub fn create(country: CountryCode, value: &str) -> Result<Self, ValidaError> {
        into_created(Self::try_create(country, value, None))
    }

    pub fn country(&self) -> CountryCode {
        self.country
    }

    /// International calling code without the `+`, e.g. `"44"`.
    pub fn calling_code(&self) -> Option<&'static str> {
        self.country.calling_code()
    }

    /// E.164 rendering, e.g. `"+442079460958"`. `None` for wildcard
    /// countries, which have no calling code.
    pub fn e164(&self) -> Option<String> {
        phone::to_e164(self.country, self.as_str())
    }
}

string_value_object!(PhoneNumber);

#[cfg(test)]
mod tests {
    use super::*;
    use valida_core::ValidatedValueObject;

    #[test]
    fn uk_number_in_e164() {
        let n = PhoneNumber::create(CountryCode::UnitedKingdom, "020 7946 0958").unwrap();
        assert_eq!(n.as_str(), "+442079460958");
        assert_eq!(n.calling_code(), Some("44"));
        assert_eq!(n.e164().as_deref(), Some("+442079460958"));
        assert!(n.validate().is_valid());
    }

    #[test]
    fn notation_does_not_affect_identity() {
        let national = PhoneNumber::create(CountryCode::UnitedKingdom, "020 7946 0958").unwrap();
        let international = PhoneNumber::create(CountryCode::UnitedKingdom, "+44 20 7946 0958").unwrap();
        let dialled = PhoneNumber::create(CountryCode::UnitedKingdom, "0044 (20) 7946-0958").unwrap();
        assert_eq!(national, international);
        assert_eq!(international, dialled);

        let us = PhoneNumber::create(CountryCode::UnitedStates, "212-555-0123").unwrap();
        let us_intl = PhoneNumber::create(CountryCode::UnitedStates, "+1 212 555 0123").unwrap();
        assert_eq!(us, us_intl);
        assert!(us.validate().is_valid());
    }

    #[test]
    fn us_number_in_e164() {
        let n = PhoneNumber::create(CountryCode::UnitedStates, "+1 (212) 555-0123").unwrap();
        assert_eq!(n.as_str(), "+12125550123");
        assert_eq!(n.e164().as_deref(), Some("+12125550123"));
    }

    #[test]
    fn wrong_calling_code() {
        let (result, n) = PhoneNumber::try_create(CountryCode::UnitedKingdom, "+33 1 23 45 67 89", None);
        assert!(n.is_none());
        assert_eq!(result.codes(), vec!["InvalidCountryPhoneFormat"]);
        assert!(result.errors()[0].message().contains("+44"));
    }

    #[test]
    fn wildcard_checks_envelope_only() {
        let n = PhoneNumber::create(CountryCode::All, "+81 3 1234 5678").unwrap();
        assert_eq!(n.as_str(), "+81312345678");
        let (result, _) = PhoneNumber::try_create(CountryCode::All, "12-34", None);
        assert_eq!(result.codes(), vec!["InvalidPhoneFormat"]);
    }
}

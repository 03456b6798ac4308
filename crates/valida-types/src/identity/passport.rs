use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, CountryCode, TryCreate, ValidaError, ValidatedString,
    ValidatedValue,
};
use valida_rules::{common, passport};

use crate::macros::string_value_object;

const FIELD: &str = "PassportNumber";

/// A passport number together with its issuing country.
///
/// The same document number issued by two countries identifies two
/// different passports, so the country takes part in equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Passport {
    country: CountryCode,
    #[serde(rename = "number")]
    inner: ValidatedString,
}

impl Passport {
    pub fn try_create(country: CountryCode, number: &str, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        let validators = vec![
            common::required(field),
            passport::validate_format(field),
            passport::validate_country_format(field, country),
        ];
        let result = run_validators(number, &validators);
        resolve("Passport", result, || Self {
            country,
            inner: ValidatedValue::new(passport::normalize(number), validators),
        })
    }

    pub fn create(country: CountryCode, number: &str) -> Result<Self, ValidaError> {
        into_created(Self::try_create(country, number, None))
    }

    pub fn country(&self) -> CountryCode {
        self.country
    }
}

string_value_object!(Passport);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_takes_part_in_equality() {
        let gb = Passport::create(CountryCode::UnitedKingdom, "123456789").unwrap();
        let us = Passport::create(CountryCode::UnitedStates, "123456789").unwrap();
        assert_eq!(gb.as_str(), us.as_str());
        assert_ne!(gb, us);
        assert_eq!(gb, Passport::create(CountryCode::UnitedKingdom, "123 456 789").unwrap());
    }

    #[test]
    fn generic_and_country_rules_both_report() {
        let (result, passport) = Passport::try_create(CountryCode::UnitedKingdom, "AB1", None);
        assert!(passport.is_none());
        assert_eq!(result.codes(), vec!["InvalidPassportFormat", "InvalidPassportFormat"]);
    }

    #[test]
    fn unlisted_country_uses_generic_rule() {
        assert!(Passport::create(CountryCode::Greece, "AE1234567").is_ok());
        assert!(Passport::create(CountryCode::Greece, "A#1").is_err());
    }
}

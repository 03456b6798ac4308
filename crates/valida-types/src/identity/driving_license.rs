use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, CountryCode, TryCreate, ValidaError, ValidatedString,
    ValidatedValue,
};
use valida_rules::{common, driving_license};

use crate::macros::string_value_object;

const FIELD: &str = "LicenseNumber";
const MAX_LENGTH: usize = 20;

/// A driving licence number together with its issuing country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DrivingLicenseNumber {
    country: CountryCode,
    #[serde(rename = "number")]
    inner: ValidatedString,
}

impl DrivingLicenseNumber {
    pub fn try_create(country: CountryCode, value: &str, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        let validators = vec![
            common::required(field),
            common::max_length(field, MAX_LENGTH),
            driving_license::validate_country_format(field, country),
        ];
        let result = run_validators(value, &validators);
        resolve("DrivingLicenseNumber", result, || Self {
            country,
            inner: ValidatedValue::new(driving_license::normalize(value), validators),
        })
    }

    pub fn create(country: CountryCode, value: &str) -> Result<Self, ValidaError> {
        into_created(Self::try_create(country, value, None))
    }

    pub fn country(&self) -> CountryCode {
        self.country
    }
}

string_value_object!(DrivingLicenseNumber);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uk_licence() {
        let licence = DrivingLicenseNumber::create(CountryCode::UnitedKingdom, "morga 657054 sm9ij").unwrap();
        assert_eq!(licence.as_str(), "MORGA657054SM9IJ");
        assert_eq!(licence.country(), CountryCode::UnitedKingdom);
    }

    #[test]
    fn wrong_layout() {
        let (result, licence) = DrivingLicenseNumber::try_create(CountryCode::France, "12345", None);
        assert!(licence.is_none());
        assert_eq!(result.codes(), vec!["InvalidDrivingLicenseFormat"]);
    }
}

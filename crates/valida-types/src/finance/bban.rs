use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, CountryCode, TryCreate, ValidaError, ValidatedString,
    ValidatedValue,
};
use valida_rules::{bban, common, normalize::compact, pattern};

use crate::macros::string_value_object;

const FIELD: &str = "Bban";

/// The country-local part of an IBAN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BbanNumber {
    country: CountryCode,
    #[serde(rename = "value")]
    inner: ValidatedString,
}

impl BbanNumber {
    pub fn try_create(country: CountryCode, value: &str, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        let validators = vec![
            common::required(field),
            pattern::validate_input_length(field, compact),
            bban::validate_country_format(field, country),
        ];
        let result = run_validators(value, &validators);
        resolve("BbanNumber", result, || Self {
            country,
            inner: ValidatedValue::new(compact(value), validators),
        })
    }

    pub fn create(country: CountryCode, value: &str) -> Result<Self, ValidaError> {
        into_created(Self::try_create(country, value, None))
    }

    pub fn country(&self) -> CountryCode {
        self.country
    }
}

string_value_object!(BbanNumber);

use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, CountryCode, TryCreate, ValidaError, ValidatedString,
    ValidatedValue,
};
use valida_rules::{common, pattern, sort_code};

use crate::macros::string_value_object;

const FIELD: &str = "SortCode";

/// A UK or Irish sort code, stored as six digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SortCode {
    country: CountryCode,
    #[serde(rename = "value")]
    inner: ValidatedString,
}

impl SortCode {
    pub fn try_create(country: CountryCode, value: &str, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        let validators = vec![
            common::required(field),
            pattern::validate_input_length(field, sort_code::normalize),
            sort_code::validate_country_format(field, country),
        ];
        let result = run_validators(value, &validators);
        resolve("SortCode", result, || Self {
            country,
            inner: ValidatedValue::new(sort_code::normalize(value), validators),
        })
    }

    pub fn create(country: CountryCode, value: &str) -> Result<Self, ValidaError> {
        into_created(Self::try_create(country, value, None))
    }

    pub fn country(&self) -> CountryCode {
        self.country
    }

    /// `12-34-56`.
    pub fn formatted(&self) -> String {
        sort_code::format_dashed(self.as_str())
    }
}

string_value_object!(SortCode);

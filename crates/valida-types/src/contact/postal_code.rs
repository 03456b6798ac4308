use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, CountryCode, TryCreate, ValidaError, ValidatedString,
    ValidatedValue, ValueValidator,
};
use valida_rules::{common, postal_code};

use crate::macros::string_value_object;

pub(crate) const FIELD: &str = "PostalCode";

/// A postal or ZIP code. Stored trimmed and uppercased with its original
/// internal spacing collapsed to single spaces, e.g. `"sw1a  1aa"` becomes
/// `"SW1A 1AA"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PostalCode {
    country: CountryCode,
    #[serde(rename = "code")]
    inner: ValidatedString,
}

fn display_form(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

impl PostalCode {
    pub(crate) fn validators(field: &str, country: CountryCode) -> Vec<ValueValidator<str>> {
        vec![
            common::required(field),
            common::max_length(field, 12),
            postal_code::validate_country_format(field, country),
        ]
    }

    pub fn try_create(country: CountryCode, value: &str, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        let validators = Self::validators(field, country);
        let result = run_validators(value, &validators);
        resolve("PostalCode", result, || Self {
            country,
            inner: ValidatedValue::new(display_form(value), validators),
        })
    }

    pub fn create(country: CountryCode, value: &str) -> Result<Self, ValidaError> {
        into_created(Self::try_create(country, value, None))
    }

    pub fn country(&self) -> CountryCode {
        self.country
    }

    /// Spaces and hyphens removed, for comparisons and lookups.
    pub fn compact(&self) -> String {
        postal_code::normalize(self.as_str())
    }
}

string_value_object!(PostalCode);

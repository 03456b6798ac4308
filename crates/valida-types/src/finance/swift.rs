use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, CountryCode, TryCreate, ValidaError, ValidatedString,
    ValidatedValue,
};
use valida_rules::{common, swift};

use crate::macros::string_value_object;

const FIELD: &str = "SwiftCode";

/// A SWIFT/BIC code, stored compacted and uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SwiftCode {
    inner: ValidatedString,
}

impl SwiftCode {
    /// Validate `value`, optionally requiring it to belong to `country`.
    pub fn try_create(
        value: &str,
        country: Option<CountryCode>,
        property_name: Option<&str>,
    ) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        let mut validators = vec![common::required(field), swift::validate_format(field)];
        if let Some(country) = country {
            validators.push(swift::validate_country(field, country));
        }
        let result = run_validators(value, &validators);
        resolve("SwiftCode", result, || Self {
            inner: ValidatedValue::new(swift::normalize(value), validators),
        })
    }

    pub fn create(value: &str) -> Result<Self, ValidaError> {
        into_created(Self::try_create(value, None, None))
    }

    /// Institution code (characters 1-4).
    pub fn bank_code(&self) -> &str {
        &self.as_str()[..4]
    }

    /// ISO 3166-1 alpha-2 country (characters 5-6).
    pub fn country_code(&self) -> &str {
        &self.as_str()[4..6]
    }

    /// Location code (characters 7-8).
    pub fn location_code(&self) -> &str {
        &self.as_str()[6..8]
    }

    /// Branch code (characters 9-11); `"XXX"` for an 8-character code.
    pub fn branch_code(&self) -> &str {
        self.as_str().get(8..).filter(|b| !b.is_empty()).unwrap_or(swift::PRIMARY_OFFICE_BRANCH)
    }

    pub fn is_primary_office(&self) -> bool {
        self.branch_code() == swift::PRIMARY_OFFICE_BRANCH
    }
}

string_value_object!(SwiftCode);

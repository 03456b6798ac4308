use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, CountryCode, TryCreate, ValidaError, ValidatedString,
    ValidatedValue, ValueValidator,
};
use valida_rules::{common, iban};

use crate::macros::string_value_object;

const FIELD: &str = "Iban";

/// An International Bank Account Number, stored compacted and uppercase.
///
/// Two IBANs are equal when their compacted forms are, so
/// `"gb82 west 1234 5698 7654 32"` equals `"GB82WEST12345698765432"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IbanNumber {
    inner: ValidatedString,
}

impl IbanNumber {
    fn validators(field: &str, country: CountryCode) -> Vec<ValueValidator<str>> {
        let mut validators = vec![common::required(field)];
        validators.extend(iban::chain(field, country));
        validators
    }

    /// Validate an IBAN issued by any country.
    pub fn try_create(value: &str, property_name: Option<&str>) -> TryCreate<Self> {
        Self::try_create_for_country(CountryCode::All, value, property_name)
    }

    /// Validate an IBAN that must be issued by `country`.
    pub fn try_create_for_country(
        country: CountryCode,
        value: &str,
        property_name: Option<&str>,
    ) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        let validators = Self::validators(field, country);
        let result = run_validators(value, &validators);
        resolve("IbanNumber", result, || Self {
            inner: ValidatedValue::new(iban::normalize(value), validators),
        })
    }

    pub fn create(value: &str) -> Result<Self, ValidaError> {
        into_created(Self::try_create(value, None))
    }

    /// The two-letter prefix, e.g. `"DE"`.
    pub fn country_code(&self) -> &str {
        &self.as_str()[..2]
    }

    /// The issuing country, if it is one of the supported countries.
    pub fn country(&self) -> Option<CountryCode> {
        CountryCode::from_alpha2(self.country_code())
    }

    pub fn check_digits(&self) -> &str {
        &self.as_str()[2..4]
    }

    /// The country-local account part.
    pub fn bban(&self) -> &str {
        &self.as_str()[4..]
    }

    /// Print format: groups of four separated by spaces.
    pub fn formatted(&self) -> String {
        self.as_str()
            .as_bytes()
            .chunks(4)
            .map(|group| String::from_utf8_lossy(group).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

string_value_object!(IbanNumber);

use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, CountryCode, TryCreate, ValidaError, ValidatedString,
    ValidatedValue, ValueValidator,
};
use valida_rules::{bank_account, common, iban};

use crate::macros::string_value_object;

const FIELD: &str = "AccountNumber";

/// A bank account number in the issuing country's domestic layout, or an
/// IBAN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BankAccountNumber {
    country: CountryCode,
    #[serde(rename = "number")]
    inner: ValidatedString,
}

impl BankAccountNumber {
    fn validators(field: &str, country: CountryCode) -> Vec<ValueValidator<str>> {
        vec![
            common::required(field),
            bank_account::validate_length(field),
            bank_account::validate_country_format(field, country),
            bank_account::validate_iban_when_present(field, country),
        ]
    }

    pub fn try_create(country: CountryCode, number: &str, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        let validators = Self::validators(field, country);
        let result = run_validators(number, &validators);
        resolve("BankAccountNumber", result, || Self {
            country,
            inner: ValidatedValue::new(bank_account::normalize(number), validators),
        })
    }

    pub fn create(country: CountryCode, number: &str) -> Result<Self, ValidaError> {
        into_created(Self::try_create(country, number, None))
    }

    pub fn country(&self) -> CountryCode {
        self.country
    }

    /// Whether the stored number is an IBAN rather than a domestic number.
    pub fn is_iban(&self) -> bool {
        iban::looks_like_iban(self.as_str())
    }

    /// The IBAN country prefix, when the number is an IBAN.
    pub fn iban_country_code(&self) -> Option<&str> {
        if self.is_iban() {
            self.as_str().get(..2)
        } else {
            None
        }
    }

    /// All but the last four characters replaced with `*`.
    pub fn masked(&self) -> String {
        bank_account::mask(self.as_str())
    }
}

string_value_object!(BankAccountNumber);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domestic_number() {
        let account = BankAccountNumber::create(CountryCode::UnitedKingdom, "12345678").unwrap();
        assert!(!account.is_iban());
        assert_eq!(account.iban_country_code(), None);
        assert_eq!(account.masked(), "****5678");
    }

    #[test]
    fn iban_number() {
        let account = BankAccountNumber::create(CountryCode::Germany, "DE89370400440532013000").unwrap();
        assert!(account.is_iban());
        assert_eq!(account.iban_country_code(), Some("DE"));
    }

    #[test]
    fn failures_are_aggregated() {
        let (result, account) = BankAccountNumber::try_create(CountryCode::UnitedKingdom, "12", None);
        assert!(account.is_none());
        assert_eq!(result.codes(), vec!["InvalidLength", "InvalidCountryAccountNumberFormat"]);
    }

    #[test]
    fn overlong_input_reports_length_once() {
        let long = "1".repeat(300);
        let (result, account) = BankAccountNumber::try_create(CountryCode::UnitedKingdom, &long, None);
        assert!(account.is_none());
        assert_eq!(result.codes(), vec!["InvalidLength"]);
        let iban_like = format!("DE89{long}");
        let (result, _) = BankAccountNumber::try_create(CountryCode::Germany, &iban_like, None);
        assert_eq!(result.codes(), vec!["InvalidLength"]);
    }

    #[test]
    fn blank_is_required() {
        let (result, _) = BankAccountNumber::try_create(CountryCode::UnitedKingdom, "  ", None);
        assert_eq!(result.codes(), vec!["Required"]);
    }
}

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, TryCreate, ValidaError, ValidatedString, ValidatedValue,
    ValidatedValueObject, ValidationResult,
};
use valida_rules::credit_card::{self, CardType};
use valida_rules::common;

use crate::macros::string_value_object;

/// A payment card number (PAN), stored as digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CreditCardNumber {
    #[serde(rename = "number")]
    inner: ValidatedString,
    card_type: Option<CardType>,
}

impl CreditCardNumber {
    pub fn try_create(value: &str, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or("CardNumber");
        let validators = vec![
            common::required(field),
            credit_card::validate_format(field),
            credit_card::validate_luhn(field),
        ];
        let result = run_validators(value, &validators);
        resolve("CreditCardNumber", result, || {
            let digits = credit_card::normalize(value);
            Self {
                card_type: credit_card::detect_card_type(&digits),
                inner: ValidatedValue::new(digits, validators),
            }
        })
    }

    pub fn create(value: &str) -> Result<Self, ValidaError> {
        into_created(Self::try_create(value, None))
    }

    /// Detected network, if the number falls in a known brand range.
    pub fn card_type(&self) -> Option<CardType> {
        self.card_type
    }

    pub fn masked(&self) -> String {
        credit_card::mask(self.as_str())
    }

    pub fn last_four(&self) -> &str {
        let s = self.as_str();
        &s[s.len().saturating_sub(4)..]
    }
}

string_value_object!(CreditCardNumber);

/// A card security code (CVV/CVC/CID).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CreditCardSecurityNumber {
    inner: ValidatedString,
}

impl CreditCardSecurityNumber {
    /// With a known `card_type` the brand's length is enforced; otherwise 3
    /// or 4 digits are accepted.
    pub fn try_create(
        value: &str,
        card_type: Option<CardType>,
        property_name: Option<&str>,
    ) -> TryCreate<Self> {
        let field = property_name.unwrap_or("SecurityCode");
        let validators = vec![
            common::required(field),
            credit_card::validate_security_code(field, card_type),
        ];
        let result = run_validators(value, &validators);
        resolve("CreditCardSecurityNumber", result, || Self {
            inner: ValidatedValue::new(value.trim().to_string(), validators),
        })
    }

    pub fn create(value: &str, card_type: Option<CardType>) -> Result<Self, ValidaError> {
        into_created(Self::try_create(value, card_type, None))
    }
}

string_value_object!(CreditCardSecurityNumber);

/// Card expiry month and (four-digit) year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CreditCardExpiration {
    inner: ValidatedValue<(u32, i32)>,
}

impl CreditCardExpiration {
    /// `year` may be given with two digits (`26` means 2026). Validity is
    /// judged against `today`.
    pub fn try_create(
        month: u32,
        year: i32,
        today: NaiveDate,
        property_name: Option<&str>,
    ) -> TryCreate<Self> {
        let field = property_name.unwrap_or("Expiration");
        let validators = vec![credit_card::validate_expiration(field, today)];
        let value = (month, credit_card::full_year(year));
        let result = run_validators(&value, &validators);
        resolve("CreditCardExpiration", result, || Self {
            inner: ValidatedValue::new(value, validators),
        })
    }

    pub fn create(month: u32, year: i32, today: NaiveDate) -> Result<Self, ValidaError> {
        into_created(Self::try_create(month, year, today, None))
    }

    pub fn month(&self) -> u32 {
        self.inner.value().0
    }

    pub fn year(&self) -> i32 {
        self.inner.value().1
    }

    /// Whether the card has expired by `date` (it is valid through the end
    /// of its expiry month).
    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        (self.year(), self.month()) < (date.year(), date.month())
    }
}

impl ValidatedValueObject for CreditCardExpiration {
    type Value = (u32, i32);

    fn value(&self) -> &(u32, i32) {
        self.inner.value()
    }

    fn validate(&self) -> ValidationResult {
        self.inner.validate()
    }
}

impl std::fmt::Display for CreditCardExpiration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{}", self.month(), self.year())
    }
}

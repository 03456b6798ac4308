use rust_decimal::Decimal;
use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, Currency, TryCreate, ValidaError, ValidatedValue,
    ValidatedValueObject, ValidationResult, ValueValidator,
};
use valida_rules::{common, money};

const FIELD: &str = "Amount";
const CURRENCY_FIELD: &str = "Currency";

/// A non-negative amount in a specific currency, with no more fractional
/// digits than the currency's minor unit allows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Money {
    amount: ValidatedValue<Decimal>,
    currency: Currency,
}

impl Money {
    fn validators(field: &str, currency: Currency) -> Vec<ValueValidator<Decimal>> {
        vec![
            money::validate_non_negative(field),
            money::validate_decimal_places(field, currency),
        ]
    }

    pub fn try_create(amount: Decimal, currency: Currency, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        let validators = Self::validators(field, currency);
        let result = run_validators(&amount, &validators);
        resolve("Money", result, || Self {
            amount: ValidatedValue::new(amount, validators),
            currency,
        })
    }

    /// Like [`try_create`](Self::try_create), taking the ISO 4217 code as a
    /// string. A missing or unknown code is reported alongside any amount
    /// errors.
    pub fn try_create_from_code(
        amount: Decimal,
        currency_code: &str,
        property_name: Option<&str>,
    ) -> TryCreate<Self> {
        let Some(currency) = Currency::from_code(currency_code) else {
            let field = property_name.unwrap_or(FIELD);
            let code_check = run_validators(
                currency_code,
                &[
                    common::required(CURRENCY_FIELD),
                    money::validate_currency_code(CURRENCY_FIELD),
                ],
            );
            let result = code_check.merged(run_validators(&amount, &[money::validate_non_negative(field)]));
            return resolve("Money", result, || Self::zero(Currency::Usd));
        };
        Self::try_create(amount, currency, property_name)
    }

    pub fn create(amount: Decimal, currency: Currency) -> Result<Self, ValidaError> {
        into_created(Self::try_create(amount, currency, None))
    }

    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: ValidatedValue::new(Decimal::ZERO, Self::validators(FIELD, currency)),
            currency,
        }
    }

    pub fn amount(&self) -> Decimal {
        *self.amount.value()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Sum of two amounts in the same currency.
    pub fn checked_add(&self, other: &Money) -> Result<Money, ValidaError> {
        if self.currency != other.currency {
            tracing::debug!(left = %self.currency, right = %other.currency, "refusing cross-currency addition");
            return Err(ValidaError::CurrencyMismatch {
                left: self.currency.to_string(),
                right: other.currency.to_string(),
            });
        }
        let sum = self
            .amount()
            .checked_add(other.amount())
            .ok_or(ValidaError::Overflow)?;
        Money::create(sum, self.currency)
    }

    /// Symbol and amount rounded to the currency's minor unit, e.g. `$10.50`.
    pub fn formatted(&self) -> String {
        let places = self.currency.decimals() as usize;
        format!("{}{:.*}", self.currency.symbol(), places, self.amount())
    }
}

impl ValidatedValueObject for Money {
    type Value = Decimal;

    fn value(&self) -> &Decimal {
        self.amount.value()
    }

    fn validate(&self) -> ValidationResult {
        self.amount.validate()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount(), self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn valid_amounts() {
        let m = Money::create(dec("10.5"), Currency::Usd).unwrap();
        assert_eq!(m.formatted(), "$10.50");
        assert_eq!(m.to_string(), "10.5 USD");
        assert!(m.validate().is_valid());
    }

    #[test]
    fn minor_units_are_enforced() {
        let (result, m) = Money::try_create(dec("100.5"), Currency::Jpy, None);
        assert!(m.is_none());
        assert_eq!(result.codes(), vec!["InvalidDecimalPlaces"]);
    }

    #[test]
    fn negative_and_overprecise_are_both_reported() {
        let (result, _) = Money::try_create(dec("-1.001"), Currency::Eur, Some("Price"));
        assert_eq!(result.codes(), vec!["NegativeAmount", "InvalidDecimalPlaces"]);
        assert!(result.errors_for("Price").count() == 2);
    }

    #[test]
    fn addition() {
        let a = Money::create(dec("1.25"), Currency::Gbp).unwrap();
        let b = Money::create(dec("2.50"), Currency::Gbp).unwrap();
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec("3.75"));

        let c = Money::create(dec("1"), Currency::Usd).unwrap();
        assert!(matches!(a.checked_add(&c), Err(ValidaError::CurrencyMismatch { .. })));
    }

    #[test]
    fn from_code() {
        let (result, m) = Money::try_create_from_code(dec("5"), "eur", None);
        assert!(result.is_valid());
        assert_eq!(m.unwrap().currency(), Currency::Eur);

        let (result, m) = Money::try_create_from_code(dec("-5"), "XXX", None);
        assert!(m.is_none());
        assert_eq!(result.codes(), vec!["InvalidCurrencyCode", "NegativeAmount"]);

        let (result, _) = Money::try_create_from_code(dec("5"), "", None);
        assert_eq!(result.codes(), vec!["Required"]);
    }
}

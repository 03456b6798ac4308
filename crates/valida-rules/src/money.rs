//! Monetary amounts and ISO 4217 currency codes.

use rust_decimal::Decimal;

use valida_core::{check, codes, validator, Currency, ValidationResult, ValueValidator};

use crate::normalize::is_blank;

/// Significant fractional digits of `value` (trailing zeros ignored).
pub fn decimal_places(value: &Decimal) -> u32 {
    value.normalize().scale()
}

pub fn validate_non_negative(field: &str) -> ValueValidator<Decimal> {
    let field = field.to_string();
    check(move |amount: &Decimal| {
        if amount.is_sign_negative() && !amount.is_zero() {
            ValidationResult::failure(
                format!("{field} must not be negative."),
                field.as_str(),
                codes::NEGATIVE_AMOUNT,
            )
        } else {
            ValidationResult::success()
        }
    })
}

/// At most `currency.decimals()` fractional digits.
pub fn validate_decimal_places(field: &str, currency: Currency) -> ValueValidator<Decimal> {
    let field = field.to_string();
    check(move |amount: &Decimal| {
        let allowed = currency.decimals();
        if decimal_places(amount) <= allowed {
            ValidationResult::success()
        } else {
            ValidationResult::failure(
                format!("{field} must have at most {allowed} decimal places for {currency}."),
                field.as_str(),
                codes::INVALID_DECIMAL_PLACES,
            )
        }
    })
}

pub fn validate_currency_code(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        Some(match Currency::from_code(value) {
            Some(_) => ValidationResult::success(),
            None => ValidationResult::failure(
                format!("{field} '{}' is not a supported ISO 4217 currency code.", value.trim()),
                field.as_str(),
                codes::INVALID_CURRENCY_CODE,
            ),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn negative_amounts() {
        let v = validate_non_negative("Amount");
        assert!(v(&dec("0")).unwrap().is_valid());
        assert!(v(&dec("-0.00")).unwrap().is_valid());
        assert_eq!(v(&dec("-1")).unwrap().codes(), vec!["NegativeAmount"]);
    }

    #[test]
    fn decimal_places_per_currency() {
        let usd = validate_decimal_places("Amount", Currency::Usd);
        assert!(usd(&dec("10.50")).unwrap().is_valid());
        assert!(usd(&dec("10.500")).unwrap().is_valid());
        assert!(!usd(&dec("10.505")).unwrap().is_valid());
        let jpy = validate_decimal_places("Amount", Currency::Jpy);
        assert!(jpy(&dec("100.00")).unwrap().is_valid());
        assert_eq!(jpy(&dec("100.5")).unwrap().codes(), vec!["InvalidDecimalPlaces"]);
    }

    #[test]
    fn currency_codes() {
        let v = validate_currency_code("Currency");
        assert!(v("usd").unwrap().is_valid());
        assert_eq!(v("XYZ").unwrap().codes(), vec!["InvalidCurrencyCode"]);
        assert!(v(" ").is_none());
    }
}

//! Percentages expressed on a 0-100 scale.

use rust_decimal::Decimal;

use valida_core::{check, codes, ValidationResult, ValueValidator};

use crate::money::decimal_places;

/// Inclusive bounds.
pub fn validate_range(field: &str, min: Decimal, max: Decimal) -> ValueValidator<Decimal> {
    let field = field.to_string();
    check(move |value: &Decimal| {
        if (min..=max).contains(value) {
            ValidationResult::success()
        } else {
            ValidationResult::failure(
                format!("{field} must be between {min} and {max}."),
                field.as_str(),
                codes::OUT_OF_RANGE,
            )
        }
    })
}

pub fn validate_decimal_places(field: &str, max_places: u32) -> ValueValidator<Decimal> {
    let field = field.to_string();
    check(move |value: &Decimal| {
        if decimal_places(value) <= max_places {
            ValidationResult::success()
        } else {
            ValidationResult::failure(
                format!("{field} must have at most {max_places} decimal places."),
                field.as_str(),
                codes::INVALID_DECIMAL_PLACES,
            )
        }
    })
}

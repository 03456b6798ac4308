use rust_decimal::Decimal;
use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, TryCreate, ValidaError, ValidatedValue,
    ValidatedValueObject, ValidationResult,
};
use valida_rules::percentage;

/// Fractional digits allowed on the 0-100 scale.
pub const MAX_DECIMAL_PLACES: u32 = 4;

/// A percentage between 0 and 100 inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Percentage {
    inner: ValidatedValue<Decimal>,
}

impl Percentage {
    pub fn try_create(value: Decimal, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or("Percentage");
        let validators = vec![
            percentage::validate_range(field, Decimal::ZERO, Decimal::ONE_HUNDRED),
            percentage::validate_decimal_places(field, MAX_DECIMAL_PLACES),
        ];
        let result = run_validators(&value, &validators);
        resolve("Percentage", result, || Self {
            inner: ValidatedValue::new(value, validators),
        })
    }

    pub fn create(value: Decimal) -> Result<Self, ValidaError> {
        into_created(Self::try_create(value, None))
    }

    pub fn get(&self) -> Decimal {
        *self.inner.value()
    }

    /// `12.5%` → `0.125`.
    pub fn as_fraction(&self) -> Decimal {
        self.get() / Decimal::ONE_HUNDRED
    }
}

impl ValidatedValueObject for Percentage {
    type Value = Decimal;

    fn value(&self) -> &Decimal {
        self.inner.value()
    }

    fn validate(&self) -> ValidationResult {
        self.inner.validate()
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction() {
        let p = Percentage::create(Decimal::new(125, 1)).unwrap();
        assert_eq!(p.as_fraction(), Decimal::new(125, 3));
        assert_eq!(p.to_string(), "12.5%");
    }

    #[test]
    fn out_of_range() {
        let (result, p) = Percentage::try_create(Decimal::new(1001, 1), None);
        assert!(p.is_none());
        assert_eq!(result.codes(), vec!["OutOfRange"]);
    }

    #[test]
    fn ordering_by_value() {
        let low = Percentage::create(Decimal::ONE).unwrap();
        let high = Percentage::create(Decimal::TEN).unwrap();
        assert!(low < high);
    }
}

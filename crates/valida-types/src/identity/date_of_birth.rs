use chrono::NaiveDate;
use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, TryCreate, ValidaError, ValidatedValue,
    ValidatedValueObject, ValidationResult,
};
use valida_rules::date;

/// Oldest plausible age, in years.
pub const MAX_AGE: u32 = 150;

/// A date of birth that is not in the future relative to the reference
/// date it was validated against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DateOfBirth {
    inner: ValidatedValue<NaiveDate>,
}

impl DateOfBirth {
    pub fn try_create(date: NaiveDate, today: NaiveDate, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or("DateOfBirth");
        let validators = vec![
            date::validate_not_future(field, today),
            date::validate_age_between(field, today, 0, MAX_AGE),
        ];
        let result = run_validators(&date, &validators);
        resolve("DateOfBirth", result, || Self {
            inner: ValidatedValue::new(date, validators),
        })
    }

    pub fn create(date: NaiveDate, today: NaiveDate) -> Result<Self, ValidaError> {
        into_created(Self::try_create(date, today, None))
    }

    pub fn date(&self) -> NaiveDate {
        *self.inner.value()
    }

    /// Whole years on `on`; `None` if `on` is before the birth date.
    pub fn age_on(&self, on: NaiveDate) -> Option<u32> {
        date::age_on(self.date(), on)
    }
}

impl ValidatedValueObject for DateOfBirth {
    type Value = NaiveDate;

    fn value(&self) -> &NaiveDate {
        self.inner.value()
    }

    fn validate(&self) -> ValidationResult {
        self.inner.validate()
    }
}

impl std::fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn age() {
        let dob = DateOfBirth::create(d(1990, 3, 1), d(2024, 6, 15)).unwrap();
        assert_eq!(dob.age_on(d(2024, 2, 29)), Some(33));
        assert_eq!(dob.age_on(d(2024, 3, 1)), Some(34));
        assert_eq!(dob.to_string(), "1990-03-01");
    }

    #[test]
    fn future_birth_date() {
        let (result, dob) = DateOfBirth::try_create(d(2030, 1, 1), d(2024, 6, 15), None);
        assert!(dob.is_none());
        assert_eq!(result.codes(), vec!["FutureDate"]);
    }

    #[test]
    fn implausible_age() {
        let (result, _) = DateOfBirth::try_create(d(1800, 1, 1), d(2024, 6, 15), None);
        assert_eq!(result.codes(), vec!["InvalidAge"]);
    }
}

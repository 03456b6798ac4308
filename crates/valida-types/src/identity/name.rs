use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, TryCreate, ValidaError, ValidatedString, ValidatedValue,
    ValidatedValueObject, ValidationResult, ValueValidator,
};
use valida_rules::{common, name};

/// Longest accepted name part, in characters.
pub const MAX_PART_LENGTH: usize = 50;

/// A person's name: first, optional middle, last.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HumanName {
    first: ValidatedString,
    middle: Option<ValidatedString>,
    last: ValidatedString,
    #[serde(skip)]
    full: String,
}

fn part_validators(field: &str, required: bool) -> Vec<ValueValidator<str>> {
    let mut validators = Vec::with_capacity(3);
    if required {
        validators.push(common::required(field));
    }
    validators.push(name::validate_characters(field));
    validators.push(name::validate_length(field, MAX_PART_LENGTH));
    validators
}

fn field_name(prefix: Option<&str>, part: &str) -> String {
    match prefix {
        Some(p) => format!("{p}.{part}"),
        None => part.to_string(),
    }
}

impl HumanName {
    /// Every part is validated independently and all failures are reported
    /// together. With `property_name`, fields are reported as
    /// `"<property_name>.FirstName"` and so on.
    pub fn try_create(
        first: &str,
        middle: Option<&str>,
        last: &str,
        property_name: Option<&str>,
    ) -> TryCreate<Self> {
        let first_v = part_validators(&field_name(property_name, "FirstName"), true);
        let middle_v = part_validators(&field_name(property_name, "MiddleName"), false);
        let last_v = part_validators(&field_name(property_name, "LastName"), true);

        let middle = middle.map(str::trim).filter(|m| !m.is_empty());
        let mut result = run_validators(first, &first_v);
        if let Some(m) = middle {
            result.merge(run_validators(m, &middle_v));
        }
        result.merge(run_validators(last, &last_v));

        resolve("HumanName", result, || {
            let first = first.trim().to_string();
            let last = last.trim().to_string();
            let full = match middle {
                Some(m) => format!("{first} {m} {last}"),
                None => format!("{first} {last}"),
            };
            Self {
                first: ValidatedValue::new(first, first_v),
                middle: middle.map(|m| ValidatedValue::new(m.to_string(), middle_v)),
                last: ValidatedValue::new(last, last_v),
                full,
            }
        })
    }

    pub fn create(first: &str, middle: Option<&str>, last: &str) -> Result<Self, ValidaError> {
        into_created(Self::try_create(first, middle, last, None))
    }

    pub fn first(&self) -> &str {
        self.first.value()
    }

    pub fn middle(&self) -> Option<&str> {
        self.middle.as_ref().map(|m| m.value().as_str())
    }

    pub fn last(&self) -> &str {
        self.last.value()
    }

    /// `"First Middle Last"`.
    pub fn full_name(&self) -> &str {
        &self.full
    }

    /// Uppercased first letter of each part, e.g. `"JRT"`.
    pub fn initials(&self) -> String {
        [Some(self.first()), self.middle(), Some(self.last())]
            .into_iter()
            .flatten()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl ValidatedValueObject for HumanName {
    type Value = str;

    fn value(&self) -> &str {
        &self.full
    }

    fn validate(&self) -> ValidationResult {
        let mut result = self.first.validate();
        if let Some(m) = &self.middle {
            result.merge(m.validate());
        }
        result.merged(self.last.validate())
    }
}

impl std::fmt::Display for HumanName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

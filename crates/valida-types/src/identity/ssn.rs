use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, TryCreate, ValidaError, ValidatedString, ValidatedValue,
};
use valida_rules::{common, ssn};

use crate::macros::string_value_object;

/// A US Social Security Number, stored as `AAA-GG-SSSS`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SocialSecurityNumber {
    inner: ValidatedString,
}

impl SocialSecurityNumber {
    pub fn try_create(value: &str, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or("Ssn");
        let mut validators = vec![common::required(field)];
        validators.extend(ssn::chain(field));
        let result = run_validators(value, &validators);
        resolve("SocialSecurityNumber", result, || Self {
            inner: ValidatedValue::new(
                ssn::normalize(value).unwrap_or_else(|| value.trim().to_string()),
                validators,
            ),
        })
    }

    pub fn create(value: &str) -> Result<Self, ValidaError> {
        into_created(Self::try_create(value, None))
    }

    pub fn area(&self) -> &str {
        &self.as_str()[..3]
    }

    pub fn group(&self) -> &str {
        &self.as_str()[4..6]
    }

    pub fn serial(&self) -> &str {
        &self.as_str()[7..]
    }

    /// `***-**-6789`.
    pub fn masked(&self) -> String {
        format!("***-**-{}", self.serial())
    }
}

string_value_object!(SocialSecurityNumber);

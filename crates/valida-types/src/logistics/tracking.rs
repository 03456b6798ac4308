use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, TryCreate, ValidaError, ValidatedString, ValidatedValue,
};
use valida_rules::tracking::{self, Carrier};
use valida_rules::common;

use crate::macros::string_value_object;

const FIELD: &str = "TrackingNumber";

/// A parcel tracking number, stored compacted and uppercase, with the carrier
/// detected from its shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TrackingNumber {
    #[serde(rename = "number")]
    inner: ValidatedString,
    carrier: Carrier,
}

impl TrackingNumber {
    pub fn try_create(value: &str, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        let validators = vec![common::required(field), tracking::validate_format(field)];
        let result = run_validators(value, &validators);
        let (result, built) = resolve("TrackingNumber", result, || {
            let normalized = tracking::normalize(value);
            tracking::detect_carrier(&normalized).map(|carrier| Self {
                inner: ValidatedValue::new(normalized, validators),
                carrier,
            })
        });
        (result, built.flatten())
    }

    pub fn create(value: &str) -> Result<Self, ValidaError> {
        into_created(Self::try_create(value, None))
    }

    pub fn carrier(&self) -> Carrier {
        self.carrier
    }
}

string_value_object!(TrackingNumber);

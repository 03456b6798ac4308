use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, TryCreate, ValidaError, ValidatedString, ValidatedValue,
};
use valida_rules::{common, routing};

use crate::macros::string_value_object;

const FIELD: &str = "RoutingNumber";

/// A US ABA routing transit number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RoutingNumber {
    inner: ValidatedString,
}

impl RoutingNumber {
    pub fn try_create(value: &str, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        let validators = vec![
            common::required(field),
            routing::validate_format(field),
            routing::validate_checksum(field),
        ];
        let result = run_validators(value, &validators);
        resolve("RoutingNumber", result, || Self {
            inner: ValidatedValue::new(routing::normalize(value), validators),
        })
    }

    pub fn create(value: &str) -> Result<Self, ValidaError> {
        into_created(Self::try_create(value, None))
    }

    /// Federal Reserve routing symbol (digits 1-4).
    pub fn federal_reserve_routing_symbol(&self) -> &str {
        &self.as_str()[..4]
    }

    /// ABA institution identifier (digits 5-8).
    pub fn aba_institution_identifier(&self) -> &str {
        &self.as_str()[4..8]
    }

    pub fn check_digit(&self) -> &str {
        &self.as_str()[8..]
    }
}

string_value_object!(RoutingNumber);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components() {
        let routing = RoutingNumber::create("021000021").unwrap();
        assert_eq!(routing.federal_reserve_routing_symbol(), "0210");
        assert_eq!(routing.aba_institution_identifier(), "0002");
        assert_eq!(routing.check_digit(), "1");
    }

    #[test]
    fn strict_adapter_carries_result() {
        let err = RoutingNumber::create("021000020").unwrap_err();
        assert!(err.validation_result().unwrap().has_code("InvalidChecksum"));
    }
}

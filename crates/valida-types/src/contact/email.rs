use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, TryCreate, ValidaError, ValidatedString, ValidatedValue,
};
use valida_rules::{common, email};

use crate::macros::string_value_object;

const FIELD: &str = "Email";

/// An email address. The domain is lowercased; the local part keeps its case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EmailAddress {
    inner: ValidatedString,
}

impl EmailAddress {
    pub fn try_create(value: &str, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        let validators = vec![common::required(field), email::validate_format(field)];
        let result = run_validators(value, &validators);
        resolve("EmailAddress", result, || Self {
            inner: ValidatedValue::new(email::normalize(value), validators),
        })
    }

    pub fn create(value: &str) -> Result<Self, ValidaError> {
        into_created(Self::try_create(value, None))
    }

    pub fn local_part(&self) -> &str {
        email::split(self.as_str()).map_or("", |(local, _)| local)
    }

    pub fn domain(&self) -> &str {
        email::split(self.as_str()).map_or("", |(_, domain)| domain)
    }
}

string_value_object!(EmailAddress);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts() {
        let e = EmailAddress::create("  Jane.Doe+news@Example.COM ").unwrap();
        assert_eq!(e.as_str(), "Jane.Doe+news@example.com");
        assert_eq!(e.local_part(), "Jane.Doe+news");
        assert_eq!(e.domain(), "example.com");
    }

    #[test]
    fn domain_case_does_not_affect_equality() {
        assert_eq!(
            EmailAddress::create("a@EXAMPLE.org").unwrap(),
            EmailAddress::create("a@example.org").unwrap()
        );
        assert_ne!(
            EmailAddress::create("A@example.org").unwrap(),
            EmailAddress::create("a@example.org").unwrap()
        );
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["plainaddress", "a@b", "a..b@example.com", "@example.com"] {
            let (result, e) = EmailAddress::try_create(bad, None);
            assert!(e.is_none(), "{bad}");
            assert_eq!(result.codes(), vec!["InvalidEmailFormat"], "{bad}");
        }
    }
}

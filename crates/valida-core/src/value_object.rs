//! # Validated Value Objects
//!
//! [`ValidatedValue`] couples a value with the ordered validators that
//! admitted it. The validator list is behaviour, not identity: equality,
//! ordering and hashing look only at the value.
//!
//! Concrete value objects follow one factory convention:
//!
//! - `try_create(..) -> (ValidationResult, Option<Self>)` is canonical. The
//!   option is `Some` exactly when the result is valid.
//! - `create(..) -> Result<Self, ValidaError>` is the strict adapter over
//!   `try_create`, kept for callers that prefer `?` propagation.
//!
//! [`resolve`] and [`into_created`] implement those two steps once so that
//! every type shares the same logging and error mapping.

use std::borrow::Borrow;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

use crate::error::ValidaError;
use crate::result::ValidationResult;
use crate::validator::{run_validators, ValueValidator};

/// Outcome of a `try_create` call.
pub type TryCreate<T> = (ValidationResult, Option<T>);

/// Behaviour shared by every validated value object.
pub trait ValidatedValueObject {
    /// The wrapped (normalised) value type.
    type Value: ?Sized;

    /// Borrow the wrapped value.
    fn value(&self) -> &Self::Value;

    /// Re-run the validators associated with this instance.
    ///
    /// Idempotent: an instance that exists has already passed, so this
    /// returns a valid result unless configuration changed in between.
    fn validate(&self) -> ValidationResult;
}

/// A value together with the validators associated with it at construction.
///
/// `V` is the borrowed form validators operate on, so a `String` value can
/// be checked by `ValueValidator<str>`.
pub struct ValidatedValue<T, V: ?Sized = T>
where
    T: Borrow<V>,
{
    value: T,
    validators: Vec<ValueValidator<V>>,
}

/// The common case: an owned string validated as `str`.
pub type ValidatedString = ValidatedValue<String, str>;

impl<T, V: ?Sized> ValidatedValue<T, V>
where
    T: Borrow<V>,
{
    /// Wrap `value` with its validators. Does not run them.
    pub fn new(value: T, validators: Vec<ValueValidator<V>>) -> Self {
        Self { value, validators }
    }

    /// Wrap a value with no associated validators.
    pub fn bare(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Borrow the wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Run every associated validator against the wrapped value.
    pub fn validate(&self) -> ValidationResult {
        run_validators(self.value.borrow(), &self.validators)
    }

    /// Number of validators associated with this instance.
    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// Unwrap into the plain value, dropping the validators.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone + Borrow<V>, V: ?Sized> Clone for ValidatedValue<T, V> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            validators: self.validators.clone(),
        }
    }
}

impl<T: std::fmt::Debug + Borrow<V>, V: ?Sized> std::fmt::Debug for ValidatedValue<T, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedValue")
            .field("value", &self.value)
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl<T: PartialEq + Borrow<V>, V: ?Sized> PartialEq for ValidatedValue<T, V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq + Borrow<V>, V: ?Sized> Eq for ValidatedValue<T, V> {}

impl<T: Hash + Borrow<V>, V: ?Sized> Hash for ValidatedValue<T, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: PartialOrd + Borrow<V>, V: ?Sized> PartialOrd for ValidatedValue<T, V> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord + Borrow<V>, V: ?Sized> Ord for ValidatedValue<T, V> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Serialize + Borrow<V>, V: ?Sized> Serialize for ValidatedValue<T, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

/// Finish a `try_create`: build the instance only if `result` is valid.
pub fn resolve<T, F>(type_name: &'static str, result: ValidationResult, build: F) -> TryCreate<T>
where
    F: FnOnce() -> T,
{
    if result.is_valid() {
        tracing::trace!(value_object = type_name, "validation passed");
        let instance = build();
        (result, Some(instance))
    } else {
        tracing::debug!(
            value_object = type_name,
            errors = result.errors().len(),
            codes = ?result.codes(),
            "validation failed"
        );
        (result, None)
    }
}

/// Strict adapter: turn a `try_create` outcome into a `Result`.
pub fn into_created<T>(outcome: TryCreate<T>) -> Result<T, ValidaError> {
    match outcome {
        (_, Some(instance)) => Ok(instance),
        (result, None) => Err(ValidaError::Validation(result)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::check;
    use std::collections::HashSet;

    fn non_empty() -> ValueValidator<str> {
        check(|v: &str| {
            if v.is_empty() {
                ValidationResult::failure("Value is required.", "Value", "Required")
            } else {
                ValidationResult::success()
            }
        })
    }

    #[test]
    fn equality_ignores_validators() {
        let a: ValidatedString = ValidatedValue::new("abc".to_string(), vec![non_empty()]);
        let b: ValidatedString = ValidatedValue::bare("abc".to_string());
        assert_eq!(a, b);
        assert_eq!(a.validator_count(), 1);
        assert_eq!(b.validator_count(), 0);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn validate_is_idempotent() {
        let v: ValidatedString = ValidatedValue::new("abc".to_string(), vec![non_empty()]);
        assert!(v.validate().is_valid());
        assert!(v.validate().is_valid());
        assert_eq!(v.value(), "abc");
    }

    #[test]
    fn validate_reports_failures_of_wrapped_value() {
        let v: ValidatedString = ValidatedValue::new(String::new(), vec![non_empty()]);
        assert_eq!(v.validate().codes(), vec!["Required"]);
    }

    #[test]
    fn resolve_correlates_result_and_instance() {
        let (ok, some) = resolve("Test", ValidationResult::success(), || 1);
        assert!(ok.is_valid());
        assert_eq!(some, Some(1));

        let (bad, none) = resolve(
            "Test",
            ValidationResult::failure("m", "F", "C"),
            || -> i32 { panic!("must not build an invalid instance") },
        );
        assert!(!bad.is_valid());
        assert!(none.is_none());
    }

    #[test]
    fn into_created_maps_failure_to_error() {
        let err = into_created::<i32>((ValidationResult::failure("Bad value.", "F", "C"), None))
            .unwrap_err();
        assert!(matches!(err, ValidaError::Validation(ref r) if r.has_code("C")));
        assert!(err.to_string().contains("Bad value."));
        assert_eq!(into_created((ValidationResult::success(), Some(5))).unwrap(), 5);
    }

    #[test]
    fn serializes_as_plain_value() {
        let v: ValidatedString = ValidatedValue::bare("abc".to_string());
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"abc\"");
    }
}

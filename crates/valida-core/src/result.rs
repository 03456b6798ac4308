//! # Validation Results
//!
//! [`ValidationResult`] is the aggregate every validator produces. It holds
//! an ordered list of [`ValidationError`]s; validity is derived from that
//! list and never stored separately, so a result can never claim to be
//! valid while carrying errors.
//!
//! ## Ordering
//!
//! Errors appear in the order they were merged. Callers (and tests) may
//! rely on `errors()[0]` being the first failure reported by the first
//! failing validator in a chain.

use serde::{Deserialize, Serialize};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    message: String,
    member_name: String,
    code: String,
}

impl ValidationError {
    /// Create a validation error.
    pub fn new(
        message: impl Into<String>,
        member_name: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            member_name: member_name.into(),
            code: code.into(),
        }
    }

    /// Human-readable description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Name of the field the failure is attributed to.
    pub fn member_name(&self) -> &str {
        &self.member_name
    }

    /// Stable machine-readable failure category (see [`crate::codes`]).
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} [{}]", self.member_name, self.message, self.code)
    }
}

/// Aggregate outcome of running one or more validators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// A result with no errors.
    pub fn success() -> Self {
        Self { errors: Vec::new() }
    }

    /// A result carrying exactly one error.
    pub fn failure(
        message: impl Into<String>,
        member_name: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            errors: vec![ValidationError::new(message, member_name, code)],
        }
    }

    /// `true` iff no errors have been recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All recorded errors, in merge order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Append every error of `other` to this result.
    pub fn merge(&mut self, other: ValidationResult) -> &mut Self {
        self.errors.extend(other.errors);
        self
    }

    /// Consuming variant of [`merge`](Self::merge), convenient in folds.
    pub fn merged(mut self, other: ValidationResult) -> Self {
        self.merge(other);
        self
    }

    /// Append a single error.
    pub fn add_error(
        &mut self,
        message: impl Into<String>,
        member_name: impl Into<String>,
        code: impl Into<String>,
    ) -> &mut Self {
        self.errors
            .push(ValidationError::new(message, member_name, code));
        self
    }

    /// All error messages joined with a single space.
    pub fn to_single_message(&self) -> String {
        self.errors
            .iter()
            .map(ValidationError::message)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether any error carries the given code.
    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Error codes in order.
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().map(ValidationError::code).collect()
    }

    /// Errors attributed to a specific field.
    pub fn errors_for<'a>(&'a self, member_name: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |e| e.member_name == member_name)
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            f.write_str("valid")
        } else {
            f.write_str(&self.to_single_message())
        }
    }
}

impl FromIterator<ValidationResult> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        iter.into_iter().fold(Self::success(), Self::merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_valid_and_empty() {
        let r = ValidationResult::success();
        assert!(r.is_valid());
        assert!(r.errors().is_empty());
    }

    #[test]
    fn failure_has_exactly_one_error() {
        let r = ValidationResult::failure("Value is required.", "Name", "Required");
        assert!(!r.is_valid());
        assert_eq!(r.errors().len(), 1);
        assert_eq!(r.errors()[0].member_name(), "Name");
        assert_eq!(r.errors()[0].code(), "Required");
    }

    #[test]
    fn merge_preserves_call_order() {
        let mut r = ValidationResult::success();
        r.merge(ValidationResult::failure("first", "A", "X"));
        r.merge(ValidationResult::success());
        r.merge(ValidationResult::failure("second", "B", "Y"));
        assert_eq!(r.codes(), vec!["X", "Y"]);
        assert_eq!(r.errors()[0].message(), "first");
    }

    #[test]
    fn merging_successes_stays_valid() {
        let mut r = ValidationResult::success();
        r.merge(ValidationResult::success()).merge(ValidationResult::success());
        assert!(r.is_valid());
    }

    #[test]
    fn add_error_invalidates() {
        let mut r = ValidationResult::success();
        r.add_error("bad", "Field", "InvalidFormat");
        assert!(!r.is_valid());
        assert!(r.has_code("InvalidFormat"));
        assert!(!r.has_code("Required"));
    }

    #[test]
    fn single_message_joins_with_space() {
        let mut r = ValidationResult::failure("One.", "A", "X");
        r.add_error("Two.", "B", "Y");
        assert_eq!(r.to_single_message(), "One. Two.");
        assert_eq!(ValidationResult::success().to_single_message(), "");
    }

    #[test]
    fn errors_for_filters_by_field() {
        let mut r = ValidationResult::failure("a", "Street", "InvalidStreet");
        r.add_error("b", "City", "InvalidCity");
        r.add_error("c", "Street", "Required");
        assert_eq!(r.errors_for("Street").count(), 2);
        assert_eq!(r.errors_for("Zip").count(), 0);
    }

    #[test]
    fn collect_merges_in_order() {
        let r: ValidationResult = vec![
            ValidationResult::failure("a", "F", "A"),
            ValidationResult::success(),
            ValidationResult::failure("b", "F", "B"),
        ]
        .into_iter()
        .collect();
        assert_eq!(r.codes(), vec!["A", "B"]);
    }

    #[test]
    fn serde_roundtrip() {
        let r = ValidationResult::failure("msg", "Field", "Code");
        let json = serde_json::to_string(&r).unwrap();
        let back: ValidationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}

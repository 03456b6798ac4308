//! # Error Hierarchy
//!
//! Expected bad input never surfaces as an error: validators report it in a
//! [`ValidationResult`]. [`ValidaError`] covers the remaining cases: the
//! strict `create`/`new` adapters, contract violations such as a reversed
//! range passed to a raw constructor, lookups of unknown codes, and
//! configuration problems.

use thiserror::Error;

use crate::result::ValidationResult;

/// Top-level error type for Valida.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidaError {
    /// Input failed validation through a strict constructor.
    #[error("validation failed: {}", .0.to_single_message())]
    Validation(ValidationResult),

    /// A range was constructed with its start after its end.
    #[error("invalid range: start {from} is after end {to}")]
    InvalidRange {
        /// Rendered start bound.
        from: String,
        /// Rendered end bound.
        to: String,
    },

    /// String is not a known ISO 3166-1 alpha-2 country code.
    #[error("unknown country code: {0:?}")]
    UnknownCountry(String),

    /// String is not a supported ISO 4217 currency code.
    #[error("unknown currency code: {0:?}")]
    UnknownCurrency(String),

    /// Arithmetic across two different currencies.
    #[error("currency mismatch: {left} and {right}")]
    CurrencyMismatch {
        /// Currency of the left operand.
        left: String,
        /// Currency of the right operand.
        right: String,
    },

    /// Arithmetic overflowed the underlying decimal representation.
    #[error("arithmetic overflow")]
    Overflow,

    /// Configuration value could not be parsed.
    #[error("invalid configuration for {key}: {reason}")]
    Config {
        /// The configuration key (environment variable).
        key: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ValidaError {
    /// The validation result carried by a [`ValidaError::Validation`].
    pub fn validation_result(&self) -> Option<&ValidationResult> {
        match self {
            Self::Validation(result) => Some(result),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_lists_messages() {
        let mut r = ValidationResult::failure("Area number is invalid.", "Ssn", "InvalidAreaNumber");
        r.add_error("Serial number is invalid.", "Ssn", "InvalidSerialNumber");
        let err = ValidaError::Validation(r);
        assert_eq!(
            err.to_string(),
            "validation failed: Area number is invalid. Serial number is invalid."
        );
        assert_eq!(err.validation_result().map(|r| r.errors().len()), Some(2));
    }

    #[test]
    fn invalid_range_display() {
        let err = ValidaError::InvalidRange {
            from: "2020-01-02".into(),
            to: "2020-01-01".into(),
        };
        assert!(err.to_string().contains("2020-01-02"));
        assert!(err.validation_result().is_none());
    }

    #[test]
    fn config_display() {
        let err = ValidaError::Config {
            key: "VALIDA_MAX_INPUT_LENGTH".into(),
            reason: "not a number".into(),
        };
        assert!(err.to_string().contains("VALIDA_MAX_INPUT_LENGTH"));
    }
}

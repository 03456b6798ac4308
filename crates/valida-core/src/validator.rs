//! # Validator Contract
//!
//! A [`ValueValidator<T>`] is a shared, thread-safe function from `&T` to
//! `Option<ValidationResult>`. `None` means "not applicable" and counts as
//! success. Validators capture their configuration (field name, country,
//! bounds) at creation time and are otherwise stateless.
//!
//! Running a chain never short-circuits: every validator runs and every
//! failure is collected.
//!
//! ```
//! use valida_core::{check, ValidatorChain, ValidationResult};
//!
//! let chain = ValidatorChain::<str>::new()
//!     .with(check(|v: &str| {
//!         if v.is_empty() {
//!             ValidationResult::failure("Code is required.", "Code", "Required")
//!         } else {
//!             ValidationResult::success()
//!         }
//!     }))
//!     .with(check(|v: &str| {
//!         if v.len() > 3 {
//!             ValidationResult::failure("Code is too long.", "Code", "InvalidLength")
//!         } else {
//!             ValidationResult::success()
//!         }
//!     }));
//!
//! assert!(chain.run("ab").is_valid());
//! assert!(!chain.run("abcd").is_valid());
//! ```

use std::sync::Arc;

use crate::result::ValidationResult;

/// A single validation concern applied to a value of type `T`.
pub type ValueValidator<T> = Arc<dyn Fn(&T) -> Option<ValidationResult> + Send + Sync>;

/// Wrap a closure that may decline to validate (returning `None`).
pub fn validator<T, F>(f: F) -> ValueValidator<T>
where
    T: ?Sized,
    F: Fn(&T) -> Option<ValidationResult> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a closure that always produces a result.
pub fn check<T, F>(f: F) -> ValueValidator<T>
where
    T: ?Sized,
    F: Fn(&T) -> ValidationResult + Send + Sync + 'static,
{
    Arc::new(move |value: &T| Some(f(value)))
}

/// Adapt a validator over `U` into one over `T` through a projection.
///
/// Used by composite objects to run a field validator against one
/// component of a larger input.
pub fn project<T, U, P>(inner: ValueValidator<U>, projection: P) -> ValueValidator<T>
where
    T: ?Sized,
    U: ?Sized + 'static,
    P: Fn(&T) -> &U + Send + Sync + 'static,
{
    Arc::new(move |value: &T| inner(projection(value)))
}

/// Run every validator against `value`, merging all failures in order.
pub fn run_validators<T: ?Sized>(value: &T, validators: &[ValueValidator<T>]) -> ValidationResult {
    let mut result = ValidationResult::success();
    for v in validators {
        if let Some(outcome) = v(value) {
            if !outcome.is_valid() {
                result.merge(outcome);
            }
        }
    }
    result
}

/// An ordered list of validators for one value type.
pub struct ValidatorChain<T: ?Sized> {
    validators: Vec<ValueValidator<T>>,
}

impl<T: ?Sized> ValidatorChain<T> {
    /// An empty chain. Running it always succeeds.
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Append a validator.
    pub fn with(mut self, validator: ValueValidator<T>) -> Self {
        self.validators.push(validator);
        self
    }

    /// Append a validator if one is supplied; `None` is skipped entirely.
    pub fn with_optional(mut self, validator: Option<ValueValidator<T>>) -> Self {
        if let Some(v) = validator {
            self.validators.push(v);
        }
        self
    }

    /// Append a validator in place.
    pub fn push(&mut self, validator: ValueValidator<T>) {
        self.validators.push(validator);
    }

    /// Run the whole chain.
    pub fn run(&self, value: &T) -> ValidationResult {
        run_validators(value, &self.validators)
    }

    /// Number of validators in the chain.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Borrow the validators.
    pub fn as_slice(&self) -> &[ValueValidator<T>] {
        &self.validators
    }

    /// Consume the chain into its validators.
    pub fn into_validators(self) -> Vec<ValueValidator<T>> {
        self.validators
    }
}

impl<T: ?Sized> Default for ValidatorChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for ValidatorChain<T> {
    fn clone(&self) -> Self {
        Self {
            validators: self.validators.clone(),
        }
    }
}

impl<T: ?Sized> std::fmt::Debug for ValidatorChain<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorChain")
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl<T: ?Sized> Extend<ValueValidator<T>> for ValidatorChain<T> {
    fn extend<I: IntoIterator<Item = ValueValidator<T>>>(&mut self, iter: I) {
        self.validators.extend(iter);
    }
}

impl<T: ?Sized> FromIterator<ValueValidator<T>> for ValidatorChain<T> {
    fn from_iter<I: IntoIterator<Item = ValueValidator<T>>>(iter: I) -> Self {
        Self {
            validators: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails_with(code: &'static str) -> ValueValidator<str> {
        check(move |_: &str| ValidationResult::failure("failed", "Field", code))
    }

    #[test]
    fn empty_chain_succeeds() {
        let chain = ValidatorChain::<str>::new();
        assert!(chain.is_empty());
        assert!(chain.run("anything").is_valid());
    }

    #[test]
    fn chain_collects_every_failure() {
        let chain = ValidatorChain::new()
            .with(fails_with("A"))
            .with(check(|_: &str| ValidationResult::success()))
            .with(fails_with("B"))
            .with(fails_with("C"));
        let r = chain.run("x");
        assert_eq!(r.codes(), vec!["A", "B", "C"]);
    }

    #[test]
    fn not_applicable_counts_as_success() {
        let chain = ValidatorChain::new()
            .with(validator(|_: &str| None))
            .with_optional(None)
            .with(fails_with("Only"));
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.run("x").codes(), vec!["Only"]);
    }

    #[test]
    fn validators_run_even_after_failure() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let chain = ValidatorChain::new().with(fails_with("First")).with(check(move |_: &str| {
            counter.fetch_add(1, Ordering::SeqCst);
            ValidationResult::success()
        }));
        chain.run("x");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn projection_applies_inner_validator() {
        struct Pair {
            left: String,
        }
        let inner = check(|v: &str| {
            if v.is_empty() {
                ValidationResult::failure("empty", "Left", "Required")
            } else {
                ValidationResult::success()
            }
        });
        let projected: ValueValidator<Pair> = project(inner, |p: &Pair| p.left.as_str());
        assert!(run_validators(&Pair { left: "a".into() }, &[projected.clone()]).is_valid());
        assert!(!run_validators(&Pair { left: String::new() }, &[projected]).is_valid());
    }

    #[test]
    fn validators_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        let v = fails_with("X");
        assert_send_sync(&v);
    }
}

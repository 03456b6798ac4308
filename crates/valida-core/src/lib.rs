//! # valida-core — Foundational Types for Validated Domain Primitives
//!
//! This crate is the bedrock of the Valida workspace. It defines the
//! validation engine every other crate builds on and depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Aggregate, don't short-circuit.** A [`ValidationResult`] collects
//!    every failure of a validator chain so callers see all problems in one
//!    pass.
//!
//! 2. **Validators are values.** A [`ValueValidator<T>`] is a shared
//!    `Fn(&T) -> Option<ValidationResult>` closure, parameterised at creation
//!    time and safe to call from any thread.
//!
//! 3. **Validate, then construct.** Value objects expose `try_create`,
//!    which returns an instance only when validation passed. The
//!    [`value_object::resolve`] helper is the single place that decision is
//!    made.
//!
//! 4. **Stable codes.** Every failure carries a code from [`codes`] that
//!    downstream code can match on.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `valida-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod codes;
pub mod config;
pub mod country;
pub mod currency;
pub mod error;
pub mod result;
pub mod validator;
pub mod value_object;

// Re-export primary types for ergonomic imports.
pub use config::ValidationConfig;
pub use country::{CountryCode, CountryInfo, COUNTRY_TABLE};
pub use currency::Currency;
pub use error::ValidaError;
pub use result::{ValidationError, ValidationResult};
pub use validator::{check, project, run_validators, validator, ValidatorChain, ValueValidator};
pub use value_object::{
    into_created, resolve, TryCreate, ValidatedString, ValidatedValue, ValidatedValueObject,
};

//! # Guarded Patterns and Country Tables
//!
//! Every regex in the catalogue is compiled once, on first use, and reused
//! for the life of the process. Matching goes through [`guarded_match`],
//! which refuses input longer than
//! [`ValidationConfig::max_input_length`](valida_core::ValidationConfig)
//! before the engine ever sees it.
//!
//! Country-specific formats live in a [`CountryTable`]: a static list of
//! `(country, pattern, expected)` rows. [`country_format`] turns a table
//! into a validator with the shared dispatch behaviour:
//!
//! 1. blank input is not applicable (required-ness is checked elsewhere);
//! 2. the input is normalised before matching;
//! 3. countries without a row, and the `Unknown`/`All` wildcards, pass;
//! 4. input refused by the length guard is not applicable;
//! 5. a mismatch yields one error naming the expected format.
//!
//! The length guard is reported once per chain, by the chain's shape or
//! length validator. Chains whose only pattern is a country table start
//! with [`validate_input_length`].

use once_cell::sync::Lazy;
use regex::Regex;

use valida_core::{codes, validator, CountryCode, ValidationConfig, ValidationResult, ValueValidator};

use crate::normalize::is_blank;

/// Outcome of a length-guarded regex match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guarded {
    Match,
    NoMatch,
    TooLong,
}

impl Guarded {
    /// Whether the pattern matched.
    pub fn is_match(self) -> bool {
        self == Self::Match
    }
}

/// Compile a built-in pattern.
///
/// Patterns passed here are string literals; every table is forced in the
/// test suite, so a malformed literal fails there rather than in production.
pub fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => panic!("built-in pattern {pattern:?} does not compile: {e}"),
    }
}

/// Match `input` against `re` unless it exceeds the configured length limit.
pub fn guarded_match(re: &Regex, input: &str) -> Guarded {
    let limit = ValidationConfig::global().max_input_length;
    let length = input.chars().count();
    if length > limit {
        tracing::warn!(length, limit, "input exceeds pattern length limit");
        return Guarded::TooLong;
    }
    if re.is_match(input) {
        Guarded::Match
    } else {
        Guarded::NoMatch
    }
}

/// The failure reported for input rejected by the length guard.
pub fn too_long(field: &str) -> ValidationResult {
    let limit = ValidationConfig::global().max_input_length;
    ValidationResult::failure(
        format!("{field} must not exceed {limit} characters."),
        field,
        codes::INVALID_LENGTH,
    )
}

/// Input whose normalised form exceeds the length guard fails with
/// `InvalidLength`; anything else passes.
pub fn validate_input_length(field: &str, normalize: fn(&str) -> String) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let limit = ValidationConfig::global().max_input_length;
        Some(if normalize(value).chars().count() > limit {
            too_long(&field)
        } else {
            ValidationResult::success()
        })
    })
}

/// Map a guarded match onto a result, using `on_mismatch` for `NoMatch`.
pub fn guarded_result<F>(re: &Regex, input: &str, field: &str, on_mismatch: F) -> ValidationResult
where
    F: FnOnce() -> ValidationResult,
{
    match guarded_match(re, input) {
        Guarded::Match => ValidationResult::success(),
        Guarded::NoMatch => on_mismatch(),
        Guarded::TooLong => too_long(field),
    }
}

/// A country's format rule.
#[derive(Debug)]
pub struct CountryRule {
    pub country: CountryCode,
    /// Human-readable description of the expected format.
    pub expected: &'static str,
    pattern: Regex,
}

impl CountryRule {
    /// Match a normalised value against this rule.
    pub fn matches(&self, normalized: &str) -> Guarded {
        guarded_match(&self.pattern, normalized)
    }
}

/// Static dispatch table from country to format rule.
#[derive(Debug)]
pub struct CountryTable {
    subject: &'static str,
    rules: Vec<CountryRule>,
}

impl CountryTable {
    /// Build a table from `(country, regex, expected)` rows.
    ///
    /// If a country appears twice, the first row wins.
    pub fn new(subject: &'static str, rows: &[(CountryCode, &'static str, &'static str)]) -> Self {
        let rules = rows
            .iter()
            .map(|&(country, pattern, expected)| CountryRule {
                country,
                expected,
                pattern: compile(pattern),
            })
            .collect();
        Self { subject, rules }
    }

    /// What the table validates, e.g. "postal code".
    pub fn subject(&self) -> &'static str {
        self.subject
    }

    /// The rule for `country`, if any. Wildcards never have one.
    pub fn rule(&self, country: CountryCode) -> Option<&CountryRule> {
        if country.is_wildcard() {
            return None;
        }
        self.rules.iter().find(|r| r.country == country)
    }

    /// Countries with a rule, in declaration order.
    pub fn countries(&self) -> impl Iterator<Item = CountryCode> + '_ {
        self.rules.iter().map(|r| r.country)
    }

    /// Whether `value` (already normalised) satisfies `country`'s rule.
    /// Countries without a rule accept everything.
    pub fn accepts(&self, country: CountryCode, normalized: &str) -> bool {
        self.rule(country)
            .map_or(true, |rule| rule.matches(normalized).is_match())
    }
}

/// Build a country-dispatched format validator over `table`.
pub fn country_format(
    table: &'static Lazy<CountryTable>,
    field: &str,
    country: CountryCode,
    code: &'static str,
    normalize: fn(&str) -> String,
) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let rule = table.rule(country)?;
        let normalized = normalize(value);
        match rule.matches(&normalized) {
            Guarded::Match => Some(ValidationResult::success()),
            Guarded::NoMatch => Some(ValidationResult::failure(
                format!(
                    "{field} is not a valid {} {}. Expected {}.",
                    country.name(),
                    table.subject(),
                    rule.expected
                ),
                field.as_str(),
                code,
            )),
            Guarded::TooLong => None,
        }
    })
}

//! Personal names.

use once_cell::sync::Lazy;
use regex::Regex;

use valida_core::{codes, ValueValidator};

use crate::common;
use crate::pattern::compile;

/// Letters (any script, with combining marks), spaces, hyphens, apostrophes
/// and periods. Must start with a letter.
static NAME_CHARS: Lazy<Regex> = Lazy::new(|| compile(r"^\p{L}[\p{L}\p{M} '’.\-]*$"));

pub fn validate_characters(field: &str) -> ValueValidator<str> {
    common::matches(
        field,
        NAME_CHARS.clone(),
        "letters, spaces, hyphens, apostrophes or periods, starting with a letter",
        codes::INVALID_NAME_CHARACTERS,
    )
}

/// Between 1 and `max` characters.
pub fn validate_length(field: &str, max: usize) -> ValueValidator<str> {
    common::length_between(field, 1, max)
}

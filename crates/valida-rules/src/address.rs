//! Street and city lines of a postal address.

use once_cell::sync::Lazy;
use regex::Regex;

use valida_core::{codes, ValueValidator};

use crate::common;
use crate::pattern::compile;

static STREET: Lazy<Regex> = Lazy::new(|| compile(r"^[\p{L}\p{N}][\p{L}\p{M}\p{N} .,'’#/\-]{1,99}$"));

static CITY: Lazy<Regex> = Lazy::new(|| compile(r"^\p{L}[\p{L}\p{M} .'’\-]{0,84}$"));

pub fn validate_street(field: &str) -> ValueValidator<str> {
    common::matches(
        field,
        STREET.clone(),
        "2 to 100 letters, digits, spaces or the characters . , ' # / -",
        codes::INVALID_STREET,
    )
}

pub fn validate_city(field: &str) -> ValueValidator<str> {
    common::matches(
        field,
        CITY.clone(),
        "up to 85 letters, spaces, hyphens, apostrophes or periods",
        codes::INVALID_CITY,
    )
}

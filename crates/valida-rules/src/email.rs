//! Email addresses (RFC 5321 length limits, pragmatic RFC 5322 syntax).

use once_cell::sync::Lazy;
use regex::Regex;

use valida_core::{codes, validator, ValidationResult, ValueValidator};

use crate::normalize::is_blank;
use crate::pattern::{compile, guarded_match, too_long, Guarded};

pub const MAX_ADDRESS_LENGTH: usize = 254;
pub const MAX_LOCAL_PART_LENGTH: usize = 64;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
});

/// Trimmed, with the domain lowercased. The local part keeps its case.
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim();
    match split(trimmed) {
        Some((local, domain)) => format!("{local}@{}", domain.to_ascii_lowercase()),
        None => trimmed.to_string(),
    }
}

/// Split at the last `@`.
pub fn split(address: &str) -> Option<(&str, &str)> {
    address.rsplit_once('@')
}

fn local_part_ok(local: &str) -> bool {
    local.len() <= MAX_LOCAL_PART_LENGTH
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
}

pub fn validate_format(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let address = value.trim();
        let shaped = match guarded_match(&EMAIL_REGEX, address) {
            Guarded::Match => true,
            Guarded::NoMatch => false,
            Guarded::TooLong => return Some(too_long(&field)),
        };
        let ok = shaped
            && address.len() <= MAX_ADDRESS_LENGTH
            && split(address).map_or(false, |(local, _)| local_part_ok(local));
        Some(if ok {
            ValidationResult::success()
        } else {
            ValidationResult::failure(
                format!("{field} is not a valid email address."),
                field.as_str(),
                codes::INVALID_EMAIL_FORMAT,
            )
        })
    })
}

//! Website URLs: absolute, with a host, parsed per the WHATWG URL standard.

use ::url::Url;

use valida_core::{codes, validator, ValidationResult, ValueValidator};

use crate::normalize::is_blank;

/// Parse an absolute URL that has a host.
pub fn parse(input: &str) -> Option<Url> {
    Url::parse(input.trim()).ok().filter(|u| u.has_host())
}

pub fn validate_format(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        Some(match parse(value) {
            Some(_) => ValidationResult::success(),
            None => ValidationResult::failure(
                format!("{field} must be an absolute URL with a host."),
                field.as_str(),
                codes::INVALID_URL_FORMAT,
            ),
        })
    })
}

/// Scheme must be one of `allowed` (compared case-insensitively). URLs that
/// do not parse are left to [`validate_format`].
pub fn validate_scheme(field: &str, allowed: &[&str]) -> ValueValidator<str> {
    let field = field.to_string();
    let allowed: Vec<String> = allowed.iter().map(|s| s.to_ascii_lowercase()).collect();
    validator(move |value: &str| {
        let url = parse(value)?;
        Some(if allowed.iter().any(|s| s == url.scheme()) {
            ValidationResult::success()
        } else {
            ValidationResult::failure(
                format!("{field} must use one of the schemes: {}.", allowed.join(", ")),
                field.as_str(),
                codes::INVALID_URL_SCHEME,
            )
        })
    })
}

//! IEEE 802 MAC-48 addresses.
//!
//! Accepted notations (case-insensitive):
//! `00:1A:2B:3C:4D:5E`, `00-1A-2B-3C-4D-5E`, `001A.2B3C.4D5E`, `001A2B3C4D5E`.

use once_cell::sync::Lazy;
use regex::Regex;

use valida_core::{codes, validator, ValidationResult, ValueValidator};

use crate::normalize::{compact_with, is_blank};
use crate::pattern::{compile, guarded_result};

static MAC_NOTATIONS: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"^(([0-9A-F]{2}:){5}[0-9A-F]{2}|([0-9A-F]{2}-){5}[0-9A-F]{2}|([0-9A-F]{4}\.){2}[0-9A-F]{4}|[0-9A-F]{12})$",
    )
});

const SEPARATORS: [char; 3] = [':', '-', '.'];

/// Twelve uppercase hex digits with separators removed.
pub fn normalize(input: &str) -> String {
    compact_with(input, &SEPARATORS)
}

/// Parse into octets, or `None` if `input` is not one of the accepted
/// notations.
pub fn parse_octets(input: &str) -> Option<[u8; 6]> {
    let upper = input.trim().to_ascii_uppercase();
    if !MAC_NOTATIONS.is_match(&upper) {
        return None;
    }
    let hex = normalize(&upper);
    let mut octets = [0u8; 6];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = u8::from_str_radix(hex.get(i * 2..i * 2 + 2)?, 16).ok()?;
    }
    Some(octets)
}

/// Render twelve hex digits with `separator` between octets.
pub fn format_with(hex: &str, separator: &str) -> String {
    hex.as_bytes()
        .chunks(2)
        .map(|pair| String::from_utf8_lossy(pair).into_owned())
        .collect::<Vec<_>>()
        .join(separator)
}

pub fn is_multicast(octets: &[u8; 6]) -> bool {
    octets[0] & 0x01 == 0x01 && !is_broadcast(octets)
}

pub fn is_broadcast(octets: &[u8; 6]) -> bool {
    octets.iter().all(|&o| o == 0xFF)
}

pub fn validate_format(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let upper = value.trim().to_ascii_uppercase();
        Some(guarded_result(&MAC_NOTATIONS, &upper, &field, || {
            ValidationResult::failure(
                format!("{field} must be six hex octets separated by ':' or '-', three dot-separated groups, or 12 hex digits."),
                field.as_str(),
                codes::INVALID_MAC_ADDRESS_FORMAT,
            )
        }))
    })
}

fn octet_check<F>(field: &str, code: &'static str, message: &'static str, rejects: F) -> ValueValidator<str>
where
    F: Fn(&[u8; 6]) -> bool + Send + Sync + 'static,
{
    let field = field.to_string();
    validator(move |value: &str| {
        let octets = parse_octets(value)?;
        Some(if rejects(&octets) {
            ValidationResult::failure(format!("{field} {message}."), field.as_str(), code)
        } else {
            ValidationResult::success()
        })
    })
}

pub fn validate_not_all_zeros(field: &str) -> ValueValidator<str> {
    octet_check(field, codes::ALL_ZEROS, "must not be all zeros", |o| o.iter().all(|&b| b == 0))
}

pub fn validate_not_broadcast(field: &str) -> ValueValidator<str> {
    octet_check(field, codes::BROADCAST_ADDRESS, "must not be the broadcast address", is_broadcast)
}

pub fn validate_not_multicast(field: &str) -> ValueValidator<str> {
    octet_check(field, codes::MULTICAST_ADDRESS, "must not be a multicast address", is_multicast)
}

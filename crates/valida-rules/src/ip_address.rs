//! IPv4 and IPv6 addresses.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use valida_core::{codes, validator, ValidationResult, ValueValidator};

use crate::normalize::is_blank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => Self::V4,
            IpAddr::V6(_) => Self::V6,
        }
    }
}

impl std::fmt::Display for IpVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::V4 => "IPv4",
            Self::V6 => "IPv6",
        })
    }
}

pub fn parse(input: &str) -> Option<IpAddr> {
    input.trim().parse().ok()
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
                format!("{field} is not a valid IPv4 or IPv6 address."),
                field.as_str(),
                codes::INVALID_IP_ADDRESS_FORMAT,
            ),
        })
    })
}

pub fn validate_version(field: &str, version: IpVersion) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        let addr = parse(value)?;
        Some(if IpVersion::of(&addr) == version {
            ValidationResult::success()
        } else {
            ValidationResult::failure(
                format!("{field} must be an {version} address."),
                field.as_str(),
                codes::INVALID_IP_VERSION,
            )
        })
    })
}

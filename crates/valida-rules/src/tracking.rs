//! # Parcel Tracking Numbers
//!
//! Carriers are tried in [`Carrier::DETECTION_ORDER`]; the first whose
//! pattern matches the compacted number determines the carrier. Several
//! carriers share shapes (13 digits is both Australia Post and TNT), so
//! the order is part of the contract.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use valida_core::{codes, validator, ValidationConfig, ValidationResult, ValueValidator};

use crate::normalize::{compact, is_blank};
use crate::pattern::{compile, guarded_match, too_long};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Carrier {
    Ups,
    FedEx,
    Usps,
    Dhl,
    RoyalMail,
    CanadaPost,
    AustraliaPost,
    Tnt,
    Dpd,
    /// Any other UPU S10 international item (`AA123456789BB`).
    UniversalPostal,
}

struct CarrierPattern {
    carrier: Carrier,
    pattern: Regex,
}

static CARRIER_PATTERNS: Lazy<Vec<CarrierPattern>> = Lazy::new(|| {
    Carrier::DETECTION_ORDER
        .into_iter()
        .map(|carrier| CarrierPattern {
            carrier,
            pattern: compile(carrier.pattern()),
        })
        .collect()
});

impl Carrier {
    pub const DETECTION_ORDER: [Carrier; 10] = [
        Self::Ups,
        Self::FedEx,
        Self::Usps,
        Self::Dhl,
        Self::RoyalMail,
        Self::CanadaPost,
        Self::AustraliaPost,
        Self::Tnt,
        Self::Dpd,
        Self::UniversalPostal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ups => "UPS",
            Self::FedEx => "FedEx",
            Self::Usps => "USPS",
            Self::Dhl => "DHL",
            Self::RoyalMail => "Royal Mail",
            Self::CanadaPost => "Canada Post",
            Self::AustraliaPost => "Australia Post",
            Self::Tnt => "TNT",
            Self::Dpd => "DPD",
            Self::UniversalPostal => "UPU S10",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            Self::Ups => r"^1Z[0-9A-Z]{16}$",
            Self::FedEx => r"^([0-9]{12}|[0-9]{15}|[0-9]{20})$",
            Self::Usps => r"^(9[2-5][0-9]{20}|[A-Z]{2}[0-9]{9}US)$",
            Self::Dhl => r"^[0-9]{10}$",
            Self::RoyalMail => r"^[A-Z]{2}[0-9]{9}GB$",
            Self::CanadaPost => r"^([0-9]{16}|[A-Z]{2}[0-9]{9}CA)$",
            Self::AustraliaPost => r"^([0-9]{13}|[A-Z]{2}[0-9]{9}AU)$",
            Self::Tnt => r"^([0-9]{9}|[0-9]{13})$",
            Self::Dpd => r"^[0-9]{14}$",
            Self::UniversalPostal => r"^[A-Z]{2}[0-9]{9}[A-Z]{2}$",
        }
    }
}

impl std::fmt::Display for Carrier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub fn normalize(input: &str) -> String {
    compact(input)
}

/// Carrier of a compacted tracking number.
pub fn detect_carrier(normalized: &str) -> Option<Carrier> {
    CARRIER_PATTERNS
        .iter()
        .find(|cp| guarded_match(&cp.pattern, normalized).is_match())
        .map(|cp| cp.carrier)
}

pub fn validate_format(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let normalized = normalize(value);
        if normalized.chars().count() > ValidationConfig::global().max_input_length {
            return Some(too_long(&field));
        }
        Some(match detect_carrier(&normalized) {
            Some(carrier) => {
                tracing::trace!(%carrier, "tracking number carrier detected");
                ValidationResult::success()
            }
            None => ValidationResult::failure(
                format!("{field} is not a recognised tracking number."),
                field.as_str(),
                codes::INVALID_TRACKING_NUMBER_FORMAT,
            ),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carriers() {
        let cases = [
            ("1Z999AA10123456784", Carrier::Ups),
            ("123456789012", Carrier::FedEx),
            ("9400111899223197428490", Carrier::Usps),
            ("EA123456789US", Carrier::Usps),
            ("1234567890", Carrier::Dhl),
            ("RR123456789GB", Carrier::RoyalMail),
            ("1234567890123456", Carrier::CanadaPost),
            ("123456789", Carrier::Tnt),
            ("12345678901234", Carrier::Dpd),
            ("RR123456789DE", Carrier::UniversalPostal),
        ];
        for (number, expected) in cases {
            assert_eq!(detect_carrier(number), Some(expected), "{number}");
        }
    }

    #[test]
    fn thirteen_digits_resolve_to_australia_post() {
        assert_eq!(detect_carrier("1234567890123"), Some(Carrier::AustraliaPost));
    }

    #[test]
    fn validator() {
        let v = validate_format("TrackingNumber");
        assert!(v("1z 999 aa1 0123 4567 84").unwrap().is_valid());
        assert_eq!(v("ABC").unwrap().codes(), vec!["InvalidTrackingNumberFormat"]);
        assert!(v("").is_none());
    }
}

//! # Payment Card Validators
//!
//! Primary account numbers (PAN), card security codes and expiry dates.
//!
//! Brand detection walks [`CardType::DETECTION_ORDER`]; the first brand
//! whose prefix range and length both match wins. Narrow ranges are listed
//! before the broad ones they overlap (Discover's `622126..=622925` before
//! UnionPay's `62`, everything before Maestro).

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use valida_core::{codes, validator, ValidationResult, ValueValidator};

use crate::checksum;
use crate::normalize::{compact, is_blank};
use crate::pattern::{compile, guarded_match, too_long, Guarded};

static PAN_SHAPE: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]{12,19}$"));

/// Card network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    AmericanExpress,
    DinersClub,
    Jcb,
    Visa,
    Mastercard,
    Discover,
    UnionPay,
    Maestro,
}

impl CardType {
    /// Order in which brands are tried by [`detect_card_type`].
    pub const DETECTION_ORDER: [CardType; 8] = [
        Self::AmericanExpress,
        Self::DinersClub,
        Self::Jcb,
        Self::Visa,
        Self::Mastercard,
        Self::Discover,
        Self::UnionPay,
        Self::Maestro,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::AmericanExpress => "American Express",
            Self::DinersClub => "Diners Club",
            Self::Jcb => "JCB",
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Discover => "Discover",
            Self::UnionPay => "UnionPay",
            Self::Maestro => "Maestro",
        }
    }

    /// Length of this brand's card security code.
    pub fn security_code_length(&self) -> usize {
        match self {
            Self::AmericanExpress => 4,
            _ => 3,
        }
    }

    fn accepts_length(&self, len: usize) -> bool {
        match self {
            Self::AmericanExpress => len == 15,
            Self::DinersClub => (14..=19).contains(&len),
            Self::Jcb | Self::Discover | Self::UnionPay => (16..=19).contains(&len),
            Self::Visa => matches!(len, 13 | 16 | 19),
            Self::Mastercard => len == 16,
            Self::Maestro => (12..=19).contains(&len),
        }
    }

    fn accepts_prefix(&self, digits: &str) -> bool {
        let prefix = |n: usize| digits.get(..n).and_then(|p| p.parse::<u32>().ok());
        let in_range = |n: usize, lo: u32, hi: u32| prefix(n).map_or(false, |p| (lo..=hi).contains(&p));
        match self {
            Self::AmericanExpress => matches!(prefix(2), Some(34 | 37)),
            Self::DinersClub => in_range(3, 300, 305) || matches!(prefix(2), Some(36 | 38 | 39)),
            Self::Jcb => in_range(4, 3528, 3589),
            Self::Visa => digits.starts_with('4'),
            Self::Mastercard => in_range(2, 51, 55) || in_range(4, 2221, 2720),
            Self::Discover => {
                prefix(4) == Some(6011)
                    || in_range(3, 644, 649)
                    || prefix(2) == Some(65)
                    || in_range(6, 622_126, 622_925)
            }
            Self::UnionPay => prefix(2) == Some(62),
            Self::Maestro => prefix(2) == Some(50) || in_range(2, 56, 69),
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Strip spaces and hyphens.
pub fn normalize(input: &str) -> String {
    compact(input)
}

/// Detect the brand of a digits-only PAN.
pub fn detect_card_type(digits: &str) -> Option<CardType> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let len = digits.len();
    CardType::DETECTION_ORDER
        .into_iter()
        .find(|t| t.accepts_prefix(digits) && t.accepts_length(len))
}

/// 12 to 19 digits after removing spaces and hyphens.
pub fn validate_format(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let normalized = normalize(value);
        Some(match guarded_match(&PAN_SHAPE, &normalized) {
            Guarded::Match => ValidationResult::success(),
            Guarded::NoMatch => ValidationResult::failure(
                format!("{field} must be between 12 and 19 digits."),
                field.as_str(),
                codes::INVALID_CARD_NUMBER_FORMAT,
            ),
            Guarded::TooLong => too_long(&field),
        })
    })
}

/// Luhn check. Only runs on well-formed numbers.
pub fn validate_luhn(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let normalized = normalize(value);
        if !PAN_SHAPE.is_match(&normalized) {
            return None;
        }
        Some(if checksum::luhn_is_valid(&normalized) {
            ValidationResult::success()
        } else {
            ValidationResult::failure(
                format!("{field} is not a valid card number."),
                field.as_str(),
                codes::INVALID_CHECKSUM,
            )
        })
    })
}

/// Security code: 3 digits, or 4 for American Express. With no known brand
/// either length is accepted.
pub fn validate_security_code(field: &str, card_type: Option<CardType>) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        let code = value.trim();
        let all_digits = code.bytes().all(|b| b.is_ascii_digit());
        let len = code.len();
        let (ok, expected) = match card_type {
            Some(t) => (len == t.security_code_length(), format!("{} digits", t.security_code_length())),
            None => (len == 3 || len == 4, "3 or 4 digits".to_string()),
        };
        Some(if all_digits && ok {
            ValidationResult::success()
        } else {
            ValidationResult::failure(
                format!("{field} must be {expected}."),
                field.as_str(),
                codes::INVALID_SECURITY_CODE,
            )
        })
    })
}

/// Expand a two-digit year into the 2000s.
pub fn full_year(year: i32) -> i32 {
    if (0..100).contains(&year) {
        2000 + year
    } else {
        year
    }
}

/// Expiry as `(month, year)`. The card is valid through the last day of its
/// expiry month relative to `today`.
pub fn validate_expiration(field: &str, today: NaiveDate) -> ValueValidator<(u32, i32)> {
    let field = field.to_string();
    validator(move |&(month, year): &(u32, i32)| {
        if !(1..=12).contains(&month) {
            return Some(ValidationResult::failure(
                format!("{field} month must be between 1 and 12."),
                field.as_str(),
                codes::INVALID_MONTH,
            ));
        }
        let year = full_year(year);
        Some(if (year, month) < (today.year(), today.month()) {
            ValidationResult::failure(
                format!("{field} expired at the end of {month:02}/{year}."),
                field.as_str(),
                codes::EXPIRED,
            )
        } else {
            ValidationResult::success()
        })
    })
}

/// Replace every digit but the last four with `*`.
pub fn mask(digits: &str) -> String {
    let len = digits.chars().count();
    digits
        .chars()
        .enumerate()
        .map(|(i, c)| if i + 4 < len { '*' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn brand_detection() {
        let cases = [
            ("378282246310005", CardType::AmericanExpress),
            ("30569309025904", CardType::DinersClub),
            ("3530111333300000", CardType::Jcb),
            ("4111111111111111", CardType::Visa),
            ("5555555555554444", CardType::Mastercard),
            ("2221000000000009", CardType::Mastercard),
            ("6011111111111117", CardType::Discover),
            ("6221260000000000", CardType::Discover),
            ("6200000000000005", CardType::UnionPay),
            ("6759649826438453", CardType::Maestro),
        ];
        for (pan, expected) in cases {
            assert_eq!(detect_card_type(pan), Some(expected), "{pan}");
        }
        assert_eq!(detect_card_type("9999999999999999"), None);
        assert_eq!(detect_card_type("41111111111111"), None);
    }

    #[test]
    fn format_and_luhn() {
        let fmt = validate_format("CardNumber");
        let luhn = validate_luhn("CardNumber");
        assert!(fmt("4111 1111 1111 1111").unwrap().is_valid());
        assert!(luhn("4111-1111-1111-1111").unwrap().is_valid());
        assert_eq!(luhn("4111111111111112").unwrap().codes(), vec!["InvalidChecksum"]);
        assert_eq!(fmt("4111").unwrap().codes(), vec!["InvalidCardNumberFormat"]);
        assert!(luhn("4111").is_none());
    }

    #[test]
    fn security_codes() {
        let amex = validate_security_code("Cvv", Some(CardType::AmericanExpress));
        assert!(amex("1234").unwrap().is_valid());
        assert!(!amex("123").unwrap().is_valid());
        let visa = validate_security_code("Cvv", Some(CardType::Visa));
        assert!(visa("123").unwrap().is_valid());
        let any = validate_security_code("Cvv", None);
        assert!(any("1234").unwrap().is_valid());
        assert_eq!(any("12a").unwrap().codes(), vec!["InvalidSecurityCode"]);
    }

    #[test]
    fn expiration() {
        let v = validate_expiration("Expiration", today());
        assert!(v(&(6, 2024)).unwrap().is_valid());
        assert!(v(&(1, 25)).unwrap().is_valid());
        assert_eq!(v(&(5, 2024)).unwrap().codes(), vec!["Expired"]);
        assert_eq!(v(&(13, 2030)).unwrap().codes(), vec!["InvalidMonth"]);
    }

    #[test]
    fn masking() {
        assert_eq!(mask("4111111111111111"), "************1111");
        assert_eq!(mask("123"), "123");
    }
}

//! # Barcodes
//!
//! Symbologies are tried in a fixed order and the first match wins:
//!
//! | Order | Format   | Rule                                                 |
//! |-------|----------|------------------------------------------------------|
//! | 1     | UPC-A    | 12 digits, GTIN check digit                          |
//! | 2     | EAN-13   | 13 digits, GTIN check digit                          |
//! | 3     | EAN-8    | 8 digits, GTIN check digit                           |
//! | 4     | Code 39  | `*` delimited, `0-9 A-Z space - . $ / + %`           |
//! | 5     | Code 128 | 2 to 48 printable ASCII, not all digits, no `*`      |

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use valida_core::{codes, validator, ValidationConfig, ValidationResult, ValueValidator};

use crate::checksum;
use crate::normalize::is_blank;
use crate::pattern::{compile, guarded_match, too_long};

static CODE39: Lazy<Regex> = Lazy::new(|| compile(r"^\*[0-9A-Z \-.$/+%]+\*$"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarcodeFormat {
    UpcA,
    Ean13,
    Ean8,
    Code39,
    Code128,
}

impl BarcodeFormat {
    pub const DETECTION_ORDER: [BarcodeFormat; 5] =
        [Self::UpcA, Self::Ean13, Self::Ean8, Self::Code39, Self::Code128];

    pub fn name(&self) -> &'static str {
        match self {
            Self::UpcA => "UPC-A",
            Self::Ean13 => "EAN-13",
            Self::Ean8 => "EAN-8",
            Self::Code39 => "Code 39",
            Self::Code128 => "Code 128",
        }
    }

    /// Whether `value` (trimmed) is a valid instance of this symbology.
    pub fn accepts(&self, value: &str) -> bool {
        let gtin = |len: usize| value.len() == len && checksum::gtin_is_valid(value);
        match self {
            Self::UpcA => gtin(12),
            Self::Ean13 => gtin(13),
            Self::Ean8 => gtin(8),
            Self::Code39 => guarded_match(&CODE39, value).is_match(),
            Self::Code128 => {
                let len = value.chars().count();
                (2..=48).contains(&len)
                    && value.chars().all(|c| (' '..='~').contains(&c) && c != '*')
                    && !value.chars().all(|c| c.is_ascii_digit())
            }
        }
    }
}

impl std::fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// First symbology in detection order that accepts the trimmed value.
pub fn detect_format(value: &str) -> Option<BarcodeFormat> {
    let value = value.trim();
    BarcodeFormat::DETECTION_ORDER
        .into_iter()
        .find(|format| format.accepts(value))
}

pub fn validate_format(field: &str) -> ValueValidator<str> {
    let field = field.to_string();
    validator(move |value: &str| {
        if is_blank(value) {
            return None;
        }
        if value.trim().chars().count() > ValidationConfig::global().max_input_length {
            return Some(too_long(&field));
        }
        Some(match detect_format(value) {
            Some(_) => ValidationResult::success(),
            None => ValidationResult::failure(
                format!("{field} is not a valid UPC-A, EAN-13, EAN-8, Code 39 or Code 128 barcode."),
                field.as_str(),
                codes::INVALID_BARCODE_FORMAT,
            ),
        })
    })
}

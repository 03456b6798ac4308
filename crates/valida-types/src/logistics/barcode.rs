use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, TryCreate, ValidaError, ValidatedString, ValidatedValue,
};
use valida_rules::barcode::{self, BarcodeFormat};
use valida_rules::common;

use crate::macros::string_value_object;

const FIELD: &str = "Barcode";

/// A barcode payload in one of the supported symbologies, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Barcode {
    #[serde(rename = "value")]
    inner: ValidatedString,
    format: BarcodeFormat,
}

impl Barcode {
    pub fn try_create(value: &str, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        let validators = vec![common::required(field), barcode::validate_format(field)];
        let result = run_validators(value, &validators);
        let (result, built) = resolve("Barcode", result, || {
            barcode::detect_format(value).map(|format| Self {
                inner: ValidatedValue::new(value.trim().to_string(), validators),
                format,
            })
        });
        (result, built.flatten())
    }

    pub fn create(value: &str) -> Result<Self, ValidaError> {
        into_created(Self::try_create(value, None))
    }

    /// The symbology detected at construction.
    pub fn format(&self) -> BarcodeFormat {
        self.format
    }

    /// Whether this is a UPC-A, EAN-13 or EAN-8 retail code.
    pub fn is_gtin(&self) -> bool {
        matches!(self.format, BarcodeFormat::UpcA | BarcodeFormat::Ean13 | BarcodeFormat::Ean8)
    }
}

string_value_object!(Barcode);

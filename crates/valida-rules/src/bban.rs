//! Basic Bank Account Number (BBAN) structures, per the IBAN registry.
//!
//! The BBAN is the country-local part of an IBAN (everything after the
//! four-character prefix). Structures below are expressed on the compacted
//! uppercase form.

use once_cell::sync::Lazy;

use valida_core::{codes, CountryCode, ValueValidator};

use crate::normalize::compact;
use crate::pattern::{country_format, CountryTable};

pub(crate) static BBAN_FORMATS: Lazy<CountryTable> = Lazy::new(|| {
    use CountryCode::*;
    CountryTable::new(
        "BBAN",
        &[
            (Austria, r"^[0-9]{16}$", "16 digits"),
            (Belgium, r"^[0-9]{12}$", "12 digits"),
            (Brazil, r"^[0-9]{23}[A-Z][A-Z0-9]$", "23 digits, an account type letter and an owner character"),
            (Czechia, r"^[0-9]{20}$", "20 digits"),
            (Denmark, r"^[0-9]{14}$", "14 digits"),
            (Finland, r"^[0-9]{14}$", "14 digits"),
            (France, r"^[0-9]{10}[A-Z0-9]{11}[0-9]{2}$", "10 digits, 11 alphanumerics and 2 digits"),
            (Germany, r"^[0-9]{18}$", "18 digits"),
            (Greece, r"^[0-9]{7}[A-Z0-9]{16}$", "7 digits and 16 alphanumerics"),
            (Ireland, r"^[A-Z]{4}[0-9]{14}$", "a 4-letter bank code and 14 digits"),
            (Italy, r"^[A-Z][0-9]{10}[A-Z0-9]{12}$", "a check letter, 10 digits and 12 alphanumerics"),
            (Luxembourg, r"^[0-9]{3}[A-Z0-9]{13}$", "3 digits and 13 alphanumerics"),
            (Netherlands, r"^[A-Z]{4}[0-9]{10}$", "a 4-letter bank code and 10 digits"),
            (Norway, r"^[0-9]{11}$", "11 digits"),
            (Pakistan, r"^[A-Z]{4}[A-Z0-9]{16}$", "a 4-letter bank code and 16 alphanumerics"),
            (Poland, r"^[0-9]{24}$", "24 digits"),
            (Portugal, r"^[0-9]{21}$", "21 digits"),
            (SaudiArabia, r"^[0-9]{2}[A-Z0-9]{18}$", "2 digits and 18 alphanumerics"),
            (Spain, r"^[0-9]{20}$", "20 digits"),
            (Sweden, r"^[0-9]{20}$", "20 digits"),
            (Switzerland, r"^[0-9]{5}[A-Z0-9]{12}$", "5 digits and 12 alphanumerics"),
            (Turkey, r"^[0-9]{5}0[A-Z0-9]{16}$", "5 digits, a reserved zero and 16 alphanumerics"),
            (UnitedArabEmirates, r"^[0-9]{19}$", "19 digits"),
            (UnitedKingdom, r"^[A-Z]{4}[0-9]{14}$", "a 4-letter bank code, a 6-digit sort code and an 8-digit account number"),
        ],
    )
});

/// The BBAN must match the structure registered for `country`.
pub fn validate_country_format(field: &str, country: CountryCode) -> ValueValidator<str> {
    country_format(&BBAN_FORMATS, field, country, codes::INVALID_BBAN_FORMAT, compact)
}

/// Whether `bban` (compacted) matches `country`'s registered structure.
/// Countries without a registered structure accept any BBAN.
pub fn matches_structure(country: CountryCode, bban: &str) -> bool {
    BBAN_FORMATS.accepts(country, bban)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_compiles_and_has_iban_length() {
        for country in BBAN_FORMATS.countries() {
            assert!(country.iban_length().is_some(), "{country} has a BBAN but no IBAN length");
        }
    }

    #[test]
    fn known_bbans() {
        assert!(matches_structure(CountryCode::Germany, "370400440532013000"));
        assert!(matches_structure(CountryCode::UnitedKingdom, "WEST12345698765432"));
        assert!(matches_structure(CountryCode::France, "20041010050500013M02606"));
        assert!(matches_structure(CountryCode::Netherlands, "ABNA0417164300"));
        assert!(!matches_structure(CountryCode::Germany, "37040044053201300"));
        assert!(!matches_structure(CountryCode::Netherlands, "12340417164300"));
    }

    #[test]
    fn validator_reports_bban_code() {
        let v = validate_country_format("Bban", CountryCode::Belgium);
        assert!(v("5390 0754 7034").unwrap().is_valid());
        assert_eq!(v("5390075470").unwrap().codes(), vec!["InvalidBbanFormat"]);
        assert!(validate_country_format("Bban", CountryCode::UnitedStates)("x").is_none());
    }
}

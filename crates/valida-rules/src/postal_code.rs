//! Postal codes.
//!
//! Patterns are written against the compacted form (spaces and hyphens
//! removed, uppercase), so `SW1A 1AA`, `sw1a1aa` and `1234-567` are matched
//! as `SW1A1AA` and `1234567`. Hong Kong and the UAE have no postal codes
//! and therefore no rule.

use once_cell::sync::Lazy;

use valida_core::{codes, CountryCode, ValueValidator};

use crate::normalize::compact;
use crate::pattern::{country_format, CountryTable};

pub(crate) static POSTAL_FORMATS: Lazy<CountryTable> = Lazy::new(|| {
    use CountryCode::*;
    CountryTable::new(
        "postal code",
        &[
            (UnitedStates, r"^[0-9]{5}([0-9]{4})?$", "a 5-digit ZIP or ZIP+4"),
            (UnitedKingdom, r"^[A-Z]{1,2}[0-9][A-Z0-9]?[0-9][A-Z]{2}$", "a UK postcode such as SW1A 1AA"),
            (
                Canada,
                r"^[ABCEGHJ-NPRSTVXY][0-9][ABCEGHJ-NPRSTV-Z][0-9][ABCEGHJ-NPRSTV-Z][0-9]$",
                "a postal code such as K1A 0B1",
            ),
            (Germany, r"^[0-9]{5}$", "5 digits"),
            (France, r"^[0-9]{5}$", "5 digits"),
            (Spain, r"^(0[1-9]|[1-4][0-9]|5[0-2])[0-9]{3}$", "5 digits starting with a province code 01 to 52"),
            (Italy, r"^[0-9]{5}$", "5 digits"),
            (Netherlands, r"^[1-9][0-9]{3}[A-Z]{2}$", "4 digits and 2 letters, e.g. 1012 AB"),
            (Belgium, r"^[1-9][0-9]{3}$", "4 digits"),
            (Austria, r"^[1-9][0-9]{3}$", "4 digits"),
            (Switzerland, r"^[1-9][0-9]{3}$", "4 digits"),
            (Denmark, r"^[0-9]{4}$", "4 digits"),
            (Norway, r"^[0-9]{4}$", "4 digits"),
            (Australia, r"^[0-9]{4}$", "4 digits"),
            (NewZealand, r"^[0-9]{4}$", "4 digits"),
            (SouthAfrica, r"^[0-9]{4}$", "4 digits"),
            (Sweden, r"^[1-9][0-9]{4}$", "5 digits, e.g. 114 55"),
            (Finland, r"^[0-9]{5}$", "5 digits"),
            (Portugal, r"^[1-9][0-9]{6}$", "7 digits, e.g. 1000-001"),
            (Poland, r"^[0-9]{5}$", "5 digits, e.g. 00-950"),
            (Czechia, r"^[1-7][0-9]{4}$", "5 digits, e.g. 110 00"),
            (Greece, r"^[1-8][0-9]{4}$", "5 digits"),
            (Luxembourg, r"^L?[0-9]{4}$", "4 digits with an optional L- prefix"),
            (
                Ireland,
                r"^([AC-FHKNPRTV-Y][0-9]{2}|D6W)[0-9AC-FHKNPRTV-Y]{4}$",
                "an Eircode such as D02 X285",
            ),
            (Japan, r"^[0-9]{7}$", "7 digits, e.g. 100-0001"),
            (China, r"^[0-9]{6}$", "6 digits"),
            (India, r"^[1-9][0-9]{5}$", "a 6-digit PIN code"),
            (Brazil, r"^[0-9]{8}$", "an 8-digit CEP, e.g. 01310-100"),
            (Mexico, r"^[0-9]{5}$", "5 digits"),
            (Singapore, r"^[0-9]{6}$", "6 digits"),
            (SouthKorea, r"^[0-9]{5}$", "5 digits"),
            (Pakistan, r"^[0-9]{5}$", "5 digits"),
            (SaudiArabia, r"^[0-9]{5}([0-9]{4})?$", "5 digits with an optional 4-digit extension"),
            (Turkey, r"^(0[1-9]|[1-7][0-9]|8[01])[0-9]{3}$", "5 digits starting with a province code 01 to 81"),
        ],
    )
});

pub fn normalize(input: &str) -> String {
    compact(input)
}

pub fn validate_country_format(field: &str, country: CountryCode) -> ValueValidator<str> {
    country_format(&POSTAL_FORMATS, field, country, codes::INVALID_POSTAL_CODE_FORMAT, normalize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(country: CountryCode, value: &str) -> bool {
        validate_country_format("PostalCode", country)(value).map_or(true, |r| r.is_valid())
    }

    #[test]
    fn common_formats() {
        assert!(ok(CountryCode::UnitedStates, "90210"));
        assert!(ok(CountryCode::UnitedStates, "90210-1234"));
        assert!(!ok(CountryCode::UnitedStates, "9021"));
        assert!(ok(CountryCode::UnitedKingdom, "SW1A 1AA"));
        assert!(ok(CountryCode::UnitedKingdom, "m1 1ae"));
        assert!(!ok(CountryCode::UnitedKingdom, "SW1A 1A"));
        assert!(ok(CountryCode::Canada, "K1A 0B1"));
        assert!(!ok(CountryCode::Canada, "D1A 0B1"));
        assert!(ok(CountryCode::Netherlands, "1012 AB"));
        assert!(!ok(CountryCode::Netherlands, "0123 AB"));
        assert!(ok(CountryCode::Ireland, "D02 X285"));
        assert!(ok(CountryCode::Japan, "100-0001"));
        assert!(ok(CountryCode::Portugal, "1000-001"));
    }

    #[test]
    fn countries_without_postcodes_pass() {
        assert!(validate_country_format("PostalCode", CountryCode::HongKong)("anything").is_none());
        assert!(validate_country_format("PostalCode", CountryCode::UnitedArabEmirates)("x").is_none());
    }

    #[test]
    fn every_other_country_has_a_rule() {
        let covered: Vec<_> = POSTAL_FORMATS.countries().collect();
        for country in CountryCode::all() {
            if matches!(country, CountryCode::HongKong | CountryCode::UnitedArabEmirates) {
                continue;
            }
            assert!(covered.contains(&country), "{country} has no postal code rule");
        }
    }

    #[test]
    fn failure_message_names_format() {
        let r = validate_country_format("Zip", CountryCode::Germany)("1234").unwrap();
        assert_eq!(r.codes(), vec!["InvalidPostalCodeFormat"]);
        assert_eq!(r.errors()[0].message(), "Zip is not a valid Germany postal code. Expected 5 digits.");
    }
}

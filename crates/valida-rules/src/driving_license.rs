//! Driving licence numbers.

use once_cell::sync::Lazy;

use valida_core::{codes, CountryCode, ValueValidator};

use crate::normalize::compact;
use crate::pattern::{country_format, CountryTable};

pub(crate) static LICENSE_FORMATS: Lazy<CountryTable> = Lazy::new(|| {
    use CountryCode::*;
    CountryTable::new(
        "driving licence number",
        &[
            (
                UnitedKingdom,
                r"^[A-Z9]{5}[0-9]{6}[A-Z9]{2}[0-9][A-Z]{2}$",
                "16 characters in the DVLA layout, e.g. MORGA657054SM9IJ",
            ),
            (UnitedStates, r"^[A-Z0-9]{4,16}$", "4 to 16 letters or digits"),
            (Canada, r"^[A-Z0-9]{5,15}$", "5 to 15 letters or digits"),
            (Australia, r"^[A-Z0-9]{6,10}$", "6 to 10 letters or digits"),
            (Germany, r"^[A-Z0-9]{11}$", "11 letters or digits"),
            (France, r"^[0-9]{12}$", "12 digits"),
            (Ireland, r"^[0-9]{9}$", "9 digits"),
            (India, r"^[A-Z]{2}[0-9]{13}$", "a 2-letter state code and 13 digits"),
            (Pakistan, r"^[0-9]{13}$", "13 digits"),
            (Netherlands, r"^[0-9]{10}$", "10 digits"),
            (Spain, r"^[0-9]{8}[A-Z]$", "8 digits and a check letter"),
            (Italy, r"^[A-Z]{2}[0-9]{7}[A-Z]$", "2 letters, 7 digits and a letter"),
            (NewZealand, r"^[A-Z]{2}[0-9]{6}$", "2 letters and 6 digits"),
            (Singapore, r"^[STFG][0-9]{7}[A-Z]$", "an NRIC/FIN number"),
        ],
    )
});

pub fn normalize(input: &str) -> String {
    compact(input)
}

pub fn validate_country_format(field: &str, country: CountryCode) -> ValueValidator<str> {
    country_format(
        &LICENSE_FORMATS,
        field,
        country,
        codes::INVALID_DRIVING_LICENSE_FORMAT,
        normalize,
    )
}

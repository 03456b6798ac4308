//! UK and Irish bank sort codes: six digits, conventionally `12-34-56`.

use once_cell::sync::Lazy;

use valida_core::{codes, CountryCode, ValueValidator};

use crate::normalize::compact;
use crate::pattern::{country_format, CountryTable};

pub(crate) static SORT_CODE_FORMATS: Lazy<CountryTable> = Lazy::new(|| {
    CountryTable::new(
        "sort code",
        &[
            (CountryCode::UnitedKingdom, r"^[0-9]{6}$", "6 digits, e.g. 12-34-56"),
            (CountryCode::Ireland, r"^[0-9]{6}$", "6 digits, e.g. 90-00-17"),
        ],
    )
});

pub fn normalize(input: &str) -> String {
    compact(input)
}

pub fn validate_country_format(field: &str, country: CountryCode) -> ValueValidator<str> {
    country_format(
        &SORT_CODE_FORMATS,
        field,
        country,
        codes::INVALID_SORT_CODE_FORMAT,
        normalize,
    )
}

/// `123456` → `12-34-56`. Input that is not six characters is returned as is.
pub fn format_dashed(normalized: &str) -> String {
    if normalized.len() != 6 || !normalized.is_ascii() {
        return normalized.to_string();
    }
    format!("{}-{}-{}", &normalized[..2], &normalized[2..4], &normalized[4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uk_sort_codes() {
        let v = validate_country_format("SortCode", CountryCode::UnitedKingdom);
        assert!(v("12-34-56").unwrap().is_valid());
        assert!(v("123456").unwrap().is_valid());
        assert_eq!(v("12-34-5").unwrap().codes(), vec!["InvalidSortCodeFormat"]);
    }

    #[test]
    fn other_countries_pass() {
        assert!(validate_country_format("SortCode", CountryCode::Germany)("1").is_none());
    }

    #[test]
    fn dashed_formatting() {
        assert_eq!(format_dashed("123456"), "12-34-56");
        assert_eq!(format_dashed("1234"), "1234");
    }
}

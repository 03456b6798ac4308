//! # Country Codes
//!
//! [`CountryCode`] is the closed set of issuing countries threaded through
//! every country-parameterised validator. Two sentinels sit alongside the
//! real countries:
//!
//! - [`CountryCode::Unknown`]: the caller does not know the country.
//! - [`CountryCode::All`]: the caller accepts any country.
//!
//! Both are permissive wildcards: country-specific rules are skipped.
//!
//! Per-country metadata (alpha-2 code, currency, IBAN length, calling code)
//! lives in a single static table, [`COUNTRY_TABLE`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::currency::Currency;
use crate::error::ValidaError;

/// Issuing country for country-parameterised validation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum CountryCode {
    Australia,
    Austria,
    Belgium,
    Brazil,
    Canada,
    China,
    Czechia,
    Denmark,
    Finland,
    France,
    Germany,
    Greece,
    HongKong,
    India,
    Ireland,
    Italy,
    Japan,
    Luxembourg,
    Mexico,
    Netherlands,
    NewZealand,
    Norway,
    Pakistan,
    Poland,
    Portugal,
    SaudiArabia,
    Singapore,
    SouthAfrica,
    SouthKorea,
    Spain,
    Sweden,
    Switzerland,
    Turkey,
    UnitedArabEmirates,
    UnitedKingdom,
    UnitedStates,
    /// Country not known; country-specific checks are skipped.
    #[default]
    Unknown,
    /// Any country accepted; country-specific checks are skipped.
    All,
}

/// Static metadata for one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryInfo {
    pub country: CountryCode,
    /// ISO 3166-1 alpha-2 code.
    pub alpha2: &'static str,
    /// English short name.
    pub name: &'static str,
    /// Primary ISO 4217 currency.
    pub currency: Currency,
    /// Total IBAN length, for countries in the IBAN registry.
    pub iban_length: Option<usize>,
    /// International dialling code without the leading `+`.
    pub calling_code: &'static str,
}

const fn row(
    country: CountryCode,
    alpha2: &'static str,
    name: &'static str,
    currency: Currency,
    iban_length: Option<usize>,
    calling_code: &'static str,
) -> CountryInfo {
    CountryInfo {
        country,
        alpha2,
        name,
        currency,
        iban_length,
        calling_code,
    }
}

/// Metadata for every real country, in enum order.
pub static COUNTRY_TABLE: [CountryInfo; 36] = [
    row(CountryCode::Australia, "AU", "Australia", Currency::Aud, None, "61"),
    row(CountryCode::Austria, "AT", "Austria", Currency::Eur, Some(20), "43"),
    row(CountryCode::Belgium, "BE", "Belgium", Currency::Eur, Some(16), "32"),
    row(CountryCode::Brazil, "BR", "Brazil", Currency::Brl, Some(29), "55"),
    row(CountryCode::Canada, "CA", "Canada", Currency::Cad, None, "1"),
    row(CountryCode::China, "CN", "China", Currency::Cny, None, "86"),
    row(CountryCode::Czechia, "CZ", "Czechia", Currency::Czk, Some(24), "420"),
    row(CountryCode::Denmark, "DK", "Denmark", Currency::Dkk, Some(18), "45"),
    row(CountryCode::Finland, "FI", "Finland", Currency::Eur, Some(18), "358"),
    row(CountryCode::France, "FR", "France", Currency::Eur, Some(27), "33"),
    row(CountryCode::Germany, "DE", "Germany", Currency::Eur, Some(22), "49"),
    row(CountryCode::Greece, "GR", "Greece", Currency::Eur, Some(27), "30"),
    row(CountryCode::HongKong, "HK", "Hong Kong", Currency::Hkd, None, "852"),
    row(CountryCode::India, "IN", "India", Currency::Inr, None, "91"),
    row(CountryCode::Ireland, "IE", "Ireland", Currency::Eur, Some(22), "353"),
    row(CountryCode::Italy, "IT", "Italy", Currency::Eur, Some(27), "39"),
    row(CountryCode::Japan, "JP", "Japan", Currency::Jpy, None, "81"),
    row(CountryCode::Luxembourg, "LU", "Luxembourg", Currency::Eur, Some(20), "352"),
    row(CountryCode::Mexico, "MX", "Mexico", Currency::Mxn, None, "52"),
    row(CountryCode::Netherlands, "NL", "Netherlands", Currency::Eur, Some(18), "31"),
    row(CountryCode::NewZealand, "NZ", "New Zealand", Currency::Nzd, None, "64"),
    row(CountryCode::Norway, "NO", "Norway", Currency::Nok, Some(15), "47"),
    row(CountryCode::Pakistan, "PK", "Pakistan", Currency::Pkr, Some(24), "92"),
    row(CountryCode::Poland, "PL", "Poland", Currency::Pln, Some(28), "48"),
    row(CountryCode::Portugal, "PT", "Portugal", Currency::Eur, Some(25), "351"),
    row(CountryCode::SaudiArabia, "SA", "Saudi Arabia", Currency::Sar, Some(24), "966"),
    row(CountryCode::Singapore, "SG", "Singapore", Currency::Sgd, None, "65"),
    row(CountryCode::SouthAfrica, "ZA", "South Africa", Currency::Zar, None, "27"),
    row(CountryCode::SouthKorea, "KR", "South Korea", Currency::Krw, None, "82"),
    row(CountryCode::Spain, "ES", "Spain", Currency::Eur, Some(24), "34"),
    row(CountryCode::Sweden, "SE", "Sweden", Currency::Sek, Some(24), "46"),
    row(CountryCode::Switzerland, "CH", "Switzerland", Currency::Chf, Some(21), "41"),
    row(CountryCode::Turkey, "TR", "Turkey", Currency::Try, Some(26), "90"),
    row(CountryCode::UnitedArabEmirates, "AE", "United Arab Emirates", Currency::Aed, Some(23), "971"),
    row(CountryCode::UnitedKingdom, "GB", "United Kingdom", Currency::Gbp, Some(22), "44"),
    row(CountryCode::UnitedStates, "US", "United States", Currency::Usd, None, "1"),
];

impl CountryCode {
    /// Every real country (sentinels excluded), in table order.
    pub fn all() -> impl Iterator<Item = CountryCode> {
        COUNTRY_TABLE.iter().map(|info| info.country)
    }

    /// Whether this is the `Unknown` or `All` sentinel.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Unknown | Self::All)
    }

    /// Table row for a real country; `None` for sentinels.
    pub fn info(&self) -> Option<&'static CountryInfo> {
        COUNTRY_TABLE.iter().find(|info| info.country == *self)
    }

    /// ISO 3166-1 alpha-2 code. `ZZ` for `Unknown`, `XX` for `All`.
    pub fn alpha2(&self) -> &'static str {
        match self {
            Self::Unknown => "ZZ",
            Self::All => "XX",
            other => other.info().map_or("ZZ", |i| i.alpha2),
        }
    }

    /// English short name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::All => "All",
            other => other.info().map_or("Unknown", |i| i.name),
        }
    }

    /// Primary currency, for real countries.
    pub fn currency(&self) -> Option<Currency> {
        self.info().map(|i| i.currency)
    }

    /// Expected IBAN length, if the country issues IBANs.
    pub fn iban_length(&self) -> Option<usize> {
        self.info().and_then(|i| i.iban_length)
    }

    /// International dialling code without `+`.
    pub fn calling_code(&self) -> Option<&'static str> {
        self.info().map(|i| i.calling_code)
    }

    /// Look up a real country by alpha-2 code, case-insensitively.
    pub fn from_alpha2(code: &str) -> Option<Self> {
        let upper = code.trim().to_ascii_uppercase();
        COUNTRY_TABLE
            .iter()
            .find(|info| info.alpha2 == upper)
            .map(|info| info.country)
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CountryCode {
    type Err = ValidaError;

    /// Parse an alpha-2 code. `UK` is accepted as an alias for `GB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("UK") {
            return Ok(Self::UnitedKingdom);
        }
        Self::from_alpha2(s).ok_or_else(|| ValidaError::UnknownCountry(s.to_string()))
    }
}

//! # Currency Codes (ISO 4217)
//!
//! The currencies of every country in [`crate::CountryCode`], with their
//! display symbols and minor-unit precision.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidaError;

/// Supported ISO 4217 currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Aed,
    Aud,
    Brl,
    Cad,
    Chf,
    Cny,
    Czk,
    Dkk,
    Eur,
    Gbp,
    Hkd,
    Inr,
    Jpy,
    Krw,
    Mxn,
    Nok,
    Nzd,
    Pkr,
    Pln,
    Sar,
    Sek,
    Sgd,
    Try,
    Usd,
    Zar,
}

impl Currency {
    /// All supported currencies in code order.
    pub fn all() -> &'static [Currency] {
        &[
            Self::Aed,
            Self::Aud,
            Self::Brl,
            Self::Cad,
            Self::Chf,
            Self::Cny,
            Self::Czk,
            Self::Dkk,
            Self::Eur,
            Self::Gbp,
            Self::Hkd,
            Self::Inr,
            Self::Jpy,
            Self::Krw,
            Self::Mxn,
            Self::Nok,
            Self::Nzd,
            Self::Pkr,
            Self::Pln,
            Self::Sar,
            Self::Sek,
            Self::Sgd,
            Self::Try,
            Self::Usd,
            Self::Zar,
        ]
    }

    /// The three-letter ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Aed => "AED",
            Self::Aud => "AUD",
            Self::Brl => "BRL",
            Self::Cad => "CAD",
            Self::Chf => "CHF",
            Self::Cny => "CNY",
            Self::Czk => "CZK",
            Self::Dkk => "DKK",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Hkd => "HKD",
            Self::Inr => "INR",
            Self::Jpy => "JPY",
            Self::Krw => "KRW",
            Self::Mxn => "MXN",
            Self::Nok => "NOK",
            Self::Nzd => "NZD",
            Self::Pkr => "PKR",
            Self::Pln => "PLN",
            Self::Sar => "SAR",
            Self::Sek => "SEK",
            Self::Sgd => "SGD",
            Self::Try => "TRY",
            Self::Usd => "USD",
            Self::Zar => "ZAR",
        }
    }

    /// Display symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd | Self::Aud | Self::Cad | Self::Nzd | Self::Sgd | Self::Hkd | Self::Mxn => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy | Self::Cny => "¥",
            Self::Chf => "CHF",
            Self::Inr => "₹",
            Self::Brl => "R$",
            Self::Sek | Self::Nok | Self::Dkk => "kr",
            Self::Czk => "Kč",
            Self::Pln => "zł",
            Self::Zar => "R",
            Self::Krw => "₩",
            Self::Try => "₺",
            Self::Aed => "د.إ",
            Self::Pkr => "₨",
            Self::Sar => "﷼",
        }
    }

    /// Number of minor-unit digits (0 for zero-decimal currencies).
    pub fn decimals(&self) -> u32 {
        match self {
            Self::Jpy | Self::Krw => 0,
            _ => 2,
        }
    }

    /// Look up a currency by code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        let upper = code.trim().to_ascii_uppercase();
        Self::all().iter().copied().find(|c| c.code() == upper)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ValidaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ValidaError::UnknownCurrency(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() {
        for c in Currency::all() {
            assert_eq!(Currency::from_code(c.code()), Some(*c));
        }
    }

    #[test]
    fn from_code_is_case_insensitive() {
        assert_eq!(Currency::from_code("eur"), Some(Currency::Eur));
        assert_eq!(" gbp ".parse::<Currency>().unwrap(), Currency::Gbp);
        assert!("XYZ".parse::<Currency>().is_err());
    }

    #[test]
    fn zero_decimal_currencies() {
        assert_eq!(Currency::Jpy.decimals(), 0);
        assert_eq!(Currency::Krw.decimals(), 0);
        assert_eq!(Currency::Usd.decimals(), 2);
    }

    #[test]
    fn serde_uses_iso_code() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
        let c: Currency = serde_json::from_str("\"SEK\"").unwrap();
        assert_eq!(c, Currency::Sek);
    }
}

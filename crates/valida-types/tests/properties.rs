//! Property tests across the value-object catalogue.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use proptest::prelude::*;

use valida_types::finance::{BankAccountNumber, CreditCardNumber, IbanNumber};
use valida_types::logistics::TrackingNumber;
use valida_types::network::MacAddress;
use valida_types::{CountryCode, ValidatedValueObject};

const VALID_IBANS: [&str; 4] = [
    "DE89370400440532013000",
    "GB82WEST12345698765432",
    "FR1420041010050500013M02606",
    "NL91ABNA0417164300",
];

/// Inserts spaces at arbitrary positions and randomises letter case.
fn respell(value: &str, spaces: &[bool], lower: &[bool]) -> String {
    let mut out = String::new();
    for (i, c) in value.chars().enumerate() {
        if spaces.get(i).copied().unwrap_or(false) {
            out.push(' ');
        }
        if lower.get(i).copied().unwrap_or(false) {
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn luhn_digit(prefix: &str) -> char {
    let sum: u32 = prefix
        .chars()
        .rev()
        .enumerate()
        .map(|(i, c)| {
            let d = c.to_digit(10).unwrap();
            if i % 2 == 0 {
                let dd = d * 2;
                if dd > 9 { dd - 9 } else { dd }
            } else {
                d
            }
        })
        .sum();
    char::from_digit((10 - sum % 10) % 10, 10).unwrap()
}

proptest! {
    #[test]
    fn try_create_result_matches_instance(input in "\\PC{0,40}") {
        let (result, iban) = IbanNumber::try_create(&input, None);
        prop_assert_eq!(result.is_valid(), iban.is_some());
        prop_assert_eq!(result.is_valid(), result.errors().is_empty());

        let (result, account) = BankAccountNumber::try_create(CountryCode::All, &input, None);
        prop_assert_eq!(result.is_valid(), account.is_some());

        let (result, mac) = MacAddress::try_create(&input, None);
        prop_assert_eq!(result.is_valid(), mac.is_some());
    }

    #[test]
    fn iban_equality_ignores_spacing_and_case(
        idx in 0usize..VALID_IBANS.len(),
        spaces in prop::collection::vec(any::<bool>(), 34),
        lower in prop::collection::vec(any::<bool>(), 34),
    ) {
        let canonical = IbanNumber::create(VALID_IBANS[idx]).unwrap();
        let respelled = IbanNumber::create(&respell(VALID_IBANS[idx], &spaces, &lower)).unwrap();
        prop_assert_eq!(canonical, respelled);
    }

    #[test]
    fn stored_values_revalidate_and_are_fixed_points(
        account in "[0-9]{4,17}",
        mac in "[0-9A-F]{2}(:[0-9A-F]{2}){5}",
        tracking in "1Z[0-9A-Z]{16}",
    ) {
        let first = BankAccountNumber::create(CountryCode::UnitedStates, &account).unwrap();
        let again = BankAccountNumber::create(CountryCode::UnitedStates, first.as_str()).unwrap();
        prop_assert!(first.validate().is_valid());
        prop_assert_eq!(first.as_str(), again.as_str());

        if let Ok(first) = MacAddress::create(&mac) {
            let again = MacAddress::create(first.as_str()).unwrap();
            prop_assert!(first.validate().is_valid());
            prop_assert_eq!(first, again);
        }

        let first = TrackingNumber::create(&tracking.to_lowercase()).unwrap();
        let again = TrackingNumber::create(first.as_str()).unwrap();
        prop_assert_eq!(first.as_str(), again.as_str());
        prop_assert_eq!(first.carrier(), again.carrier());
    }

    #[test]
    fn iban_single_character_mutation_is_rejected(
        idx in 0usize..VALID_IBANS.len(),
        pos in 4usize..18,
        bump in 1u32..10,
    ) {
        let iban = VALID_IBANS[idx];
        let chars: Vec<char> = iban.chars().collect();
        prop_assume!(chars[pos].is_ascii_digit());
        let d = chars[pos].to_digit(10).unwrap();
        let replaced = char::from_digit((d + bump) % 10, 10).unwrap();
        let mutated: String = chars
            .iter()
            .enumerate()
            .map(|(i, &c)| if i == pos { replaced } else { c })
            .collect();
        let (result, _) = IbanNumber::try_create(&mutated, None);
        prop_assert!(result.has_code("InvalidIbanChecksum"));
    }

    #[test]
    fn one_check_digit_completes_a_card_number(prefix in "4[0-9]{14}") {
        let valid: Vec<char> = ('0'..='9')
            .filter(|d| CreditCardNumber::try_create(&format!("{prefix}{d}"), None).1.is_some())
            .collect();
        prop_assert_eq!(valid, vec![luhn_digit(&prefix)]);
    }
}

/// Collects formatted subscriber output for assertions.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut b) = self.0.lock() {
            b.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn failed_resolution_emits_debug_event() {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("valida_core=debug")
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let (result, account) = tracing::subscriber::with_default(subscriber, || {
        BankAccountNumber::try_create(CountryCode::UnitedKingdom, "12", None)
    });
    assert!(account.is_none());
    assert!(!result.is_valid());

    let output = log.contents();
    assert!(output.contains("validation failed"), "{output}");
    assert!(output.contains("BankAccountNumber"), "{output}");
    assert!(output.contains("InvalidCountryAccountNumberFormat"), "{output}");
}

#[test]
fn successful_resolution_is_quiet_at_debug() {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("valida_core=debug")
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let created = tracing::subscriber::with_default(subscriber, || {
        BankAccountNumber::create(CountryCode::UnitedKingdom, "12345678")
    });
    assert!(created.is_ok());
    assert!(!log.contents().contains("validation failed"));
}

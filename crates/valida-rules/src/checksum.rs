//! # Checksum Algorithms
//!
//! The self-verifying digit schemes used by the catalogue. Every function
//! here is total: malformed input (wrong length, non-digit characters)
//! yields `false` or `None`, never a panic.
//!
//! | Scheme | Used by | Function |
//! |--------|---------|----------|
//! | Luhn (mod 10) | payment cards | [`luhn_is_valid`] |
//! | ISO 7064 mod 97-10 | IBAN | [`iban_is_valid`] |
//! | ABA 3-7-1 | US routing numbers | [`aba_is_valid`] |
//! | GTIN mod 10 | UPC-A, EAN-13, EAN-8 | [`gtin_is_valid`] |

fn digit_values(s: &str) -> Option<Vec<u32>> {
    if s.is_empty() {
        return None;
    }
    s.chars().map(|c| c.to_digit(10)).collect()
}

fn luhn_sum(digits: &[u32], double_rightmost: bool) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let double = (i % 2 == 0) == double_rightmost;
            if double {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum()
}

/// Luhn check over a string of ASCII digits.
///
/// Doubles every second digit starting from the second-from-right,
/// subtracting 9 from any doubled value above 9; valid iff the sum is a
/// multiple of 10.
pub fn luhn_is_valid(number: &str) -> bool {
    match digit_values(number) {
        Some(digits) if digits.len() >= 2 => luhn_sum(&digits, false) % 10 == 0,
        _ => false,
    }
}

/// The digit that, appended to `payload`, makes it Luhn-valid.
pub fn luhn_check_digit(payload: &str) -> Option<u32> {
    let digits = digit_values(payload)?;
    let sum = luhn_sum(&digits, true);
    Some((10 - sum % 10) % 10)
}

/// ISO 13616 mod-97 remainder of an IBAN.
///
/// Moves the first four characters to the end, maps letters to 10..=35,
/// and folds `r = (r * 10 + digit) % 97` over the resulting numeral so no
/// big-integer arithmetic is needed. Returns `None` for non-alphanumeric
/// input or input shorter than five characters.
pub fn iban_remainder(iban: &str) -> Option<u32> {
    if iban.len() < 5 || !iban.is_ascii() {
        return None;
    }
    let (head, tail) = iban.split_at(4);
    let mut remainder: u32 = 0;
    for c in tail.chars().chain(head.chars()) {
        let value = c.to_digit(36)?;
        if value < 10 {
            remainder = (remainder * 10 + value) % 97;
        } else {
            remainder = (remainder * 100 + value) % 97;
        }
    }
    Some(remainder)
}

/// Whether an IBAN (already compacted, uppercase) passes mod-97.
pub fn iban_is_valid(iban: &str) -> bool {
    iban_remainder(iban) == Some(1)
}

/// Compute the two IBAN check digits for a country code and BBAN.
pub fn iban_check_digits(country: &str, bban: &str) -> Option<String> {
    let probe = format!("{country}00{bban}");
    let remainder = iban_remainder(&probe)?;
    Some(format!("{:02}", 98 - remainder))
}

/// ABA routing checksum: `3(d1+d4+d7) + 7(d2+d5+d8) + (d3+d6+d9) ≡ 0 (mod 10)`.
pub fn aba_is_valid(routing: &str) -> bool {
    let d = match digit_values(routing) {
        Some(d) if d.len() == 9 => d,
        _ => return false,
    };
    let sum = 3 * (d[0] + d[3] + d[6]) + 7 * (d[1] + d[4] + d[7]) + (d[2] + d[5] + d[8]);
    sum % 10 == 0
}

/// GTIN check digit for a payload (the code without its last digit).
///
/// Weights alternate 3 and 1 starting with 3 on the rightmost payload
/// digit, which gives odd 1-indexed positions weight 3 for UPC-A and
/// EAN-8 and the standard EAN-13 weighting.
pub fn gtin_check_digit(payload: &str) -> Option<u32> {
    let digits = digit_values(payload)?;
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { d * 3 } else { d })
        .sum();
    Some((10 - sum % 10) % 10)
}

/// Whether a full GTIN (UPC-A, EAN-13, EAN-8, …) carries a valid check digit.
pub fn gtin_is_valid(code: &str) -> bool {
    if code.len() < 2 || !code.is_ascii() {
        return false;
    }
    let (payload, check) = code.split_at(code.len() - 1);
    match (gtin_check_digit(payload), check.chars().next().and_then(|c| c.to_digit(10))) {
        (Some(expected), Some(actual)) => expected == actual,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luhn_known_numbers() {
        assert!(luhn_is_valid("4111111111111111"));
        assert!(luhn_is_valid("5500005555555559"));
        assert!(luhn_is_valid("378282246310005"));
        assert!(luhn_is_valid("79927398713"));
        assert!(!luhn_is_valid("4111111111111112"));
        assert!(!luhn_is_valid("79927398710"));
    }

    #[test]
    fn luhn_rejects_malformed() {
        assert!(!luhn_is_valid(""));
        assert!(!luhn_is_valid("0"));
        assert!(!luhn_is_valid("4111-1111"));
    }

    #[test]
    fn luhn_check_digit_completes_number() {
        assert_eq!(luhn_check_digit("411111111111111"), Some(1));
        assert_eq!(luhn_check_digit("7992739871"), Some(3));
        assert_eq!(luhn_check_digit("12a"), None);
    }

    #[test]
    fn iban_known_values() {
        assert!(iban_is_valid("DE89370400440532013000"));
        assert!(iban_is_valid("GB82WEST12345698765432"));
        assert!(iban_is_valid("FR1420041010050500013M02606"));
        assert!(iban_is_valid("NL91ABNA0417164300"));
        assert!(!iban_is_valid("DE89370400440532013001"));
        assert!(!iban_is_valid("GB82WEST12345698765433"));
    }

    #[test]
    fn iban_remainder_rejects_malformed() {
        assert_eq!(iban_remainder("DE8"), None);
        assert_eq!(iban_remainder("DE89 3704"), None);
        assert_eq!(iban_remainder("DE89-3704"), None);
    }

    #[test]
    fn iban_check_digits_recomputes() {
        assert_eq!(iban_check_digits("DE", "370400440532013000").as_deref(), Some("89"));
        assert_eq!(iban_check_digits("GB", "WEST12345698765432").as_deref(), Some("82"));
    }

    #[test]
    fn aba_known_numbers() {
        assert!(aba_is_valid("021000021"));
        assert!(aba_is_valid("011000015"));
        assert!(aba_is_valid("122105155"));
        assert!(!aba_is_valid("021000020"));
        assert!(!aba_is_valid("02100002"));
        assert!(!aba_is_valid("02100002a"));
    }

    #[test]
    fn gtin_known_codes() {
        assert!(gtin_is_valid("036000291452")); // UPC-A
        assert!(gtin_is_valid("4006381333931")); // EAN-13
        assert!(gtin_is_valid("96385074")); // EAN-8
        assert!(!gtin_is_valid("036000291453"));
        assert!(!gtin_is_valid("4006381333932"));
        assert!(!gtin_is_valid("9638507X"));
    }

    #[test]
    fn gtin_check_digit_values() {
        assert_eq!(gtin_check_digit("03600029145"), Some(2));
        assert_eq!(gtin_check_digit("400638133393"), Some(1));
        assert_eq!(gtin_check_digit("9638507"), Some(4));
    }

    #[test]
    fn gtin_weighting_is_right_aligned() {
        // Same positional weights for the 12-digit payload of an EAN-13 and
        // the same payload zero-padded to GTIN-14.
        assert_eq!(gtin_check_digit("400638133393"), gtin_check_digit("0400638133393"));
        assert!(gtin_is_valid("4006381333931"));
        assert!(!gtin_is_valid("4006381333937"));
    }
}

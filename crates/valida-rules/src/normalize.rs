//! Input normalisation shared by the catalogue.
//!
//! All normalisers are idempotent: `f(f(x)) == f(x)`.

/// Strip whitespace and hyphens, uppercase ASCII letters.
pub fn compact(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Strip whitespace and every character in `separators`, uppercase ASCII.
pub fn compact_with(input: &str, separators: &[char]) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && !separators.contains(c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Keep ASCII digits only.
pub fn digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Whether the input is empty or whitespace-only.
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

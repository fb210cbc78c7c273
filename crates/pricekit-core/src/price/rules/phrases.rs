//! Phrase handling: "no price" phrases and permitted lead-ins.

use std::collections::HashSet;

use lazy_static::lazy_static;

use super::patterns::LEAD_IN;

/// Phrases meaning the price is simply not available. Matching them yields
/// "no price" rather than a parse error.
const UNAVAILABLE_PHRASES: &[&str] = &[
    "price not available",
    "unavailable price",
    "price upon request",
    "contact for price",
    "request a quote",
    "tbd",
    "tdb",
    "n/a",
    "price not disclosed",
    "out of stock",
    "sold out",
    "pricing not provided",
    "not priced",
    "currently unavailable",
    "ask for pricing",
];

lazy_static! {
    static ref UNAVAILABLE: HashSet<&'static str> =
        UNAVAILABLE_PHRASES.iter().copied().collect();
}

/// Whether the trimmed text is a known "no price" phrase, any casing.
pub fn is_unavailable(text: &str) -> bool {
    UNAVAILABLE.contains(text.to_lowercase().as_str())
}

/// Strip a permitted lead-in ("Starting At", "From") from the front of the
/// text. Anything else ahead of the amount still fails numeric validation.
pub fn strip_lead_in(text: &str) -> &str {
    match LEAD_IN.find(text) {
        Some(matched) => text[matched.end()..].trim_start(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_matching_ignores_case() {
        assert!(is_unavailable("Sold Out"));
        assert!(is_unavailable("sold out"));
        assert!(is_unavailable("PRICE NOT AVAILABLE"));
        assert!(is_unavailable("N/A"));
        assert!(!is_unavailable("Sold"));
        assert!(!is_unavailable("Twelve Dollars"));
    }

    #[test]
    fn lead_ins_are_stripped() {
        assert_eq!(strip_lead_in("Starting At 12.99"), "12.99");
        assert_eq!(strip_lead_in("from 399.99"), "399.99");
        assert_eq!(strip_lead_in("12.99"), "12.99");
    }

    #[test]
    fn lead_in_requires_a_word_boundary() {
        // "From" must be a standalone prefix word, not a fragment.
        assert_eq!(strip_lead_in("From399.99"), "From399.99");
    }
}

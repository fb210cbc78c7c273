//! Currency marker detection and the symbol table.

use std::collections::HashSet;

use lazy_static::lazy_static;
use tracing::debug;

use crate::error::{ParseError, Result};

/// One entry of the currency symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    /// ISO 4217 code.
    pub code: &'static str,
    /// Canonical display symbol.
    pub symbol: &'static str,
}

/// Known currencies. When several real-world currencies share a symbol
/// literal ("$", "¥", "kr", "L", "T"), the entry listed first owns it;
/// there is no runtime disambiguation by locale.
pub const CURRENCIES: &[Currency] = &[
    Currency { code: "USD", symbol: "$" },
    Currency { code: "EUR", symbol: "€" },
    Currency { code: "GBP", symbol: "£" },
    Currency { code: "JPY", symbol: "¥" },
    Currency { code: "CNY", symbol: "¥" },
    Currency { code: "CHF", symbol: "Fr." },
    Currency { code: "CAD", symbol: "C$" },
    Currency { code: "AUD", symbol: "A$" },
    Currency { code: "INR", symbol: "₹" },
    Currency { code: "KRW", symbol: "₩" },
    Currency { code: "RUB", symbol: "₽" },
    Currency { code: "TRY", symbol: "₺" },
    Currency { code: "BRL", symbol: "R$" },
    Currency { code: "ZAR", symbol: "R" },
    Currency { code: "MXN", symbol: "Mex$" },
    Currency { code: "NOK", symbol: "kr" },
    Currency { code: "SEK", symbol: "kr" },
    Currency { code: "DKK", symbol: "kr" },
    Currency { code: "CZK", symbol: "Kč" },
    Currency { code: "PLN", symbol: "zł" },
    Currency { code: "HUF", symbol: "Ft" },
    Currency { code: "RON", symbol: "L" },
    Currency { code: "ILS", symbol: "₪" },
    Currency { code: "AED", symbol: "د.إ" },
    Currency { code: "NGN", symbol: "₦" },
    Currency { code: "VND", symbol: "₫" },
    Currency { code: "THB", symbol: "฿" },
    Currency { code: "PHP", symbol: "₱" },
    Currency { code: "KZT", symbol: "T" },
    Currency { code: "MNT", symbol: "₮" },
    Currency { code: "BDT", symbol: "৳" },
    Currency { code: "UAH", symbol: "₴" },
    Currency { code: "PEN", symbol: "S/." },
    Currency { code: "PAB", symbol: "B/." },
];

lazy_static! {
    // Marker literals (codes and symbols) in longest-first match order, so
    // "S/." wins over any shorter literal it contains and "KZT" wins over
    // "T". Shared symbols keep the first (canonical) table entry.
    static ref ALIASES: Vec<(&'static str, &'static Currency)> = {
        let mut seen = HashSet::new();
        let mut aliases = Vec::new();
        for currency in CURRENCIES {
            for literal in [currency.code, currency.symbol] {
                if seen.insert(literal) {
                    aliases.push((literal, currency));
                }
            }
        }
        aliases.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        aliases
    };
}

/// Look up a currency by its ISO code.
pub fn currency_for_code(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|currency| currency.code == code)
}

/// Detect a currency marker at the start or end of the text.
///
/// Returns the matched table entry, if any, and the text with the marker
/// and its adjacent whitespace removed. At most one marker is permitted;
/// markers on both ends are rejected.
pub fn detect_currency(text: &str) -> Result<(Option<&'static Currency>, &str)> {
    let mut currency = None;
    let mut rest = text;

    for &(literal, candidate) in ALIASES.iter() {
        if let Some(stripped) = rest.strip_prefix(literal) {
            currency = Some(candidate);
            rest = stripped.trim_start();
            break;
        }
    }

    for &(literal, candidate) in ALIASES.iter() {
        if let Some(stripped) = rest.strip_suffix(literal) {
            if currency.is_some() {
                return Err(ParseError::AmbiguousCurrency(text.to_string()));
            }
            currency = Some(candidate);
            rest = stripped.trim_end();
            break;
        }
    }

    if let Some(matched) = currency {
        debug!("matched currency marker for {}", matched.code);
    }
    Ok((currency, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_and_suffix_markers() {
        let (currency, rest) = detect_currency("$1,000.00").unwrap();
        assert_eq!(currency.map(|c| c.code), Some("USD"));
        assert_eq!(rest, "1,000.00");

        let (currency, rest) = detect_currency("1.234 €").unwrap();
        assert_eq!(currency.map(|c| c.code), Some("EUR"));
        assert_eq!(rest, "1.234");
    }

    #[test]
    fn longest_literal_wins() {
        let (currency, rest) = detect_currency("100.000 KZT").unwrap();
        assert_eq!(currency.map(|c| c.code), Some("KZT"));
        assert_eq!(rest, "100.000");

        let (currency, rest) = detect_currency("S/.500").unwrap();
        assert_eq!(currency.map(|c| c.code), Some("PEN"));
        assert_eq!(rest, "500");
    }

    #[test]
    fn shared_symbols_resolve_canonically() {
        let (currency, _) = detect_currency("kr100").unwrap();
        assert_eq!(currency.map(|c| c.code), Some("NOK"));

        let (currency, _) = detect_currency("¥100").unwrap();
        assert_eq!(currency.map(|c| c.code), Some("JPY"));

        let (currency, _) = detect_currency("100 SEK").unwrap();
        assert_eq!(currency.map(|c| c.symbol), Some("kr"));
    }

    #[test]
    fn markers_on_both_ends_conflict() {
        assert!(matches!(
            detect_currency("$100 USD"),
            Err(ParseError::AmbiguousCurrency(_))
        ));
        assert!(matches!(
            detect_currency("$$"),
            Err(ParseError::AmbiguousCurrency(_))
        ));
    }

    #[test]
    fn no_marker_passes_text_through() {
        let (currency, rest) = detect_currency("1234.56").unwrap();
        assert!(currency.is_none());
        assert_eq!(rest, "1234.56");
    }

    #[test]
    fn code_lookup() {
        assert_eq!(currency_for_code("USD").map(|c| c.symbol), Some("$"));
        assert_eq!(currency_for_code("KZT").map(|c| c.symbol), Some("T"));
        assert_eq!(currency_for_code("XXX"), None);
    }
}

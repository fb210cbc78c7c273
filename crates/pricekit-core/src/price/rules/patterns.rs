//! Common regex patterns for price normalization.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Bare numeric text: digits with `.`/`,` separators only. Anything else
    // left over after stripping sign and currency is rejected here.
    pub static ref NUMERIC_TEXT: Regex = Regex::new(
        r"^[0-9.,]+$"
    ).unwrap();

    // Permitted lead-in phrases ahead of an amount ("Starting At 12.99").
    pub static ref LEAD_IN: Regex = Regex::new(
        r"(?i)^(?:starting\s+at|from)\s+"
    ).unwrap();
}

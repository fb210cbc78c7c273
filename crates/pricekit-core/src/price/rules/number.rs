//! Numeric-format disambiguation for bare price text.
//!
//! Price strings use `.` and `,` both as decimal and as thousands
//! separators depending on region ("1,000.00", "1.000,00", "1.000.000").
//! This module decides which is which and normalizes the text to a plain
//! `f64` literal, failing closed on irregular shapes.

use tracing::trace;

use crate::error::{ParseError, Result};

use super::patterns::NUMERIC_TEXT;

/// Parse the bare numeric portion of a price into a non-negative magnitude.
///
/// The text must consist of digits and `.`/`,` separators only; sign and
/// currency markers are stripped by the caller beforehand.
pub fn parse_magnitude(text: &str) -> Result<f64> {
    if text.is_empty() || !NUMERIC_TEXT.is_match(text) {
        return Err(ParseError::InvalidNumber(text.to_string()));
    }

    let separators: Vec<(usize, char)> = text
        .char_indices()
        .filter(|(_, c)| matches!(c, '.' | ','))
        .collect();

    let normalized = match separators.as_slice() {
        [] => text.to_string(),
        [(position, separator)] => normalize_single(text, *position, *separator)?,
        [earlier @ .., (last_position, last_separator)] => {
            normalize_repeated(text, earlier, *last_position, *last_separator)?
        }
    };

    let magnitude: f64 = normalized
        .parse()
        .map_err(|_| ParseError::InvalidNumber(text.to_string()))?;
    if !magnitude.is_finite() {
        return Err(ParseError::InvalidNumber(text.to_string()));
    }
    Ok(magnitude)
}

/// A single separator is a thousands separator only in the `1.234` shape:
/// 1-3 leading digits and exactly 3 trailing digits. Any other shape with
/// at least one trailing digit reads as a decimal point.
fn normalize_single(text: &str, position: usize, separator: char) -> Result<String> {
    let head = &text[..position];
    let tail = &text[position + 1..];

    if tail.is_empty() {
        return Err(ParseError::InvalidNumber(text.to_string()));
    }
    if tail.len() == 3 && !head.is_empty() && head.len() <= 3 {
        trace!("single {:?} in {:?} read as thousands separator", separator, text);
        Ok(format!("{head}{tail}"))
    } else {
        Ok(format!("{head}.{tail}"))
    }
}

/// With several separators, a final occurrence of the other character is
/// the decimal point; everything earlier marks thousands groups. Repeated
/// occurrences of one character are all thousands separators.
fn normalize_repeated(
    text: &str,
    earlier: &[(usize, char)],
    last_position: usize,
    last_separator: char,
) -> Result<String> {
    let mixed = earlier.iter().any(|&(_, c)| c != last_separator);
    if !mixed {
        return collapse_groups(text, text, last_separator);
    }

    // The decimal separator must be the single final occurrence of its
    // character; a group separator reappearing after it is malformed
    // ("1,234.56.78").
    if earlier.iter().any(|&(_, c)| c == last_separator) {
        return Err(ParseError::InvalidNumber(text.to_string()));
    }

    let (_, group_separator) = earlier[0];
    let integer = collapse_groups(text, &text[..last_position], group_separator)?;
    let fraction = &text[last_position + 1..];
    if fraction.is_empty() {
        return Err(ParseError::InvalidNumber(text.to_string()));
    }
    Ok(format!("{integer}.{fraction}"))
}

/// Validate exact 3-digit grouping and strip the separators.
fn collapse_groups(original: &str, part: &str, separator: char) -> Result<String> {
    let mut groups = part.split(separator);
    let first = groups.next().unwrap_or_default();
    if first.is_empty() || first.len() > 3 {
        return Err(ParseError::InvalidNumber(original.to_string()));
    }

    let mut digits = String::with_capacity(part.len());
    digits.push_str(first);
    for group in groups {
        if group.len() != 3 {
            return Err(ParseError::InvalidNumber(original.to_string()));
        }
        digits.push_str(group);
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_digits() {
        assert_eq!(parse_magnitude("1000"), Ok(1000.0));
        assert_eq!(parse_magnitude("0"), Ok(0.0));
    }

    #[test]
    fn single_separator_reads_as_decimal() {
        assert_eq!(parse_magnitude("0.1"), Ok(0.1));
        assert_eq!(parse_magnitude(".1"), Ok(0.1));
        assert_eq!(parse_magnitude("12.99"), Ok(12.99));
        assert_eq!(parse_magnitude("12,99"), Ok(12.99));
        assert_eq!(parse_magnitude("0.0004"), Ok(0.0004));
        assert_eq!(parse_magnitude("1234.567"), Ok(1234.567));
        assert_eq!(parse_magnitude("1234.5678"), Ok(1234.5678));
    }

    #[test]
    fn single_separator_reads_as_thousands() {
        assert_eq!(parse_magnitude("1.234"), Ok(1234.0));
        assert_eq!(parse_magnitude("1,234"), Ok(1234.0));
        assert_eq!(parse_magnitude("100.000"), Ok(100_000.0));
    }

    #[test]
    fn repeated_separators_are_groups() {
        assert_eq!(parse_magnitude("1.000.000"), Ok(1_000_000.0));
        assert_eq!(parse_magnitude("1,000,000"), Ok(1_000_000.0));
    }

    #[test]
    fn mixed_separators_split_on_the_last() {
        assert_eq!(parse_magnitude("1.234,45"), Ok(1234.45));
        assert_eq!(parse_magnitude("1.234.456,00"), Ok(1_234_456.0));
        assert_eq!(parse_magnitude("1,234.5678"), Ok(1234.5678));
    }

    #[test]
    fn irregular_grouping_is_rejected() {
        for text in [
            "1.00.00",
            "1.2.3",
            "1.234.56",
            "1,234,56",
            "123,456,12",
            "1,2,3",
            "1,,000",
            "1,234.56.78",
            "1234,567.89",
        ] {
            assert!(parse_magnitude(text).is_err(), "{text}");
        }
    }

    #[test]
    fn malformed_numeric_text_is_rejected() {
        for text in ["", "abc", "12a", "123.", "1..5", "1 000,00", "NaN", "INF"] {
            assert!(parse_magnitude(text).is_err(), "{text}");
        }
    }

    #[test]
    fn overflowing_magnitudes_are_rejected() {
        let huge = "9".repeat(400);
        assert!(parse_magnitude(&huge).is_err());
    }
}

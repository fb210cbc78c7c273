//! Price parser: normalizes raw price values into structured records.

use tracing::{debug, trace};

use crate::error::{ParseError, Result};
use crate::models::price::{ParsedPrice, RawPrice};

use super::rules::{currency, number, phrases};

/// Parser turning raw price values into [`ParsedPrice`] records.
///
/// Stateless per call; the only shared data are the read-only symbol and
/// phrase tables, so one parser can be used from any number of threads.
pub struct PriceParser {
    /// Whether known "no price" phrases map to an absent price.
    match_unavailable: bool,
    /// Whether permitted lead-ins ("Starting At", "From") are stripped.
    strip_lead_ins: bool,
}

impl PriceParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            match_unavailable: true,
            strip_lead_ins: true,
        }
    }

    /// Set whether "no price" phrases are recognized.
    pub fn with_unavailable_phrases(mut self, enabled: bool) -> Self {
        self.match_unavailable = enabled;
        self
    }

    /// Set whether permitted lead-in phrases are stripped.
    pub fn with_lead_in_stripping(mut self, enabled: bool) -> Self {
        self.strip_lead_ins = enabled;
        self
    }

    /// Parse a raw price value.
    ///
    /// Null and recognized "no price" phrases yield `Ok(None)`. Numbers pass
    /// through unchanged, text goes through the full normalization pipeline,
    /// and structured values are rejected.
    pub fn parse(&self, input: &RawPrice) -> Result<Option<ParsedPrice>> {
        match input {
            RawPrice::Null => Ok(None),
            RawPrice::Int(value) => Ok(Some(ParsedPrice::bare(*value as f64))),
            RawPrice::Float(value) => {
                if value.is_finite() {
                    Ok(Some(ParsedPrice::bare(*value)))
                } else {
                    Err(ParseError::InvalidNumber(value.to_string()))
                }
            }
            RawPrice::Text(text) => self.parse_text(text),
            RawPrice::Other(kind) => Err(ParseError::UnsupportedType((*kind).to_string())),
        }
    }

    /// Parse free-form price text.
    ///
    /// Stages run in a fixed order, each either advancing or terminating:
    /// trim, phrase match, lead-in strip, sign, currency marker, numeric
    /// validation and separator disambiguation, magnitude parse.
    pub fn parse_text(&self, text: &str) -> Result<Option<ParsedPrice>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        if self.match_unavailable && phrases::is_unavailable(trimmed) {
            debug!("{:?} is a known unavailable-price phrase", trimmed);
            return Ok(None);
        }

        let rest = if self.strip_lead_ins {
            phrases::strip_lead_in(trimmed)
        } else {
            trimmed
        };

        // A single leading minus, ahead of any currency marker.
        let (negative, rest) = match rest.strip_prefix('-') {
            Some(tail) => (true, tail.trim_start()),
            None => (false, rest),
        };

        let (matched, rest) = currency::detect_currency(rest)?;
        let magnitude = number::parse_magnitude(rest)?;
        let amount = if negative { -magnitude } else { magnitude };

        let parsed = match matched {
            Some(entry) => ParsedPrice::in_currency(amount, entry),
            None => ParsedPrice::bare(amount),
        };
        trace!("parsed {:?} as {}", text, parsed);
        Ok(Some(parsed))
    }
}

impl Default for PriceParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a raw price value with default settings.
pub fn parse_price(input: &RawPrice) -> Result<Option<ParsedPrice>> {
    PriceParser::new().parse(input)
}

/// Parse price text with default settings.
pub fn parse_str(text: &str) -> Result<Option<ParsedPrice>> {
    PriceParser::new().parse_text(text)
}

/// Parse a JSON value with default settings.
pub fn parse_value(value: &serde_json::Value) -> Result<Option<ParsedPrice>> {
    PriceParser::new().parse(&RawPrice::from(value))
}

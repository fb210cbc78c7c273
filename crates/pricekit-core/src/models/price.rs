//! Price data models.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::price::rules::currency::Currency;

/// A normalized price extracted from a raw value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedPrice {
    /// Numeric amount with the sign applied. Always finite.
    pub amount: f64,

    /// ISO 4217 currency code, when a currency marker was recognized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Canonical symbol of the recognized currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
}

impl ParsedPrice {
    /// A price with no currency information.
    pub fn bare(amount: f64) -> Self {
        Self {
            amount,
            currency: None,
            currency_symbol: None,
        }
    }

    /// A price in a known currency. Code and symbol always come from the
    /// same symbol-table entry, so they are set or absent together.
    pub fn in_currency(amount: f64, currency: &Currency) -> Self {
        Self {
            amount,
            currency: Some(currency.code.to_string()),
            currency_symbol: Some(currency.symbol.to_string()),
        }
    }
}

impl fmt::Display for ParsedPrice {
    /// Canonical form: sign, symbol, then the amount with a `.` radix point
    /// and no thousands separators. Reparsing it yields the same record.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amount.is_sign_negative() {
            write!(f, "-")?;
        }
        if let Some(symbol) = &self.currency_symbol {
            write!(f, "{symbol}")?;
        }
        write!(f, "{}", self.amount.abs())
    }
}

/// A raw price value as it arrives from a document or API payload.
///
/// Inputs are dynamically typed at the source; this union models the call
/// boundary explicitly. `Other` carries the name of a shape (mapping,
/// sequence, boolean) that can never hold a price and is always rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPrice {
    /// No value at all.
    Null,
    /// An already-numeric integer amount.
    Int(i64),
    /// An already-numeric floating-point amount.
    Float(f64),
    /// Free-form price text.
    Text(String),
    /// A structured value; the payload names its shape.
    Other(&'static str),
}

impl From<&serde_json::Value> for RawPrice {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawPrice::Null,
            serde_json::Value::Bool(_) => RawPrice::Other("boolean"),
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    RawPrice::Int(int)
                } else if let Some(float) = number.as_f64() {
                    RawPrice::Float(float)
                } else {
                    RawPrice::Other("number")
                }
            }
            serde_json::Value::String(text) => RawPrice::Text(text.clone()),
            serde_json::Value::Array(_) => RawPrice::Other("sequence"),
            serde_json::Value::Object(_) => RawPrice::Other("mapping"),
        }
    }
}

impl From<i64> for RawPrice {
    fn from(value: i64) -> Self {
        RawPrice::Int(value)
    }
}

impl From<f64> for RawPrice {
    fn from(value: f64) -> Self {
        RawPrice::Float(value)
    }
}

impl From<&str> for RawPrice {
    fn from(value: &str) -> Self {
        RawPrice::Text(value.to_string())
    }
}

impl From<String> for RawPrice {
    fn from(value: String) -> Self {
        RawPrice::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::rules::currency::currency_for_code;

    #[test]
    fn display_is_canonical() {
        let price = ParsedPrice {
            amount: -1234.56,
            currency: Some("JPY".to_string()),
            currency_symbol: Some("¥".to_string()),
        };
        assert_eq!(price.to_string(), "-¥1234.56");
        assert_eq!(ParsedPrice::bare(1000.0).to_string(), "1000");
    }

    #[test]
    fn serialization_skips_absent_currency() {
        let json = serde_json::to_value(ParsedPrice::bare(12.5)).unwrap();
        assert_eq!(json, serde_json::json!({"amount": 12.5}));

        let usd = currency_for_code("USD").unwrap();
        let json = serde_json::to_value(ParsedPrice::in_currency(1.0, usd)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"amount": 1.0, "currency": "USD", "currency_symbol": "$"})
        );
    }

    #[test]
    fn json_values_map_onto_raw_prices() {
        assert_eq!(RawPrice::from(&serde_json::json!(null)), RawPrice::Null);
        assert_eq!(RawPrice::from(&serde_json::json!(1000)), RawPrice::Int(1000));
        assert_eq!(RawPrice::from(&serde_json::json!(10.5)), RawPrice::Float(10.5));
        assert_eq!(
            RawPrice::from(&serde_json::json!("$5")),
            RawPrice::Text("$5".to_string())
        );
        assert_eq!(
            RawPrice::from(&serde_json::json!([1, 2])),
            RawPrice::Other("sequence")
        );
        assert_eq!(
            RawPrice::from(&serde_json::json!({"amount": 1})),
            RawPrice::Other("mapping")
        );
    }
}

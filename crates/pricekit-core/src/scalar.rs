//! Serde scalar integration: a price field type for validation models.
//!
//! `Price` coerces any self-describing input (string, number, null) through
//! the parser during deserialization. Parse failures surface as ordinary
//! serde errors, so a deserializing validation layer reports them the same
//! way it reports any other invalid field.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::models::price::{ParsedPrice, RawPrice};
use crate::price::PriceParser;

/// A price field: either a parsed price or "no price".
///
/// Serializes transparently as the inner option; deserializes by running
/// the input through [`PriceParser`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Price(pub Option<ParsedPrice>);

impl Price {
    /// Consume the field, returning the parsed price if one is present.
    pub fn into_inner(self) -> Option<ParsedPrice> {
        self.0
    }
}

impl From<Option<ParsedPrice>> for Price {
    fn from(inner: Option<ParsedPrice>) -> Self {
        Price(inner)
    }
}

struct PriceVisitor;

fn coerce<E: de::Error>(result: crate::error::Result<Option<ParsedPrice>>) -> Result<Price, E> {
    result.map(Price).map_err(E::custom)
}

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a price string, a number, or null")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Price(None))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Price(None))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PriceVisitor)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        coerce(PriceParser::new().parse(&RawPrice::Int(value)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let raw = match i64::try_from(value) {
            Ok(int) => RawPrice::Int(int),
            Err(_) => RawPrice::Float(value as f64),
        };
        coerce(PriceParser::new().parse(&raw))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        coerce(PriceParser::new().parse(&RawPrice::Float(value)))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        coerce(PriceParser::new().parse_text(value))
    }

    fn visit_bool<E>(self, _value: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(E::custom(ParseError::UnsupportedType("boolean".to_string())))
    }

    fn visit_seq<A>(self, _seq: A) -> Result<Self::Value, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        Err(de::Error::custom(ParseError::UnsupportedType(
            "sequence".to_string(),
        )))
    }

    fn visit_map<A>(self, _map: A) -> Result<Self::Value, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        Err(de::Error::custom(ParseError::UnsupportedType(
            "mapping".to_string(),
        )))
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PriceVisitor)
    }
}

//! Core library for price normalization.
//!
//! This crate provides:
//! - Parsing of free-form price text: currency symbols and ISO codes,
//!   regional numeric formats ("1,000.00" vs "1.000,00" vs "1.000.000")
//! - "No price" phrase handling (null result, not an error)
//! - Price data models and a serde scalar type for validation models

pub mod error;
pub mod models;
pub mod price;
pub mod scalar;

pub use error::{ParseError, Result};
pub use models::price::{ParsedPrice, RawPrice};
pub use price::rules::currency::{currency_for_code, Currency, CURRENCIES};
pub use price::{parse_price, parse_str, parse_value, PriceParser};
pub use scalar::Price;

//! Price normalization module.

mod parser;
pub mod rules;

pub use parser::{parse_price, parse_str, parse_value, PriceParser};

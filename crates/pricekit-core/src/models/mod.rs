//! Data models for raw and parsed prices.

pub mod price;

pub use price::{ParsedPrice, RawPrice};

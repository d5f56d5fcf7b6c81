#![doc = include_str!("../README.md")]

pub mod clean;
pub mod decode;
pub mod encode;
pub mod error;
pub mod io;
pub mod options;
pub mod value;

mod number;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod ser;

pub use crate::clean::{CleanStats, clean_non_finite};
pub use crate::decode::MAX_NESTING_DEPTH;
pub use crate::error::{Diagnostic, Error, ErrorCode, Result};
pub use crate::options::{FormatConfig, MAX_PRECISION, NonFinitePolicy, NumberFormat};
pub use crate::value::Value;

/// Parses one JSON document into a [`Value`] tree.
pub fn parse(input: &str) -> Result<Value> {
    crate::decode::parser::parse(input)
}

/// Checks `input` for grammar conformance without building a tree.
///
/// Accepts exactly the inputs [`parse`] accepts and reports the same
/// diagnostics, at recognizer cost.
pub fn validate(input: &str) -> Result<()> {
    crate::decode::validation::validate(input)
}

/// `true` iff [`parse`] would succeed on `input`.
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

/// Renders a [`Value`] tree to text under `config`.
pub fn format(value: &Value, config: &FormatConfig) -> Result<String> {
    crate::encode::format(value, config)
}

//! Tree-to-text pipeline: output writer, scalar rendering, and the recursive
//! layout walk.

pub(crate) mod encoders;
pub(crate) mod primitives;
pub(crate) mod writer;

use crate::error::Result;
use crate::options::FormatConfig;
use crate::value::Value;

/// Renders a value tree to text under `config`.
///
/// The config is checked before any formatting work; a single `line_end`
/// follows the root value when one is configured.
pub fn format(value: &Value, config: &FormatConfig) -> Result<String> {
    config.validate()?;
    let mut w = writer::Writer::new(config);
    encoders::write_value(value, &mut w, config, 0)?;
    let mut out = w.into_string();
    out.push_str(&config.line_end);
    Ok(out)
}

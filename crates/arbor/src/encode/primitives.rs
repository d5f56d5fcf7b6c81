use std::fmt::Write as _;

use crate::error::{Diagnostic, Error, ErrorCode, Result};
use crate::number;
use crate::options::{FormatConfig, NumberFormat};

/// Writes `s` as a quoted JSON string: the seven named escapes, remaining
/// control characters as `\u00XX`, everything else verbatim.
pub(crate) fn escape_into(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Renders a number under the configured style. Non-finite values are a hard
/// error here; the skip policy filters them out before this point.
pub(crate) fn render_number(value: f64, config: &FormatConfig) -> Result<String> {
    if value.is_nan() {
        return Err(Error::Format(Diagnostic::format_error(
            ErrorCode::InvalidNumberNan,
            "NaN is not representable in JSON",
        )));
    }
    if value.is_infinite() {
        return Err(Error::Format(Diagnostic::format_error(
            ErrorCode::InvalidNumberInfinity,
            "infinity is not representable in JSON",
        )));
    }
    Ok(match config.number_format {
        NumberFormat::Decimal => number::decimal(value, config.precision),
        NumberFormat::Scientific => number::scientific(value, config.precision),
        NumberFormat::Auto => number::auto(value, config.precision),
        NumberFormat::Canonical => number::canonical(value),
    })
}

pub(crate) fn render_bool(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

use crate::error::{Diagnostic, Error, ErrorCode, Result};

/// Numeric rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// Fixed-point with `precision` fractional digits.
    Decimal,
    /// Scientific notation with `precision` mantissa digits.
    Scientific,
    /// Scientific for magnitudes below `1e-4` or above `1e5`, fixed-point
    /// otherwise.
    #[default]
    Auto,
    /// Shortest text that parses back to the identical value; ignores
    /// `precision`.
    Canonical,
}

/// What the formatter does when it meets a NaN or infinite number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonFinitePolicy {
    /// Fail the whole format call. Callers expecting NaN in their data can
    /// pre-filter with [`clean_non_finite`](crate::clean_non_finite).
    #[default]
    Error,
    /// Drop the array element or object entry holding the value; a
    /// non-finite root renders as `null`.
    Skip,
}

/// Formatter configuration. Start from a preset and adjust fields as needed.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatConfig {
    /// Text emitted once per indent level (e.g. `"  "` or `"\t"`).
    pub indent: String,
    /// Line terminator; empty suppresses line breaks entirely.
    pub line_end: String,
    pub spaces_after_colon: usize,
    pub spaces_after_comma: usize,
    /// Longest rendered length still eligible for inlining; 0 means no limit.
    pub max_inline_length: usize,
    pub number_format: NumberFormat,
    /// Fractional/mantissa digits for the fixed and scientific styles.
    pub precision: usize,
    /// Render arrays without container elements on a single line.
    pub inline_simple_arrays: bool,
    /// Sort object keys byte-wise instead of keeping insertion order.
    pub sort_keys: bool,
    pub non_finite: NonFinitePolicy,
}

/// Largest accepted `precision`; an f64 never carries more significant
/// decimal digits.
pub const MAX_PRECISION: usize = 17;

impl FormatConfig {
    /// Minimal whitespace, canonical numbers, no trailing newline.
    pub fn compact() -> Self {
        Self {
            indent: String::new(),
            line_end: String::new(),
            spaces_after_colon: 0,
            spaces_after_comma: 0,
            max_inline_length: 0,
            number_format: NumberFormat::Canonical,
            precision: 6,
            inline_simple_arrays: true,
            sort_keys: false,
            non_finite: NonFinitePolicy::Error,
        }
    }

    /// Four-space indent, sorted keys, shorter inline threshold.
    pub fn pretty() -> Self {
        Self {
            indent: String::from("    "),
            line_end: String::from("\n"),
            spaces_after_colon: 1,
            spaces_after_comma: 1,
            max_inline_length: 60,
            number_format: NumberFormat::Auto,
            precision: 6,
            inline_simple_arrays: true,
            sort_keys: true,
            non_finite: NonFinitePolicy::Error,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(Error::Format(Diagnostic::format_error(
                ErrorCode::InvalidConfig,
                format!(
                    "precision {} exceeds the maximum of {}",
                    self.precision, MAX_PRECISION
                ),
            )));
        }
        Ok(())
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent: String::from("  "),
            line_end: String::from("\n"),
            spaces_after_colon: 1,
            spaces_after_comma: 1,
            max_inline_length: 80,
            number_format: NumberFormat::Auto,
            precision: 6,
            inline_simple_arrays: true,
            sort_keys: false,
            non_finite: NonFinitePolicy::Error,
        }
    }
}

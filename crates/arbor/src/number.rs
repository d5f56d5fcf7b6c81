//! Textual renderings of `f64` used by the formatter.
//!
//! All functions here require a finite input; the encoder enforces the
//! non-finite policy before dispatching.

/// Fixed-point with `precision` fractional digits (`30` -> `30.000000`).
pub(crate) fn decimal(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Scientific notation with `precision` mantissa digits and a signed,
/// zero-padded two-digit exponent (`30` -> `3.000000e+01`).
pub(crate) fn scientific(value: f64, precision: usize) -> String {
    let rendered = format!("{value:.precision$e}");
    match rendered.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.abs())
        }
        None => rendered,
    }
}

/// Magnitude-based choice: scientific outside `[1e-4, 1e5]`, fixed-point
/// inside. Zero counts as small and takes the scientific branch.
pub(crate) fn auto(value: f64, precision: usize) -> String {
    if value.abs() < 1e-4 || value.abs() > 1e5 {
        scientific(value, precision)
    } else {
        decimal(value, precision)
    }
}

/// Shortest form that parses back to the identical bits:
/// - no exponent notation (exponents are expanded)
/// - no trailing fractional zeros, decimal point dropped when none remain
/// - `-0` normalized to `0`
pub(crate) fn canonical(value: f64) -> String {
    if value == 0.0 {
        return String::from("0");
    }

    let negative = value < 0.0;
    let magnitude = value.abs();

    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(magnitude);
    let body = match raw.find(['e', 'E']) {
        Some(exp_index) => {
            let exp: i32 = raw[exp_index + 1..].parse().unwrap_or(0);
            expand_exponent(&raw[..exp_index], exp)
        }
        None => String::from(raw),
    };
    let trimmed = trim_fraction(body);
    if negative && trimmed != "0" {
        format!("-{trimmed}")
    } else {
        trimmed
    }
}

/// Rewrites `mantissa * 10^exp` as plain positional digits.
fn expand_exponent(mantissa: &str, exp: i32) -> String {
    let mut digits: Vec<u8> = Vec::with_capacity(mantissa.len());
    let mut point = mantissa.len();
    for &b in mantissa.as_bytes() {
        if b == b'.' {
            point = digits.len();
        } else {
            digits.push(b);
        }
    }
    if point == mantissa.len() {
        point = digits.len();
    }

    let target = point as i32 + exp;
    let mut out = String::with_capacity(digits.len() + exp.unsigned_abs() as usize + 2);
    if target <= 0 {
        out.push_str("0.");
        for _ in 0..(-target) {
            out.push('0');
        }
        for &d in &digits {
            out.push(d as char);
        }
    } else if (target as usize) >= digits.len() {
        for &d in &digits {
            out.push(d as char);
        }
        for _ in digits.len()..target as usize {
            out.push('0');
        }
    } else {
        for (idx, &d) in digits.iter().enumerate() {
            if idx == target as usize {
                out.push('.');
            }
            out.push(d as char);
        }
    }
    out
}

/// Strips trailing fractional zeros, and the point itself when bare.
fn trim_fraction(mut s: String) -> String {
    if let Some(dot) = s.find('.') {
        let mut end = s.len();
        while end > dot + 1 && s.as_bytes()[end - 1] == b'0' {
            end -= 1;
        }
        if s.as_bytes()[end - 1] == b'.' {
            end -= 1;
        }
        s.truncate(end);
    }
    s
}

//! Per-element numeric formatting rules shared by every printer.

use crate::value::{Element, ElementKind, ScalarEncoding};

/// Renders one element according to its declared kind.
pub fn format_element(kind: &ElementKind, element: Element) -> String {
    match kind {
        ElementKind::Float32 => format_float32(element.as_f64()),
        ElementKind::Unsigned => format_unsigned(element.as_u64()),
        ElementKind::Signed => format_signed(element.as_i64()),
        // no dedicated rule exists for other kinds; default conversion
        ElementKind::Other(opaque) => match opaque.encoding {
            ScalarEncoding::Floating => element.as_f64().to_string(),
            ScalarEncoding::Unsigned => element.as_u64().to_string(),
            ScalarEncoding::Signed => element.as_i64().to_string(),
        },
    }
}

/// Fixed-point with three decimals for zero and magnitudes in [0.001, 1000),
/// scientific with three mantissa digits everywhere else.
pub fn format_float32(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || (0.001..1000.0).contains(&magnitude) {
        format!("{value:.3}")
    } else {
        format_scientific(value, 3)
    }
}

/// Plain decimal below 1000, scientific with six mantissa digits from there.
pub fn format_unsigned(value: u64) -> String {
    if value < 1000 {
        value.to_string()
    } else {
        format_scientific(value as f64, 6)
    }
}

/// Plain decimal for magnitudes below 1000, scientific with six mantissa
/// digits otherwise. The sign survives both paths.
pub fn format_signed(value: i64) -> String {
    if value.unsigned_abs() < 1000 {
        value.to_string()
    } else {
        format_scientific(value as f64, 6)
    }
}

/// Scientific notation in the `5.000e-04` convention: a fixed number of
/// mantissa digits, an explicit exponent sign, and at least two exponent
/// digits.
pub fn format_scientific(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return format!("{value:.precision$}e+00");
    }
    let mut exponent = value.abs().log10().floor() as i32;
    let mut mantissa = value / 10f64.powi(exponent);
    // rounding at the requested precision can push |mantissa| up to 10.0
    let scale = 10f64.powi(precision as i32);
    if (mantissa.abs() * scale).round() >= 10.0 * scale {
        mantissa /= 10.0;
        exponent += 1;
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    let magnitude = exponent.unsigned_abs();
    format!("{mantissa:.precision$}e{sign}{magnitude:02}")
}

/// Magnitude under which a value is rendered as `"0"`.
pub const ZERO_LABEL_EPSILON: f64 = 1e-10;
/// Magnitudes at or above this use scientific notation.
pub const SCIENTIFIC_UPPER: f64 = 1e6;
/// Magnitudes below this use scientific notation.
pub const SCIENTIFIC_LOWER: f64 = 1e-2;

/// Formats an axis tick value.
///
/// Near-zero values render as `"0"`, very large or very small magnitudes in
/// scientific notation, everything else fixed-point with at most two
/// decimals (fewer for larger magnitudes) and trailing zeros removed.
#[must_use]
pub fn format_tick_label(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    if magnitude < ZERO_LABEL_EPSILON {
        return "0".to_owned();
    }
    if !(SCIENTIFIC_LOWER..SCIENTIFIC_UPPER).contains(&magnitude) {
        return format_scientific(value, 2);
    }

    let precision = if magnitude >= 1_000.0 {
        0
    } else if magnitude >= 10.0 {
        1
    } else {
        2
    };
    trim_fraction(format!("{value:.precision$}"))
}

/// Formats a coordinate for point descriptions (up to three decimals).
#[must_use]
pub fn format_coordinate(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.abs() < 5e-4 {
        return "0".to_owned();
    }
    if value.abs() >= SCIENTIFIC_UPPER {
        return format_scientific(value, 3);
    }
    trim_fraction(format!("{value:.3}"))
}

fn format_scientific(value: f64, precision: usize) -> String {
    let text = format!("{value:.precision$e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            format!("{}e{exponent}", trim_fraction(mantissa.to_owned()))
        }
        None => text,
    }
}

fn trim_fraction(mut text: String) -> String {
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    if text == "-0" {
        return "0".to_owned();
    }
    text
}

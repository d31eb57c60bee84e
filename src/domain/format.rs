//! Decimal text rendering of doubles.
//!
//! Rendering starts from the shortest text that round-trips the double, so
//! `0.1` is rendered as `0.1` and never as `0.1000000000000000055511151231257827`.
//! Percentages move the decimal point in that text, never multiply the double.
//! Text is normalised through [`Decimal`] only when it converts without losing
//! a digit; anything wider keeps its digits as plain text.

use rust_decimal::Decimal;

/// `value` multiplied by 100, e.g. `0.015` renders as `1.5`.
pub fn formatted_percentage(value: f64) -> String {
    if !value.is_finite() {
        return (value * 100.0).to_string();
    }
    render(&shift_two_places(&value.to_string()))
}

/// `value` as plain decimal text, e.g. `2.0` renders as `2`.
pub fn formatted_double(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // f64 Display never uses exponent notation.
    render(&value.to_string())
}

fn render(text: &str) -> String {
    match Decimal::from_str_exact(text) {
        Ok(decimal) => decimal.normalize().to_string(),
        Err(_) => trim_fraction(text),
    }
}

/// Moves the decimal point of plain signed decimal text two places right.
fn shift_two_places(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let mut digits = format!("{int_part}{frac_part}");
    while digits.len() < int_part.len() + 2 {
        digits.push('0');
    }
    let (int_digits, frac_digits) = digits.split_at(int_part.len() + 2);
    let int_digits = match int_digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    if frac_digits.is_empty() {
        format!("{sign}{int_digits}")
    } else {
        format!("{sign}{int_digits}.{frac_digits}")
    }
}

/// Drops trailing fraction zeros and a dangling point; `-0` becomes `0`.
fn trim_fraction(text: &str) -> String {
    let trimmed = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    };
    if trimmed.trim_start_matches('-').chars().all(|c| c == '0') {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

//! Monetary value rescaling.

use rate_model::{NumericOutcome, TransformConfig};

/// Digits after the decimal point in rescaled values.
pub const DECIMAL_PLACES: usize = 6;

/// Parses a decimal number, accepting `,` as the decimal separator and `_`
/// between digits.
///
/// Every comma becomes a dot, so thousands separators are not supported:
/// `1,234.5` does not parse.
pub fn parse_decimal(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    strip_digit_separators(&trimmed.replace(',', "."))?
        .parse()
        .ok()
}

/// Removes underscores that sit between two ASCII digits. Any other
/// underscore makes the value unparseable.
fn strip_digit_separators(value: &str) -> Option<String> {
    if !value.contains('_') {
        return Some(value.to_string());
    }
    let bytes = value.as_bytes();
    let mut out = String::with_capacity(value.len());
    for (idx, ch) in value.char_indices() {
        if ch != '_' {
            out.push(ch);
            continue;
        }
        let before = idx.checked_sub(1).and_then(|i| bytes.get(i));
        let after = bytes.get(idx + 1);
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(out)
}

/// Formats a value as fixed-point with six decimals. Not-a-number is written
/// as `nan` regardless of sign; infinities as `inf` and `-inf`.
pub fn format_fixed(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    format!("{value:.prec$}", prec = DECIMAL_PLACES)
}

/// Rescales a raw monetary value by the configured percentages.
///
/// Blank input stays blank. Text that does not parse as a number is passed
/// through untouched, surrounding whitespace included.
pub fn transform_numeric(raw: &str, config: &TransformConfig) -> NumericOutcome {
    if raw.trim().is_empty() {
        return NumericOutcome::Blank;
    }
    match parse_decimal(raw) {
        Some(value) => NumericOutcome::Transformed(format_fixed(config.apply(value))),
        None => NumericOutcome::PassThrough(raw.to_string()),
    }
}

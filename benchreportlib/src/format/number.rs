//! `number` formatter: fixed decimals and digit grouping.

use super::{parse_number, FormatOptions, Formatter};
use crate::Result;

/// Formats a numeric value with a fixed number of decimal places and a
/// thousands separator.
///
/// Options:
/// - `decimal_places` (default `0`)
/// - `decimal_point` (default `"."`)
/// - `thousands_separator` (default `","`)
///
/// Rounding is half away from zero: `2.5` with no decimals becomes `3`.
/// `decimal_places` is capped at [`MAX_DECIMALS`](super::MAX_DECIMALS).
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberFormatter;

impl Formatter for NumberFormatter {
    fn format(&self, value: &str, options: &FormatOptions) -> Result<String> {
        let number = parse_number(options.formatter(), value)?;
        let decimals = options.decimals_or("decimal_places", 0)?;
        let point = options.str_or("decimal_point", ".")?;
        let separator = options.str_or("thousands_separator", ",")?;

        Ok(format_number(number, decimals, &point, &separator))
    }
}

/// Format `number` the way `number_format`-style helpers do.
///
/// `decimals` must already be bounded by the caller.
pub(crate) fn format_number(number: f64, decimals: usize, point: &str, separator: &str) -> String {
    let magnitude = round_half_away(number.abs(), decimals);
    let fixed = format!("{:.*}", decimals, magnitude);

    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::new();
    if number < 0.0 && magnitude != 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, separator));
    if let Some(frac) = frac_part {
        out.push_str(point);
        out.push_str(frac);
    }
    out
}

/// Round a non-negative `value` to `decimals` places, ties away from zero.
///
/// The scaled value is trimmed to 15 significant digits first, so decimal
/// ties such as `1.005` that land just below `.5` in binary still round up.
/// Values too large to scale are returned unchanged.
fn round_half_away(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }

    let scaled = if scaled < 1e15 {
        format!("{:.14e}", scaled).parse::<f64>().unwrap_or(scaled)
    } else {
        scaled
    };

    let rounded = scaled.round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn run(value: &str, opts: Value) -> Result<String> {
        let Value::Object(map) = opts else {
            panic!("expected object");
        };
        NumberFormatter.format(value, &FormatOptions::new("number", map))
    }

    #[test]
    fn test_number_defaults() {
        assert_eq!(run("1234567", json!({})).unwrap(), "1,234,567");
        assert_eq!(run("999", json!({})).unwrap(), "999");
        assert_eq!(run("1000", json!({})).unwrap(), "1,000");
    }

    #[test]
    fn test_number_decimal_places() {
        assert_eq!(
            run("1234567", json!({"decimal_places": "2"})).unwrap(),
            "1,234,567.00"
        );
        assert_eq!(run("1.23456", json!({"decimal_places": 3})).unwrap(), "1.235");
    }

    #[test]
    fn test_number_rounds_half_away_from_zero() {
        assert_eq!(run("2.5", json!({})).unwrap(), "3");
        assert_eq!(run("-2.5", json!({})).unwrap(), "-3");
    }

    #[test]
    fn test_number_negative_and_negative_zero() {
        assert_eq!(run("-1234.5", json!({"decimal_places": 1})).unwrap(), "-1,234.5");
        assert_eq!(run("-0.001", json!({"decimal_places": 2})).unwrap(), "0.00");
    }

    #[test]
    fn test_number_custom_separators() {
        let out = run(
            "1234567.891",
            json!({"decimal_places": 2, "decimal_point": ",", "thousands_separator": "."}),
        )
        .unwrap();
        assert_eq!(out, "1.234.567,89");

        let none = run("1234567", json!({"thousands_separator": ""})).unwrap();
        assert_eq!(none, "1234567");
    }

    #[test]
    fn test_number_rejects_non_numeric() {
        assert!(run("fast", json!({})).is_err());
    }

    #[test]
    fn test_number_rejects_bad_option() {
        assert!(run("1", json!({"decimal_places": "two"})).is_err());
    }

    #[test]
    fn test_number_rejects_oversized_decimal_places() {
        for places in ["21", "400", "70000"] {
            assert!(matches!(
                run("1", json!({"decimal_places": places})),
                Err(crate::BenchReportError::InvalidFormatterOption { .. })
            ));
        }
        assert_eq!(
            run("1", json!({"decimal_places": 20})).unwrap(),
            "1.00000000000000000000"
        );
    }

    #[test]
    fn test_number_huge_values_stay_finite() {
        let out = run("1e300", json!({"decimal_places": 10})).unwrap();
        assert!(out.starts_with("1,000,000"));
        assert!(out.ends_with(".0000000000"));
        assert!(!out.contains("inf"));
        assert!(!out.contains("NaN"));
    }

    #[test]
    fn test_number_decimal_ties_round_up() {
        assert_eq!(run("1.005", json!({"decimal_places": 2})).unwrap(), "1.01");
        assert_eq!(run("0.285", json!({"decimal_places": 2})).unwrap(), "0.29");
        assert_eq!(run("-1.005", json!({"decimal_places": 2})).unwrap(), "-1.01");
    }

    #[test]
    fn test_number_large_integers_keep_digits() {
        assert_eq!(
            run("123456789012345678", json!({})).unwrap(),
            "123,456,789,012,345,680"
        );
    }
}

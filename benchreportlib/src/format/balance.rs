//! `balance` formatter: mark positive numbers with an explicit `+`.

use super::{FormatOptions, Formatter};
use crate::Result;

/// Prefixes `+` to positive numbers.
///
/// Works on already-formatted values such as `1,234.50`: any value that
/// carries no sign and contains a non-zero digit counts as positive. Zero,
/// negative, already signed and non-numeric values pass through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceFormatter;

impl Formatter for BalanceFormatter {
    fn format(&self, value: &str, _options: &FormatOptions) -> Result<String> {
        let trimmed = value.trim_start();
        let signed = trimmed.starts_with('-') || trimmed.starts_with('+');
        let positive = trimmed.chars().any(|c| matches!(c, '1'..='9'));

        if !signed && positive && starts_numeric(trimmed) {
            Ok(format!("+{}", value))
        } else {
            Ok(value.to_string())
        }
    }
}

fn starts_numeric(value: &str) -> bool {
    value
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(value: &str) -> String {
        BalanceFormatter
            .format(value, &FormatOptions::default())
            .unwrap()
    }

    #[test]
    fn test_balance_positive() {
        assert_eq!(run("4.50"), "+4.50");
        assert_eq!(run("1,234"), "+1,234");
        assert_eq!(run(".5"), "+.5");
    }

    #[test]
    fn test_balance_passthrough() {
        assert_eq!(run("-4.50"), "-4.50");
        assert_eq!(run("+4.50"), "+4.50");
        assert_eq!(run("0.00"), "0.00");
        assert_eq!(run("n/a"), "n/a");
        assert_eq!(run("x1"), "x1");
    }
}

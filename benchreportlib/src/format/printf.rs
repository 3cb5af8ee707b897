//! `printf` formatter: wrap a value in a format string.

use super::{FormatOptions, Formatter};
use crate::error::BenchReportError;
use crate::Result;

/// Substitutes the value into the `format` option.
///
/// Supported directives are `%s` (the value) and `%%` (a literal percent
/// sign). Anything else after a `%` is an invalid option.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintfFormatter;

impl Formatter for PrintfFormatter {
    fn format(&self, value: &str, options: &FormatOptions) -> Result<String> {
        let format = options.str_or("format", "%s")?;
        let mut out = String::with_capacity(format.len() + value.len());
        let mut chars = format.chars();

        while let Some(ch) = chars.next() {
            if ch != '%' {
                out.push(ch);
                continue;
            }
            match chars.next() {
                Some('s') => out.push_str(value),
                Some('%') => out.push('%'),
                Some(other) => {
                    return Err(BenchReportError::option(
                        options.formatter(),
                        "format",
                        format!("unsupported directive '%{}' in '{}'", other, format),
                    ))
                }
                None => {
                    return Err(BenchReportError::option(
                        options.formatter(),
                        "format",
                        format!("dangling '%' in '{}'", format),
                    ))
                }
            }
        }

        Ok(out)
    }
}

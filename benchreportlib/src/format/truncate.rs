//! `truncate` formatter: cap the length of long values.

use super::{FormatOptions, Formatter};
use crate::error::BenchReportError;
use crate::Result;

/// Shortens values longer than `length` characters.
///
/// Options:
/// - `length`: maximum output length in characters, pad included
///   (default `0`, meaning unlimited)
/// - `pad`: marker for the removed part (default `"..."`)
/// - `position`: `"right"` keeps the start, `"left"` keeps the end
///   (default `"right"`)
#[derive(Debug, Clone, Copy, Default)]
pub struct TruncateFormatter;

impl Formatter for TruncateFormatter {
    fn format(&self, value: &str, options: &FormatOptions) -> Result<String> {
        let length = options.usize_or("length", 0)?;
        let pad = options.str_or("pad", "...")?;
        let position = options.str_or("position", "right")?;

        let count = value.chars().count();
        if length == 0 || count <= length {
            return Ok(value.to_string());
        }

        let keep = length.saturating_sub(pad.chars().count());
        match position.as_ref() {
            "right" => {
                let head: String = value.chars().take(keep).collect();
                Ok(format!("{}{}", head, pad))
            }
            "left" => {
                let tail: String = value.chars().skip(count - keep).collect();
                Ok(format!("{}{}", pad, tail))
            }
            other => Err(BenchReportError::option(
                options.formatter(),
                "position",
                format!("expected 'left' or 'right', found '{}'", other),
            )),
        }
    }
}

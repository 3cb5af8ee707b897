//! `time` formatter: convert microsecond timings into a display unit.

use std::str::FromStr;

use super::number::format_number;
use super::{parse_number, FormatOptions, Formatter};
use crate::error::BenchReportError;
use crate::Result;

/// Time unit a microsecond value can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    #[default]
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnit {
    /// Number of microseconds in one of this unit.
    pub fn microseconds(&self) -> f64 {
        match self {
            TimeUnit::Microseconds => 1.0,
            TimeUnit::Milliseconds => 1_000.0,
            TimeUnit::Seconds => 1_000_000.0,
            TimeUnit::Minutes => 60_000_000.0,
            TimeUnit::Hours => 3_600_000_000.0,
        }
    }

    /// Short display suffix.
    pub fn suffix(&self) -> &'static str {
        match self {
            TimeUnit::Microseconds => "μs",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "m",
            TimeUnit::Hours => "h",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "microseconds" | "us" | "μs" => Ok(TimeUnit::Microseconds),
            "milliseconds" | "ms" => Ok(TimeUnit::Milliseconds),
            "seconds" | "s" => Ok(TimeUnit::Seconds),
            "minutes" | "m" => Ok(TimeUnit::Minutes),
            "hours" | "h" => Ok(TimeUnit::Hours),
            _ => Err(format!("unknown time unit '{}'", s)),
        }
    }
}

/// Converts a value in microseconds to `unit` and appends the unit suffix.
///
/// Options:
/// - `unit`: target unit (default `microseconds`)
/// - `precision`: decimal places (default `3`)
/// - `mode`: `"time"` prints the duration, `"throughput"` prints how many
///   operations fit in one unit as `N ops/<suffix>` (default `"time"`)
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeFormatter;

impl Formatter for TimeFormatter {
    fn format(&self, value: &str, options: &FormatOptions) -> Result<String> {
        let micros = parse_number(options.formatter(), value)?;
        let unit: TimeUnit = options
            .str_or("unit", "microseconds")?
            .parse()
            .map_err(|e: String| BenchReportError::option(options.formatter(), "unit", e))?;
        let precision = options.decimals_or("precision", 3)?;
        let mode = options.str_or("mode", "time")?;

        match mode.as_ref() {
            "time" => {
                let converted = micros / unit.microseconds();
                Ok(format!(
                    "{}{}",
                    format_number(converted, precision, ".", ","),
                    unit.suffix()
                ))
            }
            "throughput" => {
                if micros == 0.0 {
                    return Err(BenchReportError::value(options.formatter(), value));
                }
                let ops = unit.microseconds() / micros;
                if !ops.is_finite() {
                    return Err(BenchReportError::value(options.formatter(), value));
                }
                Ok(format!(
                    "{} ops/{}",
                    format_number(ops, precision, ".", ","),
                    unit.suffix()
                ))
            }
            other => Err(BenchReportError::option(
                options.formatter(),
                "mode",
                format!("expected 'time' or 'throughput', found '{}'", other),
            )),
        }
    }
}

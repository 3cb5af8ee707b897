//! Cell value formatting.
//!
//! Formatting has three layers:
//!
//! - **Formatter**: a named transform such as `number` or `printf`, taking a
//!   value and an options object
//! - **Class**: a named, ordered list of formatter steps, declared in JSON
//!   (see [`ClassDefinitions`])
//! - **Resolver**: applies a cell's classes to its value, substituting the
//!   row's formatter params into step options (see [`FormatterResolver`])
//!
//! ## Example
//!
//! ```rust
//! use benchreportlib::{FormatterParams, FormatterResolver};
//!
//! let resolver = FormatterResolver::with_defaults().unwrap();
//! let mut params = FormatterParams::new();
//! params.insert("precision".to_string(), "2".to_string());
//!
//! let value = resolver.apply_classes(&["number"], "1234567", &params).unwrap();
//! assert_eq!(value, "1,234,567.00");
//! ```

mod balance;
mod class;
mod number;
mod printf;
mod registry;
mod resolver;
mod time;
mod truncate;

use serde_json::{Map, Value};

use crate::error::BenchReportError;
use crate::Result;

pub use balance::BalanceFormatter;
pub use class::{ClassDefinitions, FormatStep};
pub use number::NumberFormatter;
pub use printf::PrintfFormatter;
pub use registry::FormatterRegistry;
pub use resolver::{FormatterParams, FormatterResolver};
pub use time::{TimeFormatter, TimeUnit};
pub use truncate::TruncateFormatter;

/// A named value transform.
///
/// Formatters must be pure: the same value and options always produce the
/// same output.
pub trait Formatter: Send + Sync {
    /// Transform `value` according to `options`.
    fn format(&self, value: &str, options: &FormatOptions) -> Result<String>;
}

impl<F> Formatter for F
where
    F: Fn(&str, &FormatOptions) -> Result<String> + Send + Sync,
{
    fn format(&self, value: &str, options: &FormatOptions) -> Result<String> {
        self(value, options)
    }
}

/// Options passed to a single formatter invocation.
///
/// Values come from class definitions after `{{ param }}` substitution, so
/// numeric options may arrive either as JSON numbers or as numeric strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatOptions {
    formatter: String,
    values: Map<String, Value>,
}

impl FormatOptions {
    /// Create options for the named formatter.
    pub fn new(formatter: impl Into<String>, values: Map<String, Value>) -> Self {
        Self {
            formatter: formatter.into(),
            values,
        }
    }

    /// Name of the formatter these options belong to.
    pub fn formatter(&self) -> &str {
        &self.formatter
    }

    /// Raw option value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String option, falling back to `default` when absent.
    ///
    /// Numbers and booleans are accepted and rendered as text.
    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> Result<std::borrow::Cow<'a, str>> {
        match self.values.get(key) {
            None | Some(Value::Null) => Ok(std::borrow::Cow::Borrowed(default)),
            Some(Value::String(s)) => Ok(std::borrow::Cow::Borrowed(s.as_str())),
            Some(Value::Number(n)) => Ok(std::borrow::Cow::Owned(n.to_string())),
            Some(Value::Bool(b)) => Ok(std::borrow::Cow::Owned(b.to_string())),
            Some(other) => Err(BenchReportError::option(
                &self.formatter,
                key,
                format!("expected a string, found {}", other),
            )),
        }
    }

    /// Non-negative integer option, falling back to `default` when absent.
    pub fn usize_or(&self, key: &str, default: usize) -> Result<usize> {
        let invalid = |found: &dyn std::fmt::Display| {
            BenchReportError::option(
                &self.formatter,
                key,
                format!("expected a non-negative integer, found {}", found),
            )
        };

        match self.values.get(key) {
            None | Some(Value::Null) => Ok(default),
            Some(Value::Number(n)) => n
                .as_u64()
                .map(|n| n as usize)
                .ok_or_else(|| invalid(n)),
            Some(Value::String(s)) => s.trim().parse::<usize>().map_err(|_| invalid(s)),
            Some(other) => Err(invalid(other)),
        }
    }

    /// Decimal-places option, at most [`MAX_DECIMALS`].
    pub fn decimals_or(&self, key: &str, default: usize) -> Result<usize> {
        let decimals = self.usize_or(key, default)?;
        if decimals > MAX_DECIMALS {
            return Err(BenchReportError::option(
                &self.formatter,
                key,
                format!("at most {} decimal places are supported, found {}", MAX_DECIMALS, decimals),
            ));
        }
        Ok(decimals)
    }
}

/// Largest decimal-places value numeric formatters accept.
pub const MAX_DECIMALS: usize = 20;

/// Parse a cell value as a float, tolerating surrounding whitespace.
pub(crate) fn parse_number(formatter: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| BenchReportError::value(formatter, value))
}

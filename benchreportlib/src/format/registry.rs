//! Name → formatter lookup.

use std::collections::BTreeMap;
use std::fmt;

use super::{
    BalanceFormatter, Formatter, NumberFormatter, PrintfFormatter, TimeFormatter,
    TruncateFormatter,
};

/// Registry of formatters available to class steps.
#[derive(Default)]
pub struct FormatterRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in formatters: `number`, `printf`, `balance`,
    /// `truncate` and `time`.
    pub fn with_builtins() -> Self {
        Self::new()
            .register("number", NumberFormatter)
            .register("printf", PrintfFormatter)
            .register("balance", BalanceFormatter)
            .register("truncate", TruncateFormatter)
            .register("time", TimeFormatter)
    }

    /// Builder: register (or replace) a formatter under `name`
    pub fn register<F: Formatter + 'static>(mut self, name: impl Into<String>, formatter: F) -> Self {
        self.formatters.insert(name.into(), Box::new(formatter));
        self
    }

    /// Look up a formatter by name.
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.formatters.keys().map(String::as_str)
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("formatters", &self.formatters.keys().collect::<Vec<_>>())
            .finish()
    }
}

//! Error types for benchreportlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, formatting or rendering a report
#[derive(Error, Debug)]
pub enum BenchReportError {
    /// A cell referenced a class that was never registered
    #[error("unknown formatter class '{0}'")]
    UnknownFormatterClass(String),

    /// A class definition names a formatter that is not in the registry
    #[error("class '{class}' uses unknown formatter '{formatter}'")]
    UnknownFormatter { class: String, formatter: String },

    /// A `{{ token }}` inside an option referenced a row parameter that is not set
    #[error("formatter '{formatter}' references unknown parameter '{param}'")]
    UnknownFormatterParam { formatter: String, param: String },

    /// A formatter option has the wrong type or an unsupported value
    #[error("invalid option '{option}' for formatter '{formatter}': {message}")]
    InvalidFormatterOption {
        formatter: String,
        option: String,
        message: String,
    },

    /// A formatter was handed a value it cannot transform
    #[error("formatter '{formatter}' cannot format value '{value}'")]
    InvalidFormatterValue { formatter: String, value: String },

    /// Malformed class definition source
    #[error("invalid class definition: {0}")]
    InvalidClassDefinition(String),

    /// Renderer configuration failed validation
    #[error("invalid renderer config: {0}")]
    InvalidConfig(String),

    /// Report document could not be parsed
    #[error("invalid report document: {0}")]
    InvalidReport(String),

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BenchReportError {
    pub(crate) fn option(formatter: &str, option: &str, message: impl Into<String>) -> Self {
        BenchReportError::InvalidFormatterOption {
            formatter: formatter.to_string(),
            option: option.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn value(formatter: &str, value: &str) -> Self {
        BenchReportError::InvalidFormatterValue {
            formatter: formatter.to_string(),
            value: value.to_string(),
        }
    }
}

//! Renderer configuration.
//!
//! The renderer accepts exactly one option, `table_style`. Configuration is
//! validated when it is built, before anything is rendered: an unknown style
//! or any extra key is an [`BenchReportError::InvalidConfig`].

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BenchReportError;
use crate::Result;

/// Visual layout preset for table borders and spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableStyle {
    /// Full borders with a header separator
    #[default]
    Default,
    /// No outer or inner borders
    Borderless,
    /// Columns separated by whitespace only
    Compact,
    /// Horizontal rules around the header and at the bottom
    SymfonyStyleGuide,
}

impl TableStyle {
    /// All accepted styles, in documentation order.
    pub const ALL: [TableStyle; 4] = [
        TableStyle::Default,
        TableStyle::Borderless,
        TableStyle::Compact,
        TableStyle::SymfonyStyleGuide,
    ];

    /// The configuration name of this style.
    pub fn as_str(&self) -> &'static str {
        match self {
            TableStyle::Default => "default",
            TableStyle::Borderless => "borderless",
            TableStyle::Compact => "compact",
            TableStyle::SymfonyStyleGuide => "symfony-style-guide",
        }
    }
}

impl fmt::Display for TableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableStyle {
    type Err = BenchReportError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TableStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| {
                BenchReportError::InvalidConfig(format!(
                    "unknown table_style '{}', expected one of: {}",
                    s,
                    TableStyle::ALL.map(|style| style.as_str()).join(", ")
                ))
            })
    }
}

/// Options for one render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Table style preset
    pub table_style: TableStyle,
}

impl RenderConfig {
    /// Create the default config (`table_style = "default"`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the table style
    pub fn table_style(mut self, style: TableStyle) -> Self {
        self.table_style = style;
        self
    }

    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BenchReportError::InvalidConfig(e.to_string()))
    }

    /// Validate a config from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| BenchReportError::InvalidConfig(e.to_string()))
    }

    /// Load and validate a config file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| BenchReportError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}

/// When to emit terminal styling escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Style only when the terminal supports it
    #[default]
    Auto,
    /// Always style
    Always,
    /// Never style
    Never,
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!("Unknown color choice: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_default() {
        let config = RenderConfig::default();
        assert_eq!(config.table_style, TableStyle::Default);
    }

    #[test]
    fn test_config_from_json() {
        let config = RenderConfig::from_json(r#"{"table_style": "symfony-style-guide"}"#).unwrap();
        assert_eq!(config.table_style, TableStyle::SymfonyStyleGuide);

        let empty = RenderConfig::from_json("{}").unwrap();
        assert_eq!(empty.table_style, TableStyle::Default);
    }

    #[test]
    fn test_config_rejects_unknown_style() {
        let err = RenderConfig::from_json(r#"{"table_style": "fancy"}"#).unwrap_err();
        assert!(matches!(err, BenchReportError::InvalidConfig(_)));
    }

    #[test]
    fn test_config_rejects_unknown_key() {
        let err = RenderConfig::from_value(json!({"table_style": "compact", "width": 80}))
            .unwrap_err();
        match err {
            BenchReportError::InvalidConfig(msg) => assert!(msg.contains("width")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_config_builder() {
        let config = RenderConfig::new().table_style(TableStyle::Compact);
        assert_eq!(config.table_style, TableStyle::Compact);
    }

    #[test]
    fn test_table_style_from_str() {
        for style in TableStyle::ALL {
            assert_eq!(TableStyle::from_str(style.as_str()).unwrap(), style);
        }
        assert!(TableStyle::from_str("Default").is_err());
        assert!(TableStyle::from_str("").is_err());
    }

    #[test]
    fn test_table_style_serializes_kebab_case() {
        let value = serde_json::to_value(TableStyle::SymfonyStyleGuide).unwrap();
        assert_eq!(value, json!("symfony-style-guide"));
    }

    #[test]
    fn test_color_choice_from_str() {
        assert_eq!(ColorChoice::from_str("auto").unwrap(), ColorChoice::Auto);
        assert_eq!(ColorChoice::from_str("ALWAYS").unwrap(), ColorChoice::Always);
        assert_eq!(ColorChoice::from_str("never").unwrap(), ColorChoice::Never);
        assert!(ColorChoice::from_str("sometimes").is_err());
    }
}

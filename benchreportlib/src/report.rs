//! Report document model.
//!
//! A typed tree replacing free-form path queries: each element kind has its
//! own struct and children are reached through plain fields.
//!
//! ```text
//! Document
//! └── Report (title, description)
//!     └── Table (title)
//!         └── Row
//!             ├── FormatterParam (name, value)
//!             └── Cell (name, value, classes)
//! ```
//!
//! Documents are usually loaded from JSON, see [`Document::from_json`].

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::BenchReportError;
use crate::Result;

/// A parsed report document: one or more report sections, rendered in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub reports: Vec<Report>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append a report section
    pub fn report(mut self, report: Report) -> Self {
        self.reports.push(report);
        self
    }

    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BenchReportError::InvalidReport(e.to_string()))
    }

    /// Parse a document from any reader (e.g. stdin).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| BenchReportError::InvalidReport(e.to_string()))
    }

    /// Load a document from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| BenchReportError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}

/// One report section: optional title and description, then its tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the report title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder: set the report description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: append a table
    pub fn table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }
}

/// A titled grid of rows. The header is derived from the rows, never declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    /// Builder: append a row
    pub fn row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }
}

/// A row of cells plus the formatter params visible to those cells only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<FormatterParam>,
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append a cell
    pub fn cell(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }

    /// Builder: attach a formatter param
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(FormatterParam {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

/// A named value scoped to one row, substituted into class options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterParam {
    pub name: String,
    #[serde(default, deserialize_with = "text_value")]
    pub value: String,
}

/// A single table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Column name
    pub name: String,
    /// Raw text value
    #[serde(default, deserialize_with = "text_value")]
    pub value: String,
    /// Formatter classes, applied left to right
    #[serde(
        rename = "class",
        default,
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "join_classes",
        deserialize_with = "split_classes"
    )]
    pub classes: Vec<String>,
}

impl Cell {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            classes: Vec::new(),
        }
    }

    /// Builder: add one or more whitespace-separated classes
    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    /// Whether this cell should go through the formatter resolver.
    pub fn is_formatted(&self) -> bool {
        !self.value.is_empty() && !self.classes.is_empty()
    }
}

/// Accept strings, numbers, booleans and null as cell text.
fn text_value<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected a scalar value, found {}",
            other
        ))),
    }
}

fn split_classes<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<String>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(raw.split_whitespace().map(str::to_string).collect())
}

fn join_classes<S: Serializer>(classes: &[String], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&classes.join(" "))
}

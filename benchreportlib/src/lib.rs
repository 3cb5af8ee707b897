//! # benchreportlib
//!
//! Renders benchmark report documents as human-readable terminal output.
//!
//! ## Overview
//!
//! A report document is a tree of reports, tables, rows and cells. Cells may
//! carry *classes*: named chains of formatters (`number`, `printf`, `time`,
//! ...) that turn a raw value such as `1234567` into `1,234,567.00`. Rows may
//! carry *formatter params* that feed those chains, scoped to the row.
//!
//! The data flow is:
//! 1. Document (parsed from JSON, or built in code)
//! 2. Per-cell formatting through the [`FormatterResolver`]
//! 3. Table drawing and styled output through the [`ConsoleRenderer`]
//!
//! ## Features
//!
//! - **Composable formatters**: classes apply their steps left to right
//! - **Row-scoped params**: `{{ name }}` tokens in class options resolve per row
//! - **Table styles**: `default`, `borderless`, `compact`, `symfony-style-guide`
//! - **No ambient state**: sink, theme and table drawer are injected
//!
//! ## Example
//!
//! ```rust
//! use benchreportlib::{
//!     Cell, ConsoleRenderer, Document, FormatterResolver, RenderConfig, Report, Row, Table, Theme,
//! };
//!
//! let document = Document::new().report(
//!     Report::new().title("Suite A").table(
//!         Table::new("Time").row(
//!             Row::new()
//!                 .param("precision", "2")
//!                 .cell(Cell::new("iterations", "10"))
//!                 .cell(Cell::new("mean", "1234567").class("number")),
//!         ),
//!     ),
//! );
//!
//! let resolver = FormatterResolver::with_defaults().unwrap();
//! let mut renderer = ConsoleRenderer::new(Vec::new(), resolver).theme(Theme::plain());
//! renderer.render(&document, &RenderConfig::default()).unwrap();
//!
//! let output = String::from_utf8(renderer.into_output()).unwrap();
//! assert!(output.starts_with("Suite A\n=======\n\nTime\n"));
//! assert!(output.contains("1,234,567.00"));
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod render;
pub mod report;

pub use config::{ColorChoice, RenderConfig, TableStyle};
pub use error::BenchReportError;
pub use format::{
    ClassDefinitions, FormatOptions, FormatStep, Formatter, FormatterParams, FormatterRegistry,
    FormatterResolver,
};
pub use render::{
    ComfyTableDrawer, ConsoleRenderer, PlainTableDrawer, RenderedRow, StyleTag, TableDrawer, Theme,
};
pub use report::{Cell, Document, FormatterParam, Report, Row, Table};

/// Result type for benchreportlib operations
pub type Result<T> = std::result::Result<T, BenchReportError>;

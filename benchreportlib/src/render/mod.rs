//! Console rendering of report documents.
//!
//! This module is the final stage of the pipeline. For each report it writes
//! a title block, the description and every table, formatting cells through
//! the [`FormatterResolver`] on the way:
//!
//! ```text
//! Suite A
//! =======
//!
//! Time
//! +------------+-------+
//! | iterations | mean  |
//! +============+=======+
//! | 10         | 1.234 |
//! +------------+-------+
//!
//! ```
//!
//! Output streams straight to the sink. Each table is fully collected
//! (and every cell formatted) before any of it is drawn, so a formatting
//! error never leaves a half-drawn table behind.

mod table;
mod theme;

use std::io::Write;

use log::{debug, warn};
use unicode_width::UnicodeWidthStr;

use crate::config::{RenderConfig, TableStyle};
use crate::format::{FormatterParams, FormatterResolver};
use crate::report::{Document, Report, Row, Table};
use crate::Result;

pub use table::{ComfyTableDrawer, PlainTableDrawer, TableDrawer};
pub use theme::{StyleTag, Theme};

/// One table row after formatting: column name → display value, in
/// first-seen column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedRow {
    cells: Vec<(String, String)>,
}

impl RenderedRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column's value. An existing column keeps its position.
    pub fn insert(&mut self, column: &str, value: String) {
        match self.cells.iter_mut().find(|(name, _)| name == column) {
            Some((_, existing)) => *existing = value,
            None => self.cells.push((column.to_string(), value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    /// Display values in column order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Renders documents to a terminal-style text sink.
///
/// The sink, theme, table drawer and resolver are all fixed at construction
/// and reused for every [`render`](Self::render) call.
pub struct ConsoleRenderer<W: Write> {
    output: W,
    resolver: FormatterResolver,
    theme: Theme,
    drawer: Box<dyn TableDrawer>,
    styled_tables: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Create a renderer writing to `output`, with the default theme and
    /// `comfy-table` drawing.
    pub fn new(output: W, resolver: FormatterResolver) -> Self {
        Self {
            output,
            resolver,
            theme: Theme::new(),
            drawer: Box::new(ComfyTableDrawer),
            styled_tables: true,
        }
    }

    /// Builder: set the theme
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Builder: set the table drawer
    pub fn drawer<D: TableDrawer + 'static>(mut self, drawer: D) -> Self {
        self.styled_tables = drawer.supports_styles();
        self.drawer = Box::new(drawer);
        self
    }

    /// Consume the renderer, returning the sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Render every report section of `document`, in order.
    ///
    /// Stops at the first error; lines already written stay written.
    pub fn render(&mut self, document: &Document, config: &RenderConfig) -> Result<()> {
        for report in &document.reports {
            self.render_report(report, config)?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn render_report(&mut self, report: &Report, config: &RenderConfig) -> Result<()> {
        if let Some(title) = report.title.as_deref().filter(|t| !t.is_empty()) {
            let underline = "=".repeat(title.width());
            writeln!(self.output, "{}", self.theme.paint(StyleTag::Title, title))?;
            writeln!(self.output, "{}", self.theme.paint(StyleTag::Title, &underline))?;
            writeln!(self.output)?;
        }

        if let Some(description) = &report.description {
            writeln!(
                self.output,
                "{}",
                self.theme.paint(StyleTag::Description, description)
            )?;
            writeln!(self.output)?;
        }

        for table in &report.tables {
            writeln!(
                self.output,
                "{}",
                self.theme.paint(StyleTag::Subtitle, &table.title)
            )?;
            self.render_table_element(table, config)?;
        }

        Ok(())
    }

    fn render_table_element(&mut self, table: &Table, config: &RenderConfig) -> Result<()> {
        let rows = table
            .rows
            .iter()
            .map(|row| self.render_row(row))
            .collect::<Result<Vec<_>>>()?;

        // Header order comes from the last row.
        let headers: Vec<String> = rows
            .last()
            .map(|row| row.columns().map(str::to_string).collect())
            .unwrap_or_default();

        for (index, row) in rows.iter().enumerate() {
            if !row.columns().eq(headers.iter().map(String::as_str)) {
                warn!(
                    "table '{}': row {} has columns [{}], header is [{}]",
                    table.title,
                    index + 1,
                    row.columns().collect::<Vec<_>>().join(", "),
                    headers.join(", ")
                );
            }
        }

        let style = if self.styled_tables {
            Some(config.table_style)
        } else {
            if config.table_style != TableStyle::Default {
                warn!(
                    "table drawer does not support styles, ignoring table_style '{}'",
                    config.table_style
                );
            }
            None
        };

        debug!(
            "rendering table '{}' ({} columns, {} rows)",
            table.title,
            headers.len(),
            rows.len()
        );

        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.values().map(str::to_string).collect())
            .collect();
        self.drawer.draw(&mut self.output, &headers, &cells, style)?;
        writeln!(self.output)?;

        Ok(())
    }

    fn render_row(&self, row: &Row) -> Result<RenderedRow> {
        let params: FormatterParams = row
            .params
            .iter()
            .map(|p| (p.name.clone(), p.value.clone()))
            .collect();

        let mut rendered = RenderedRow::new();
        for cell in &row.cells {
            let value = if cell.is_formatted() {
                self.resolver
                    .apply_classes(&cell.classes, &cell.value, &params)?
            } else {
                cell.value.clone()
            };
            rendered.insert(&cell.name, value);
        }
        Ok(rendered)
    }
}

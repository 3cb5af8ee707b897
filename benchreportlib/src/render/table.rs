//! Table drawing.
//!
//! The renderer hands a header and rows to a [`TableDrawer`]. Drawers that
//! cannot apply named styles say so through [`TableDrawer::supports_styles`];
//! the renderer reads that flag once and stops passing styles.

use std::io::{self, Write};

use comfy_table::presets::{ASCII_FULL_CONDENSED, ASCII_HORIZONTAL_ONLY, ASCII_NO_BORDERS, NOTHING};
use comfy_table::Table;
use unicode_width::UnicodeWidthStr;

use crate::config::TableStyle;

/// Draws one table of already-formatted strings.
pub trait TableDrawer {
    /// Whether [`draw`](Self::draw) honors the `style` argument.
    fn supports_styles(&self) -> bool;

    /// Write the table to `out`. `style` is `None` for style-less drawers.
    ///
    /// A table with no header and no rows writes nothing.
    fn draw(
        &self,
        out: &mut dyn Write,
        headers: &[String],
        rows: &[Vec<String>],
        style: Option<TableStyle>,
    ) -> io::Result<()>;
}

/// Bordered tables through `comfy-table`, one preset per [`TableStyle`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ComfyTableDrawer;

impl ComfyTableDrawer {
    fn preset(style: TableStyle) -> &'static str {
        match style {
            TableStyle::Default => ASCII_FULL_CONDENSED,
            TableStyle::Borderless => ASCII_NO_BORDERS,
            TableStyle::Compact => NOTHING,
            TableStyle::SymfonyStyleGuide => ASCII_HORIZONTAL_ONLY,
        }
    }
}

impl TableDrawer for ComfyTableDrawer {
    fn supports_styles(&self) -> bool {
        true
    }

    fn draw(
        &self,
        out: &mut dyn Write,
        headers: &[String],
        rows: &[Vec<String>],
        style: Option<TableStyle>,
    ) -> io::Result<()> {
        if headers.is_empty() && rows.is_empty() {
            return Ok(());
        }

        let mut table = Table::new();
        table.load_preset(Self::preset(style.unwrap_or_default()));
        if !headers.is_empty() {
            table.set_header(headers);
        }
        for row in rows {
            table.add_row(row);
        }

        writeln!(out, "{}", table)
    }
}

/// Space-aligned columns with a dashed header rule. Ignores styles.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTableDrawer;

impl TableDrawer for PlainTableDrawer {
    fn supports_styles(&self) -> bool {
        false
    }

    fn draw(
        &self,
        out: &mut dyn Write,
        headers: &[String],
        rows: &[Vec<String>],
        _style: Option<TableStyle>,
    ) -> io::Result<()> {
        let columns = rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(headers.len()))
            .max()
            .unwrap_or(0);
        if columns == 0 {
            return Ok(());
        }

        let mut widths = vec![0; columns];
        for line in std::iter::once(headers).chain(rows.iter().map(Vec::as_slice)) {
            for (i, cell) in line.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }

        if !headers.is_empty() {
            write_line(out, headers, &widths)?;
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            write_line(out, &rule, &widths)?;
        }
        for row in rows {
            write_line(out, row, &widths)?;
        }
        Ok(())
    }
}

fn write_line(out: &mut dyn Write, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        line.push_str(&" ".repeat(widths[i].saturating_sub(cell.width())));
    }
    writeln!(out, "{}", line.trim_end())
}

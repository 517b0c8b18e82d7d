//! Markdown table writer
//!
//! Every cell is padded with trailing spaces to its column width, wrapped in
//! one space on each side and delimited by pipes. Widths count characters,
//! not bytes.

use std::io::{self, Write};

use crate::core::model::{ColumnWidths, Table};

/// Pad `cell` with trailing spaces up to `width` characters
pub fn pad_cell(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    let mut padded = String::with_capacity(cell.len() + width.saturating_sub(len));
    padded.push_str(cell);
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    padded
}

/// Render one pipe-delimited row, newline included
pub fn render_row(cells: &[&str], widths: &[usize]) -> String {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str("| ");
        line.push_str(&pad_cell(cell, (*width).max(1)));
        line.push(' ');
    }
    line.push_str("|\n");
    line
}

/// Render the dash separator row. Each cell has at least one dash.
pub fn render_separator(widths: &ColumnWidths) -> String {
    let mut line = String::new();
    for width in widths.as_array() {
        line.push_str("| ");
        line.push_str(&"-".repeat(width.max(1)));
        line.push(' ');
    }
    line.push_str("|\n");
    line
}

/// Markdown writer over any sink
pub struct MarkdownWriter<W: Write> {
    sink: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Write header, separator and all data rows
    pub fn write_table(&mut self, table: &Table) -> io::Result<()> {
        let widths = table.widths.as_array();
        let headers: Vec<&str> = table.headers.iter().map(String::as_str).collect();

        self.sink.write_all(render_row(&headers, &widths).as_bytes())?;
        self.sink
            .write_all(render_separator(&table.widths).as_bytes())?;

        for row in &table.rows {
            self.sink
                .write_all(render_row(&row.cells(), &widths).as_bytes())?;
        }

        self.sink.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.sink
    }
}

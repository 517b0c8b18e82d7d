//! Table formatter - project records into display rows and measure columns

use crate::core::model::{ColumnWidths, DisplayRow, Record, Table};

/// Display width of a cell in characters
pub fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}

/// Widest of a header label and every value in its column
fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values.map(cell_width).fold(cell_width(header), usize::max)
}

/// Compute column widths. The id column is fixed at `id_width`.
pub fn column_widths(headers: &[String; 3], rows: &[DisplayRow], id_width: usize) -> ColumnWidths {
    ColumnWidths {
        id: id_width,
        author: column_width(&headers[1], rows.iter().map(|r| r.author.as_str())),
        link_or_title: column_width(&headers[2], rows.iter().map(|r| r.link_or_title.as_str())),
    }
}

/// Build a table from resolved records
pub fn build_table(records: &[Record], headers: &[String; 3], id_width: usize) -> Table {
    let rows: Vec<DisplayRow> = records.iter().map(DisplayRow::from).collect();
    let widths = column_widths(headers, &rows, id_width);

    Table {
        headers: headers.clone(),
        rows,
        widths,
    }
}

//! Raw book list import
//!
//! Bootstraps `data.json` from a tab-separated list, one book per line:
//! `id<TAB>author<TAB>title`. Trailing whitespace is trimmed from the id and
//! author columns; the title is taken verbatim.

use std::fs;
use std::path::Path;
use tracing::info;

use crate::backends::records::write_records;
use crate::core::error::{TableError, TableResult};
use crate::core::model::Record;

/// Parse raw tab-separated text into records
pub fn parse_raw_books(text: &str) -> TableResult<Vec<Record>> {
    let mut records = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let columns: Vec<&str> = line.splitn(3, '\t').collect();
        let [id, author, title] = columns[..] else {
            return Err(TableError::MalformedRawLine {
                line: line_no,
                columns: columns.len(),
            });
        };

        let id = id.trim_end();
        let id: u32 = id.parse().map_err(|_| TableError::InvalidRawId {
            line: line_no,
            value: id.to_string(),
        })?;

        records.push(Record::new(id, author.trim_end(), title));
    }

    Ok(records)
}

/// Read `raw_path`, parse it and write the records to `data_path`
pub fn import_raw_books(raw_path: &Path, data_path: &Path) -> TableResult<Vec<Record>> {
    let text = fs::read_to_string(raw_path).map_err(|source| TableError::ReadRaw {
        path: raw_path.to_path_buf(),
        source,
    })?;

    let records = parse_raw_books(&text)?;
    write_records(data_path, &records)?;

    info!(
        count = records.len(),
        from = %raw_path.display(),
        to = %data_path.display(),
        "imported raw books"
    );
    Ok(records)
}

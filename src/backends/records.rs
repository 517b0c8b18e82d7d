//! Record loader - read and write `data.json`

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::error::{TableError, TableResult};
use crate::core::model::Record;

/// Load records in document order
pub fn load_records(path: &Path) -> TableResult<Vec<Record>> {
    let data = fs::read_to_string(path).map_err(|source| TableError::ReadData {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<Record> =
        serde_json::from_str(&data).map_err(|source| TableError::ParseData {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(count = records.len(), path = %path.display(), "loaded records");
    Ok(records)
}

/// Serialize records with one-space indentation, truncating `path`
pub fn write_records(path: &Path, records: &[Record]) -> TableResult<()> {
    let json = to_json(records).map_err(|source| TableError::SerializeData {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| TableError::WriteData {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(count = records.len(), path = %path.display(), "wrote records");
    Ok(())
}

fn to_json(records: &[Record]) -> serde_json::Result<Vec<u8>> {
    use serde::Serialize;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    Ok(buf)
}

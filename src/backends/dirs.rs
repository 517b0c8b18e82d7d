//! Directory lister
//!
//! Lists the immediate subdirectories of the root. Names must start with a
//! two-digit id prefix (`03-some-title`); anything else is skipped with a
//! warning. Excluded names are dropped silently.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::config::Config;
use crate::core::error::{TableError, TableResult};
use crate::core::model::DirectoryEntry;

pub static PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{2})").expect("Invalid PREFIX_RE regex"));

/// Parse the two-digit id prefix of a directory name
pub fn parse_prefix(name: &str) -> Option<u32> {
    PREFIX_RE
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// List conforming subdirectories of `root`, sorted by name
pub fn list_directories(root: &Path, config: &Config) -> TableResult<Vec<DirectoryEntry>> {
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut entries = Vec::new();

    for entry in walker {
        let entry = entry.map_err(|source| TableError::ReadDirectory {
            path: root.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if config.is_excluded(&name) {
            debug!(dir = %name, "excluded directory");
            continue;
        }

        match parse_prefix(&name) {
            Some(prefix) => entries.push(DirectoryEntry { prefix, name }),
            None => warn!(dir = %name, "skipping directory without a two-digit id prefix"),
        }
    }

    debug!(count = entries.len(), root = %root.display(), "listed directories");
    Ok(entries)
}

//! Book table data model
//!
//! `Record` is what `data.json` holds; `DisplayRow` and `ColumnWidths` are
//! the derived, display-only projections used by the Markdown writer.

use serde::{Deserialize, Serialize};

/// A single book entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub author: String,
    /// Book title
    #[serde(rename = "book")]
    pub title: String,
    /// Resolved directory URL, empty when unresolved. Never read from input.
    #[serde(default, skip_deserializing)]
    pub url: String,
}

impl Record {
    pub fn new(id: u32, author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            title: title.into(),
            url: String::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        !self.url.is_empty()
    }

    /// Id as the two-digit key shared with directory names
    pub fn display_id(&self) -> String {
        format!("{:02}", self.id)
    }

    /// `[title](url)` when resolved, the bare title otherwise
    pub fn link_or_title(&self) -> String {
        if self.is_resolved() {
            format!("[{}]({})", self.title, self.url)
        } else {
            self.title.clone()
        }
    }
}

/// A subdirectory whose name starts with a two-digit id prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub prefix: u32,
    pub name: String,
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub id: String,
    pub author: String,
    pub link_or_title: String,
}

impl DisplayRow {
    pub fn cells(&self) -> [&str; 3] {
        [&self.id, &self.author, &self.link_or_title]
    }
}

impl From<&Record> for DisplayRow {
    fn from(record: &Record) -> Self {
        Self {
            id: record.display_id(),
            author: record.author.clone(),
            link_or_title: record.link_or_title(),
        }
    }
}

/// Reserved character width of each of the three columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub id: usize,
    pub author: usize,
    pub link_or_title: usize,
}

impl ColumnWidths {
    pub fn as_array(&self) -> [usize; 3] {
        [self.id, self.author, self.link_or_title]
    }
}

/// Formatted table ready for writing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: [String; 3],
    pub rows: Vec<DisplayRow>,
    pub widths: ColumnWidths,
}

//! Backends module - Filesystem inputs and outputs
//!
//! Provides:
//! - dirs: Id-prefixed subdirectory listing with walkdir
//! - records: JSON data file loading and writing
//! - import: Tab-separated book list import

pub mod dirs;
pub mod import;
pub mod records;

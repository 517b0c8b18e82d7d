//! Flows module - Operations combining several stages
//!
//! Provides:
//! - resolve: Link records to directories
//! - table: Display rows and column widths
//! - generate: The full render run

pub mod generate;
pub mod resolve;
pub mod table;

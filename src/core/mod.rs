//! Core module - Data structures shared by every stage
//!
//! This module provides:
//! - Run configuration and its defaults
//! - Error taxonomy
//! - Book records and table projections
//! - Markdown table writer

pub mod config;
pub mod error;
pub mod model;
pub mod render;

//! booktable - render a book list into a linked Markdown table
//!
//! booktable provides:
//! - Loading book records from a JSON data file
//! - Linking records to id-prefixed subdirectories
//! - Fixed-width Markdown table output
//! - Importing a tab-separated book list into the data file

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // RUST_LOG wins over -q/-v
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.default_log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    cli::run(cli)
}

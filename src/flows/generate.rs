//! Generate flow - the whole batch run
//!
//! Steps:
//! 1. List id-prefixed subdirectories of the root
//! 2. Load records from the data file
//! 3. Resolve record urls against the directories
//! 4. Format rows and measure columns
//! 5. Write the Markdown table, truncating the output file

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use tracing::info;

use crate::backends::dirs::list_directories;
use crate::backends::records::load_records;
use crate::core::config::Config;
use crate::core::error::{TableError, TableResult};
use crate::core::model::Table;
use crate::core::render::MarkdownWriter;
use crate::flows::resolve::resolve_urls;
use crate::flows::table::build_table;

/// Outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    pub rows: usize,
    pub resolved: usize,
}

/// Run steps 1-4 and return the formatted table
pub fn generate_table(config: &Config) -> TableResult<(Table, usize)> {
    let dirs = list_directories(&config.root, config)?;
    let mut records = load_records(&config.data_file())?;
    let resolved = resolve_urls(&mut records, &dirs, &config.url_prefix);
    let table = build_table(&records, &config.headers, config.id_width);
    Ok((table, resolved))
}

/// Write `table` to `path`, truncating prior content
pub fn write_table_file(path: &Path, table: &Table) -> TableResult<()> {
    let to_error = |source| TableError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    MarkdownWriter::new(BufWriter::new(file))
        .write_table(table)
        .map_err(to_error)
}

/// Run the generate command
pub fn run_generate(config: &Config) -> Result<GenerateSummary> {
    let (table, resolved) = generate_table(config).context("Failed to build book table")?;

    match config.output_file() {
        Some(path) => {
            write_table_file(&path, &table).context("Failed to write book table")?;
            info!(
                rows = table.rows.len(),
                resolved,
                output = %path.display(),
                "wrote book table"
            );
        }
        None => {
            MarkdownWriter::new(io::stdout().lock())
                .write_table(&table)
                .context("Failed to write book table to stdout")?;
        }
    }

    Ok(GenerateSummary {
        rows: table.rows.len(),
        resolved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn setup(data: &str, dirs: &[&str]) -> (tempfile::TempDir, Config) {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("data.json"), data).unwrap();
        for dir in dirs {
            fs::create_dir(temp.path().join(dir)).unwrap();
        }
        let mut config = Config::with_root(temp.path());
        config.url_prefix = "https://example.com/".to_string();
        (temp, config)
    }

    #[test]
    fn test_generate_writes_linked_row() {
        let (temp, config) = setup(
            r#"[{"id":1,"author":"A. Smith","book":"Tree"},{"id":2,"author":"Bee","book":"Hive"}]"#,
            &["01-tree-book", ".git"],
        );

        let summary = run_generate(&config).unwrap();
        assert_eq!(summary, GenerateSummary { rows: 2, resolved: 1 });

        let output = fs::read_to_string(temp.path().join("output.md")).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("[Tree](https://example.com/01-tree-book)"));
        assert!(lines[3].contains("| Hive "));
    }

    #[test]
    fn test_generate_truncates_previous_output() {
        let (temp, config) = setup("[]", &[]);
        let output = temp.path().join("output.md");
        fs::write(&output, "x".repeat(4096)).unwrap();

        run_generate(&config).unwrap();
        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "| **ID** | **Autor** | **Dílo** |\n| ------ | --------- | -------- |\n"
        );
    }

    #[test]
    fn test_generate_is_idempotent() {
        let (temp, config) = setup(r#"[{"id":3,"author":"C","book":"Three"}]"#, &["03-a", "03-b"]);
        let output = temp.path().join("output.md");

        run_generate(&config).unwrap();
        let first = fs::read(&output).unwrap();
        run_generate(&config).unwrap();
        assert_eq!(first, fs::read(&output).unwrap());
    }

    #[test]
    fn test_missing_data_fails_before_writing() {
        let temp = tempdir().unwrap();
        let config = Config::with_root(temp.path());

        assert!(run_generate(&config).is_err());
        assert!(!temp.path().join("output.md").exists());
    }

    #[test]
    fn test_unwritable_output_is_error() {
        let (temp, mut config) = setup("[]", &[]);
        config.output = crate::core::config::OutputTarget::File(temp.path().join("no/such/dir.md"));

        let err = generate_table(&config)
            .and_then(|(table, _)| write_table_file(&config.output_file().unwrap(), &table))
            .unwrap_err();
        assert!(matches!(err, TableError::WriteOutput { .. }));
    }
}

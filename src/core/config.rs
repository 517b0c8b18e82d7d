//! Run configuration
//!
//! Holds every constant the generator depends on. `Config::default()`
//! reproduces the stock behavior; the CLI overrides individual fields.

use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_PATH: &str = "./data.json";
pub const DEFAULT_OUTPUT_PATH: &str = "./output.md";
pub const DEFAULT_URL_PREFIX: &str = "https://github.com/POJFM/cetba/tree/main/";
pub const DEFAULT_HEADERS: [&str; 3] = ["**ID**", "**Autor**", "**Dílo**"];
pub const DEFAULT_EXCLUDED_DIRS: [&str; 2] = [".git", ".idea"];
pub const DEFAULT_ID_WIDTH: usize = 6;

/// Where the table goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose subdirectories are matched against record ids
    pub root: PathBuf,
    pub data_path: PathBuf,
    pub output: OutputTarget,
    pub url_prefix: String,
    pub headers: [String; 3],
    pub excluded_dirs: Vec<String>,
    pub id_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            output: OutputTarget::File(PathBuf::from(DEFAULT_OUTPUT_PATH)),
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
            headers: DEFAULT_HEADERS.map(String::from),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            id_width: DEFAULT_ID_WIDTH,
        }
    }
}

impl Config {
    /// Default configuration rooted at `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Data file path, resolved against the root when relative
    pub fn data_file(&self) -> PathBuf {
        resolve_against(&self.root, &self.data_path)
    }

    /// Output file path, or `None` when writing to stdout
    pub fn output_file(&self) -> Option<PathBuf> {
        match &self.output {
            OutputTarget::File(path) => Some(resolve_against(&self.root, path)),
            OutputTarget::Stdout => None,
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|excluded| excluded == name)
    }
}

/// Join `path` onto `root` unless it is already absolute
pub fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.url_prefix, DEFAULT_URL_PREFIX);
        assert_eq!(config.headers[2], "**Dílo**");
        assert_eq!(config.id_width, 6);
        assert!(config.is_excluded(".git"));
        assert!(config.is_excluded(".idea"));
        assert!(!config.is_excluded(".vscode"));
    }

    #[test]
    fn test_paths_resolve_against_root() {
        let config = Config::with_root("/books");
        assert_eq!(config.data_file(), Path::new("/books/./data.json"));
        assert_eq!(config.output_file(), Some(PathBuf::from("/books/./output.md")));
    }

    #[test]
    fn test_absolute_paths_kept() {
        let mut config = Config::with_root("/books");
        config.data_path = PathBuf::from("/elsewhere/data.json");
        assert_eq!(config.data_file(), Path::new("/elsewhere/data.json"));
    }

    #[test]
    fn test_stdout_has_no_output_file() {
        let mut config = Config::default();
        config.output = OutputTarget::Stdout;
        assert_eq!(config.output_file(), None);
    }
}

//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{Args, Command, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::core::config::{
    resolve_against, Config, OutputTarget, DEFAULT_DATA_PATH, DEFAULT_EXCLUDED_DIRS,
    DEFAULT_ID_WIDTH, DEFAULT_OUTPUT_PATH, DEFAULT_URL_PREFIX,
};

/// booktable - render a book list into a linked Markdown table.
#[derive(Parser, Debug)]
#[command(name = "booktable")]
#[command(
    author,
    version,
    about,
    long_about = r#"booktable reads book records from data.json, links every record to the
subdirectory of ROOT whose name starts with the record's two-digit id, and
writes a pipe-delimited Markdown table to output.md.

Running without a subcommand is the same as `booktable render`.

Examples:
    booktable
    booktable render --url-prefix https://example.com/books/ --stdout
    booktable import books.tsv
"#
)]
pub struct Cli {
    /// Directory whose subdirectories are matched against record ids.
    #[arg(
        long,
        global = true,
        default_value = ".",
        env = "BOOKTABLE_ROOT",
        value_name = "ROOT",
        long_help = "Directory whose immediate subdirectories are matched against record ids\n\
(defaults to the current directory).\n\n\
Relative --data and --output paths are interpreted relative to it."
    )]
    pub root: PathBuf,

    /// Path to the JSON book list.
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_DATA_PATH,
        env = "BOOKTABLE_DATA",
        value_name = "PATH"
    )]
    pub data: PathBuf,

    /// Quiet mode (errors only).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (-v debug, -vv trace).
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        long_help = "Increase log verbosity on stderr. RUST_LOG, when set, takes precedence."
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the Markdown table (default).
    #[command(
        long_about = "Generate the Markdown book table.\n\n\
Subdirectories of ROOT must start with a two-digit id (`03-some-title`); others are\n\
skipped with a warning. When several directories share an id the last one by name wins.\n\n\
Examples:\n\
  booktable render\n\
  booktable render --output README.md --exclude .git --exclude node_modules\n"
    )]
    Render(RenderArgs),

    /// Convert a tab-separated book list into the JSON data file.
    #[command(
        long_about = "Read RAW, one book per line as `id<TAB>author<TAB>title`, and write the\n\
records to the data file (see --data) as indented JSON, replacing its content.\n\n\
Example:\n\
  booktable import books.tsv --data data.json\n"
    )]
    Import {
        /// Tab-separated source file.
        #[arg(value_name = "RAW")]
        raw: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Markdown output path.
    #[arg(
        long,
        default_value = DEFAULT_OUTPUT_PATH,
        env = "BOOKTABLE_OUTPUT",
        value_name = "PATH"
    )]
    pub output: PathBuf,

    /// Write the table to stdout instead of the output file.
    #[arg(long)]
    pub stdout: bool,

    /// Prefix joined with a directory name to form a link.
    #[arg(
        long,
        default_value = DEFAULT_URL_PREFIX,
        env = "BOOKTABLE_URL_PREFIX",
        value_name = "URL"
    )]
    pub url_prefix: String,

    /// Directory names never considered for links (repeatable).
    #[arg(
        long = "exclude",
        value_name = "NAME",
        default_values_t = DEFAULT_EXCLUDED_DIRS.map(String::from)
    )]
    pub excluded_dirs: Vec<String>,

    /// Header labels for the id, author and title columns.
    #[arg(long, value_name = "ID,AUTHOR,TITLE", value_parser = parse_headers)]
    pub headers: Option<[String; 3]>,

    /// Fixed width of the id column.
    #[arg(long, default_value_t = DEFAULT_ID_WIDTH, value_name = "N")]
    pub id_width: usize,
}

impl RenderArgs {
    /// Render arguments as if `render` was given with no flags (env still applies)
    pub fn from_env() -> Result<Self> {
        let matches = Self::augment_args(Command::new("render")).try_get_matches_from(["render"])?;
        Ok(Self::from_arg_matches(&matches)?)
    }
}

impl Cli {
    /// Build the run configuration for the render command
    pub fn render_config(&self, args: &RenderArgs) -> Config {
        let mut config = Config::with_root(self.root.clone());
        config.data_path = self.data.clone();
        config.output = if args.stdout {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(args.output.clone())
        };
        config.url_prefix = args.url_prefix.clone();
        config.excluded_dirs = args.excluded_dirs.clone();
        if let Some(headers) = &args.headers {
            config.headers = headers.clone();
        }
        config.id_width = args.id_width;
        config
    }

    /// Log level when RUST_LOG is unset
    pub fn default_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Parse `--headers` as exactly three comma-separated labels
fn parse_headers(value: &str) -> Result<[String; 3], String> {
    let labels: Vec<&str> = value.split(',').collect();
    match labels[..] {
        [id, author, title] => Ok([id.to_string(), author.to_string(), title.to_string()]),
        _ => Err(format!("expected 3 comma-separated labels, got {}", labels.len())),
    }
}

/// Run the CLI with parsed arguments
pub fn run(mut cli: Cli) -> Result<()> {
    let command = match cli.command.take() {
        Some(command) => command,
        None => Commands::Render(RenderArgs::from_env()?),
    };

    match command {
        Commands::Render(args) => {
            let config = cli.render_config(&args);
            let summary = crate::flows::generate::run_generate(&config)?;
            info!(
                rows = summary.rows,
                resolved = summary.resolved,
                "render finished"
            );
            Ok(())
        }

        Commands::Import { raw } => {
            let data_path = resolve_against(&cli.root, &cli.data);
            let records = crate::backends::import::import_raw_books(&raw, &data_path)
                .context("Failed to import raw book list")?;
            info!(count = records.len(), "import finished");
            Ok(())
        }
    }
}

//! CLI argument definitions for tabscan.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tabscan_cli::report::ViewFormat;
use tabscan_model::{DEFAULT_MAX_ROWS, DEFAULT_TOP_VALUES, ParseOptions, Settings};

#[derive(Parser)]
#[command(
    name = "tabscan",
    version,
    about = "Inspect delimited text files",
    long_about = "Inspect delimited text files (CSV, TSV, semicolon or pipe separated).\n\n\
                  The delimiter, header row and file encoding are detected automatically;\n\
                  every detection can be overridden from the command line."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the parsed rows of a file.
    View(ViewArgs),

    /// Print per-column type and statistics.
    Stats(StatsArgs),
}

/// Options shared by every command that reads a file.
#[derive(Args)]
pub struct InputArgs {
    /// Delimited text file to read.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Maximum number of data rows to read.
    #[arg(long = "max-rows", value_name = "N", default_value_t = DEFAULT_MAX_ROWS)]
    pub max_rows: usize,

    /// Field delimiter (a single character, or "tab").
    #[arg(long = "delimiter", short = 'd', value_name = "CHAR", value_parser = parse_delimiter)]
    pub delimiter: Option<char>,

    /// Treat the first record as column names.
    #[arg(long = "headers", conflicts_with = "no_headers")]
    pub headers: bool,

    /// Treat the first record as data.
    #[arg(long = "no-headers")]
    pub no_headers: bool,
}

impl InputArgs {
    pub fn settings(&self, top_values_limit: usize) -> Settings {
        Settings {
            max_rows: self.max_rows,
            top_values_limit,
        }
    }

    /// Parser options: settings first, explicit flags on top.
    pub fn parse_options(&self, settings: &Settings) -> ParseOptions {
        let mut options = settings.parse_options();
        if let Some(delimiter) = self.delimiter {
            options = options.with_delimiter(delimiter);
        }
        if self.headers {
            options = options.with_has_headers(true);
        } else if self.no_headers {
            options = options.with_has_headers(false);
        }
        options
    }
}

#[derive(Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format.
    #[arg(long = "format", short = 'f', value_enum, default_value = "table")]
    pub format: ViewFormat,

    /// Table name used in SQL output.
    #[arg(long = "table-name", value_name = "NAME", default_value = "data")]
    pub table_name: String,
}

#[derive(Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of most frequent values to keep per column.
    #[arg(long = "top", value_name = "N", default_value_t = DEFAULT_TOP_VALUES)]
    pub top: usize,

    /// Print statistics as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_delimiter(value: &str) -> Result<char, String> {
    match value {
        "tab" | "\\t" => return Ok('\t'),
        "space" => return Ok(' '),
        _ => {}
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch != '"' && ch != '\n' && ch != '\r' => Ok(ch),
        (Some(_), None) => Err(format!("{value:?} cannot be used as a delimiter")),
        _ => Err(format!("expected a single character, got {value:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn delimiter_names() {
        assert_eq!(parse_delimiter("tab"), Ok('\t'));
        assert_eq!(parse_delimiter("\\t"), Ok('\t'));
        assert_eq!(parse_delimiter(";"), Ok(';'));
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("\"").is_err());
    }

    #[test]
    fn header_flags_override_detection() {
        let cli = Cli::parse_from(["tabscan", "view", "data.csv", "--no-headers", "-d", "|"]);
        let Command::View(args) = cli.command else {
            panic!("expected view");
        };
        let settings = args.input.settings(DEFAULT_TOP_VALUES);
        let options = args.input.parse_options(&settings);
        assert_eq!(options.has_headers, Some(false));
        assert_eq!(options.delimiter, Some('|'));
        assert_eq!(options.max_rows, Some(DEFAULT_MAX_ROWS));
    }

    #[test]
    fn conflicting_header_flags_are_rejected() {
        let result = Cli::try_parse_from(["tabscan", "stats", "a.csv", "--headers", "--no-headers"]);
        assert!(result.is_err());
    }
}

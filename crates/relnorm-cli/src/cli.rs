//! CLI argument definitions for the table normalizer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use relnorm_core::HeaderSpec;

#[derive(Parser)]
#[command(
    name = "relnorm",
    version,
    about = "Split repetitive columns of a CSV table into lookup tables",
    long_about = "Split repetitive columns of a CSV table into lookup tables.\n\n\
                  Each selected column is replaced by integer keys into a new\n\
                  table of its distinct values, in order of first appearance."
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
    /// Normalize a CSV table and print the resulting tables.
    Normalize(NormalizeArgs),

    /// Print the distinct-value ratio of every column.
    Cardinality(CardinalityArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Columns to extract.
    ///
    /// A number in [0, 1] extracts every column whose distinct-value ratio is
    /// at or below it. A comma list (`color,size` or `0,2`) extracts those
    /// columns. A threshold map (`color=0.5,size=0.2`) extracts a column when
    /// its ratio is at or below its own threshold. JSON (`["color"]`,
    /// `{"color": 0.5}`) is accepted too.
    #[arg(long = "headers", value_name = "SPEC", allow_hyphen_values = true)]
    pub headers: HeaderSpec,

    /// Name of the table that keeps the non-extracted columns.
    #[arg(long = "primary-name", value_name = "NAME", default_value = "main")]
    pub primary_name: String,

    #[command(flatten)]
    pub display: DisplayArgs,
}

#[derive(Parser)]
pub struct CardinalityArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Options for loading the input table.
#[derive(Args)]
pub struct InputArgs {
    /// CSV file with a header row.
    #[arg(value_name = "CSV")]
    pub path: PathBuf,

    /// Field separator (a single ASCII character).
    #[arg(long = "separator", value_name = "CHAR", default_value_t = ',')]
    pub separator: char,

    /// Rows sampled to infer column types.
    #[arg(long = "infer-schema-length", value_name = "ROWS", default_value_t = 100)]
    pub infer_schema_length: usize,
}

/// Options for printing tables.
#[derive(Args)]
pub struct DisplayArgs {
    /// Rows printed per table; longer tables show head and tail.
    #[arg(long = "max-rows", value_name = "N", default_value_t = 20)]
    pub max_rows: usize,

    /// Table width in characters.
    #[arg(long = "width", value_name = "COLS", default_value_t = 120)]
    pub width: u16,
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

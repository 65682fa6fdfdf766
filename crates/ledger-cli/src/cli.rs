//! CLI argument definitions for the ledger converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ledger-convert",
    version,
    about = "Convert ledger exports (CSV or spreadsheet) to the general-ledger CSV layout",
    long_about = "Convert one ledger export to the fixed general-ledger CSV layout.\n\n\
                  Reads .csv (UTF-8, UTF-16LE with BOM, Big5, GBK, Windows-1252) and\n\
                  .xlsx/.xls/.xlsm/.xlsb/.ods workbooks (first sheet). Writes a\n\
                  BOM-prefixed, fully quoted CSV named converted_YYYYMMDD.csv."
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

    /// Log output format.
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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Allow cell values in trace logs (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert one ledger file.
    Convert(ConvertArgs),

    /// List the output columns in order.
    Columns,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Source file (.csv, .xlsx, .xls, .xlsm, .xlsb, .ods).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Exact output file path.
    #[arg(long = "output", short = 'o', value_name = "PATH", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Directory for converted_YYYYMMDD.csv (default: the input's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Convert and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the summary as JSON instead of a table.
    #[arg(long = "summary-json")]
    pub summary_json: bool,

    /// Candidate encodings for CSV input without a BOM, tried in order.
    #[arg(long = "encoding", value_name = "LABEL", value_delimiter = ',')]
    pub encodings: Vec<String>,

    /// Reject a candidate encoding if its output has replacement characters.
    #[arg(long = "strict-decode")]
    pub strict_decode: bool,
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

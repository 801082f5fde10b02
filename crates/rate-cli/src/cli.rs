//! CLI argument definitions for the Rate Manager.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use rate_cli::logging::LogFormat;
use rate_ingest::DEFAULT_SAMPLE_ROWS;
use rate_model::FieldAssignment;
use tracing::level_filters::LevelFilter;

/// Output path used when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "rates_generated.csv";

#[derive(Parser)]
#[command(
    name = "rate-manager",
    version,
    about = "Rate Manager - Convert carrier rate tables to a canonical rate schedule",
    long_about = "Convert a rate table (CSV, XLS, XLSX or XLSM) into a canonical CSV with the\n\
                  columns destination, prefix, rate, setup, currency and description.\n\n\
                  Use `columns` to list the source columns, then `generate` with one\n\
                  --map per field. Rate and setup are rescaled by --discount, then --gain."
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

    /// Allow cell values in log output (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the column names of a rate table.
    Columns(ColumnsArgs),

    /// Generate the canonical rate schedule CSV.
    Generate(GenerateArgs),
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Rate table to inspect (.csv, .xls, .xlsx, .xlsm).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of data rows parsed to validate the file.
    #[arg(long = "sample-rows", value_name = "N", default_value_t = DEFAULT_SAMPLE_ROWS)]
    pub sample_rows: usize,

    /// Print the columns as a JSON array.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Rate table to convert (.csv, .xls, .xlsx, .xlsm).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Source column for a field, e.g. `--map rate=Tarifa`.
    ///
    /// Use `FIELD=__DEFAULT__` (or an empty column) to take the default value.
    #[arg(long = "map", value_name = "FIELD=COLUMN")]
    pub map: Vec<FieldAssignment>,

    /// Default value for a field, used when it is unmapped or its cell is empty.
    #[arg(long = "default", value_name = "FIELD=VALUE")]
    pub default: Vec<FieldAssignment>,

    /// Discount percentage applied to rate and setup (invalid values count as 0).
    #[arg(long = "discount", value_name = "PCT", allow_hyphen_values = true)]
    pub discount: Option<String>,

    /// Gain percentage applied after the discount (invalid values count as 0).
    #[arg(long = "gain", value_name = "PCT", allow_hyphen_values = true)]
    pub gain: Option<String>,

    /// JSON request file with mapping, defaults, discount and gain.
    ///
    /// Flags given on the command line override its entries.
    #[arg(long = "request", value_name = "FILE")]
    pub request: Option<PathBuf>,

    /// Output CSV path, or `-` for stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl GenerateArgs {
    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

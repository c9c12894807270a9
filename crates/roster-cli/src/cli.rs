//! CLI argument definitions for the roster dashboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "HR roster data-quality dashboard",
    long_about = "Profile HR roster workbooks for data quality.\n\n\
                  Splits each sheet into citizens and non-citizens, measures record\n\
                  completeness and missing data per population, filters rows, and\n\
                  exports filtered subsets as CSV."
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

    /// Prefix log lines with a timestamp (always on in JSON output).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in each log line.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Allow cell values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Dashboard configuration file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Column that designates nationality.
    #[arg(long = "nationality-column", value_name = "NAME", global = true)]
    pub nationality_column: Option<String>,

    /// Nationality value that marks a citizen.
    #[arg(long = "citizen-value", value_name = "VALUE", global = true)]
    pub citizen_value: Option<String>,

    /// Fail when a completeness policy names a column the sheet lacks.
    #[arg(long = "strict", global = true)]
    pub strict: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the sheets of a workbook with their sizes.
    Sheets(WorkbookArgs),

    /// Completeness metrics for citizens and non-citizens.
    Overview(SheetArgs),

    /// Missing-data profile per population.
    Missing(MissingArgs),

    /// Value counts, age histogram, and age by gender.
    Distributions(SheetArgs),

    /// Filter rows by column values and optionally export them as CSV.
    Filter(FilterArgs),

    /// Full dashboard report as JSON.
    Report(ReportArgs),
}

#[derive(Args)]
pub struct WorkbookArgs {
    /// Roster workbook (.xlsx, .xlsm, .xlsb, .xls, .ods, or .csv).
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,
}

#[derive(Args)]
pub struct SheetArgs {
    #[command(flatten)]
    pub workbook: WorkbookArgs,

    /// Sheet to profile (default: the first sheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,
}

#[derive(Args)]
pub struct MissingArgs {
    #[command(flatten)]
    pub sheet: SheetArgs,

    /// Also show the present/missing split of this column over the whole sheet.
    #[arg(long = "column", value_name = "NAME")]
    pub column: Option<String>,
}

#[derive(Args)]
pub struct FilterArgs {
    #[command(flatten)]
    pub sheet: SheetArgs,

    /// Keep rows whose COLUMN holds one of the listed values (repeatable).
    #[arg(long = "where", value_name = "COLUMN=V1,V2")]
    pub clauses: Vec<String>,

    /// Write the filtered rows to this CSV file.
    #[arg(long = "output", value_name = "CSV")]
    pub output: Option<PathBuf>,

    /// Number of rows to preview.
    #[arg(long = "limit", default_value_t = 20)]
    pub limit: usize,
}

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub sheet: SheetArgs,

    /// Include the present/missing split of this column.
    #[arg(long = "column", value_name = "NAME")]
    pub column: Option<String>,

    /// Write the report to this file instead of stdout.
    #[arg(long = "output", value_name = "JSON")]
    pub output: Option<PathBuf>,
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

//! CLI argument definitions for the valuation estimator.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use bizval_report::{DEFAULT_THOUSANDS_SEPARATOR, ReportFormat, ReportOptions};

#[derive(Parser)]
#[command(
    name = "bizval",
    version,
    about = "Business valuation estimator",
    long_about = "Estimate the value of a business from a profile.\n\n\
                  Blends asset-based, market-based and income-based valuations and\n\
                  reports a confidence score based on how complete the profile is."
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

    /// Include business names and free-text answers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate the value of one business profile.
    Estimate(EstimateArgs),

    /// Estimate every profile in a CSV file.
    Batch(BatchArgs),

    /// Report which form steps and required fields are incomplete.
    Check(CheckArgs),

    /// List industries, stages and business models with their factors.
    Catalog,
}

#[derive(Parser)]
pub struct EstimateArgs {
    /// Profile JSON file, or `-` to read standard input.
    #[arg(value_name = "PROFILE")]
    pub profile: PathBuf,

    /// Print the export in this format instead of the summary table.
    ///
    /// With --output, selects the file format (default: from the extension).
    #[arg(long = "format", value_enum)]
    pub format: Option<ExportFormatArg>,

    /// Write the export to a file.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Valuation date written into the export (default: today).
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Currency symbol used when printing amounts.
    #[arg(long = "currency", default_value = "$")]
    pub currency: String,

    /// Digit grouping separator used when printing amounts.
    #[arg(
        long = "thousands-separator",
        value_name = "CHAR",
        default_value_t = DEFAULT_THOUSANDS_SEPARATOR
    )]
    pub thousands_separator: char,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// CSV file with one profile per row.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Write one JSON export per row into this directory.
    #[arg(long = "output", short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Valuation date written into the exports (default: today).
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Currency symbol used when printing amounts.
    #[arg(long = "currency", default_value = "$")]
    pub currency: String,

    /// Digit grouping separator used when printing amounts.
    #[arg(
        long = "thousands-separator",
        value_name = "CHAR",
        default_value_t = DEFAULT_THOUSANDS_SEPARATOR
    )]
    pub thousands_separator: char,
}

impl EstimateArgs {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions::default()
            .with_currency_symbol(&self.currency)
            .with_thousands_separator(self.thousands_separator)
    }
}

impl BatchArgs {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions::default()
            .with_currency_symbol(&self.currency)
            .with_thousands_separator(self.thousands_separator)
    }
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Profile JSON file, or `-` to read standard input.
    #[arg(value_name = "PROFILE")]
    pub profile: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormatArg {
    Text,
    Json,
}

impl From<ExportFormatArg> for ReportFormat {
    fn from(value: ExportFormatArg) -> Self {
        match value {
            ExportFormatArg::Text => ReportFormat::Text,
            ExportFormatArg::Json => ReportFormat::Json,
        }
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

//! CLI argument definitions for `homolog`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use homolog_model::{CanonicalFallback, RuleOrder};
use homolog_report::OutputFormat;

#[derive(Parser)]
#[command(
    name = "homolog",
    version,
    about = "Roster homologation - canonical countries, calling codes and job areas",
    long_about = "Homologate an employee roster against reference tables.\n\n\
                  Country names are translated and mapped to their canonical spelling,\n\
                  calling codes are resolved from the reference workbook and every job\n\
                  title is assigned a functional area by ordered pattern rules."
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

    /// Allow names and emails in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Homologate the roster and write the output files.
    Run(RunArgs),

    /// Show the area assigned to one or more job titles.
    Classify(ClassifyArgs),

    /// List the job-title rules in evaluation order.
    Categories(CategoriesArgs),
}

#[derive(Parser, Default)]
pub struct RunArgs {
    /// TOML configuration file (default: ./homolog.toml when present).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the default input files.
    #[arg(long = "assets-dir", value_name = "DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Roster export (XLSX first sheet, or CSV).
    #[arg(long = "roster", value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// English/Spanish country name table (`;`-delimited CSV).
    #[arg(long = "translations", value_name = "FILE")]
    pub translations: Option<PathBuf>,

    /// Reference workbook with the canonical country, calling code and
    /// taxonomy sheets.
    #[arg(long = "workbook", value_name = "FILE")]
    pub workbook: Option<PathBuf>,

    /// Output file; its extension is replaced per format.
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format to generate.
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Also write the run report as JSON.
    #[arg(long = "report", value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Run every stage and print the summary without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Country name to emit when no canonical spelling exists.
    #[arg(long = "canonical-fallback", value_enum)]
    pub canonical_fallback: Option<CanonicalFallbackArg>,

    /// Evaluation order of the job-title rules.
    #[arg(long = "rule-order", value_enum)]
    pub rule_order: Option<RuleOrderArg>,

    /// Keep ESPANA unaccented in the output.
    #[arg(long = "no-restore-accents")]
    pub no_restore_accents: bool,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Job titles to classify.
    #[arg(value_name = "TITLE", required = true)]
    pub titles: Vec<String>,

    /// Evaluation order of the job-title rules.
    #[arg(long = "rule-order", value_enum, default_value = "legacy")]
    pub rule_order: RuleOrderArg,

    /// Match the title as typed, without removing accents.
    #[arg(long = "raw")]
    pub raw: bool,
}

#[derive(Parser)]
pub struct CategoriesArgs {
    /// Evaluation order of the job-title rules.
    #[arg(long = "rule-order", value_enum, default_value = "legacy")]
    pub rule_order: RuleOrderArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Xlsx,
    Csv,
    Both,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Xlsx => OutputFormat::Xlsx,
            OutputFormatArg::Csv => OutputFormat::Csv,
            OutputFormatArg::Both => OutputFormat::Both,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CanonicalFallbackArg {
    WorkingName,
    Blank,
    Drop,
}

impl From<CanonicalFallbackArg> for CanonicalFallback {
    fn from(value: CanonicalFallbackArg) -> Self {
        match value {
            CanonicalFallbackArg::WorkingName => CanonicalFallback::WorkingName,
            CanonicalFallbackArg::Blank => CanonicalFallback::Blank,
            CanonicalFallbackArg::Drop => CanonicalFallback::Drop,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RuleOrderArg {
    Legacy,
    Specific,
}

impl From<RuleOrderArg> for RuleOrder {
    fn from(value: RuleOrderArg) -> Self {
        match value {
            RuleOrderArg::Legacy => RuleOrder::Legacy,
            RuleOrderArg::Specific => RuleOrder::Specific,
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

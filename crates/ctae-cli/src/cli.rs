//! CLI argument definitions for the adverse-event explorer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use ctae_registry::DEFAULT_REGISTRY_URL;

#[derive(Parser)]
#[command(
    name = "ctae",
    version,
    about = "Explore adverse-event data from ClinicalTrials.gov",
    long_about = "Fetch reported adverse events for clinical trials and render them\n\
                  as per-arm subject-count tables with totals and percentages.\n\n\
                  Pass one trial id for the full per-trial tables, or several ids\n\
                  (comma or space separated) for a cross-trial comparison table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Fetch and render adverse-event tables for one or more trials.
    Query(QueryArgs),
}

#[derive(Parser)]
pub struct QueryArgs {
    /// Trial identifier(s), e.g. "NCT01234567" or "NCT1 NCT2,NCT3".
    #[arg(value_name = "TRIAL_IDS")]
    pub input: String,

    /// Registry base URL (point at a mirror or test server).
    #[arg(
        long = "registry-url",
        value_name = "URL",
        default_value = DEFAULT_REGISTRY_URL
    )]
    pub registry_url: String,

    /// Write CSV exports of every table into this directory.
    #[arg(long = "export-dir", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,
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

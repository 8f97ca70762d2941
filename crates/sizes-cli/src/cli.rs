//! CLI argument definitions for the size sorter.

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sizes",
    version,
    about = "Sort, rank, and normalize free-form apparel size labels",
    long_about = "Sort, rank, and normalize free-form apparel size labels.\n\n\
                  Raw merchant-feed strings (XS, 2XL, EU 42, Medium Large, 16W-18W)\n\
                  are classified against an ordered rule table and sorted into\n\
                  catalog order."
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

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sort size labels into catalog order.
    Sort(SortArgs),

    /// Print the ordering rank for a single size label.
    Index(SizeArg),

    /// Print the canonical label for a single size label.
    Normalize(SizeArg),

    /// Print classification records as JSON.
    Classify(ClassifyArgs),
}

#[derive(Parser)]
pub struct SortArgs {
    /// Size labels to sort; read from stdin (one per line) when omitted.
    #[arg(value_name = "SIZES")]
    pub sizes: Vec<String>,

    /// Print canonical labels instead of the original strings.
    #[arg(long = "normalized")]
    pub normalized: bool,

    /// Print a table of raw label, canonical label, rank, and magnitude.
    #[arg(long = "detail")]
    pub detail: bool,
}

#[derive(Parser)]
pub struct SizeArg {
    /// A single size label.
    #[arg(value_name = "SIZE")]
    pub size: String,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Size labels to classify; read from stdin (one per line) when omitted.
    #[arg(value_name = "SIZES")]
    pub sizes: Vec<String>,

    /// Pretty-print the JSON output.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

/// Log output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    /// Human-readable output with colors.
    Pretty,
    /// Compact single-line output.
    Compact,
    /// JSON for machine parsing.
    Json,
}

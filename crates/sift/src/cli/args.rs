//! Clap argument definitions for the `sift` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Filter, bucket and count tabular text records")]
pub struct Cli {
    /// Log verbosity (-v for info, -vv for debug); SIFT_LOG overrides
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output flags for commands that produce a table.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Write the result as CSV to this file instead of printing it
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Shared flags selecting a keyword filter.
///
/// With no flags at all, the `[keywords]` section of the configuration applies.
#[derive(Args, Debug, Clone, Default)]
pub struct KeywordArgs {
    /// Keyword to match (can be specified multiple times)
    #[arg(short = 'k', long = "keyword", conflicts_with = "query")]
    pub keywords: Vec<String>,

    /// Combinator joining multiple keywords: and, or
    #[arg(long, conflicts_with = "query")]
    pub logic: Option<String>,

    /// Keyword expression, e.g. 'love (cafe OR bakery) -mall'
    #[arg(short = 'q', long)]
    pub query: Option<String>,
}

/// Shared flags naming the timestamp column and its format.
#[derive(Args, Debug, Clone, Default)]
pub struct TimeArgs {
    /// Timestamp column [default: from config, "date"]
    #[arg(long)]
    pub time_column: Option<String>,

    /// strftime format of the timestamps [default: from config, "%y.%m.%d."]
    #[arg(long)]
    pub format: Option<String>,
}

/// Arguments for `sift filter`.
#[derive(Args, Debug, Clone)]
pub struct FilterCommand {
    /// Input CSV file
    pub input: PathBuf,

    /// Text column to match against [default: from config, "text"]
    #[arg(short = 'c', long)]
    pub column: Option<String>,

    #[command(flatten)]
    /// Keyword selection.
    pub keywords: KeywordArgs,

    /// Keep rows that do NOT satisfy the keywords
    #[arg(long)]
    pub exclude: bool,

    #[command(flatten)]
    /// Output flags.
    pub output: OutputArgs,
}

/// Arguments for `sift period`.
#[derive(Args, Debug, Clone)]
pub struct PeriodCommand {
    /// Input CSV file
    pub input: PathBuf,

    #[command(flatten)]
    /// Timestamp column and format.
    pub time: TimeArgs,

    /// Bucket width: d, w, m, y [default: from config, "m"]
    #[arg(short = 'p', long)]
    pub period: Option<String>,

    /// Drop buckets with no records
    #[arg(long)]
    pub drop_zero: bool,

    /// Latest bucket first
    #[arg(long)]
    pub descending: bool,

    #[command(flatten)]
    /// Output flags.
    pub output: OutputArgs,
}

/// Arguments for `sift category`.
#[derive(Args, Debug, Clone)]
pub struct CategoryCommand {
    /// Input CSV file
    pub input: PathBuf,

    /// Column to group by
    #[arg(short = 'c', long)]
    pub column: String,

    /// Order: ascending, descending, none [default: from config, "descending"]
    #[arg(short = 's', long)]
    pub sort: Option<String>,

    /// Add a percentage column
    #[arg(long)]
    pub percentage: bool,

    #[command(flatten)]
    /// Output flags.
    pub output: OutputArgs,
}

/// Arguments for `sift monthly`.
#[derive(Args, Debug, Clone)]
pub struct MonthlyCommand {
    /// Input CSV file
    pub input: PathBuf,

    /// Text column to match against [default: from config, "text"]
    #[arg(short = 'c', long)]
    pub column: Option<String>,

    #[command(flatten)]
    /// Timestamp column and format.
    pub time: TimeArgs,

    #[command(flatten)]
    /// Keyword selection.
    pub keywords: KeywordArgs,

    #[command(flatten)]
    /// Output flags.
    pub output: OutputArgs,
}

/// Arguments for `sift top`.
#[derive(Args, Debug, Clone)]
pub struct TopCommand {
    /// Input CSV file
    pub input: PathBuf,

    /// Columns to rank, one block per column
    #[arg(required = true)]
    pub columns: Vec<String>,

    /// Rows per block [default: from config, 10]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Add a percentage column to each block
    #[arg(long)]
    pub percentage: bool,

    #[command(flatten)]
    /// Output flags.
    pub output: OutputArgs,
}

/// Arguments for `sift entities`.
#[derive(Args, Debug, Clone)]
pub struct EntitiesCommand {
    /// Input CSV file
    pub input: PathBuf,

    /// Column selecting the rows to use [default: from config, "채널2"]
    #[arg(long)]
    pub filter_column: Option<String>,

    /// Value the filter column must equal [default: from config, "카페"]
    #[arg(long)]
    pub filter_value: Option<String>,

    /// Column holding the URLs [default: from config, "URL1"]
    #[arg(long)]
    pub url_column: Option<String>,

    /// Substring the URL domain must contain [default: from config, "cafe"]
    #[arg(long)]
    pub marker: Option<String>,

    #[command(flatten)]
    /// Output flags.
    pub output: OutputArgs,
}

/// Arguments for `sift normalize`.
#[derive(Args, Debug, Clone)]
pub struct NormalizeCommand {
    /// Input CSV file
    pub input: PathBuf,

    /// Text column to clean [default: from config, "text"]
    #[arg(short = 'c', long)]
    pub column: Option<String>,

    /// Loanword table to apply [default: from config]
    #[arg(long)]
    pub loanwords: Option<PathBuf>,

    /// Space out punctuation instead of stripping it
    #[arg(long)]
    pub keep_punctuation: bool,

    /// Copies kept of a repeated character [default: from config, 2]
    #[arg(long)]
    pub repeats: Option<usize>,

    #[command(flatten)]
    /// Output flags.
    pub output: OutputArgs,
}

/// Arguments for `sift init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.sift.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `sift` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Keep rows whose text satisfies a keyword filter
    #[command(after_help = "\
KEYWORD SELECTION:
  -k love -k cafe --logic and   Both keywords must appear
  -k love -k cafe --logic or    Either keyword
  -q 'love (cafe OR bakery)'    Expression: implicit AND, OR, -negation, \"phrases\"

With --exclude every keyword test is negated before combining, so
'-k a -k b --logic and --exclude' keeps rows containing neither keyword.")]
    Filter(FilterCommand),

    /// Count records per day, week, month or year
    Period(PeriodCommand),

    /// Count records per distinct value of a column
    Category(CategoryCommand),

    /// Count keyword-matching records per month
    Monthly(MonthlyCommand),

    /// Side-by-side top-N values of several columns
    Top(TopCommand),

    /// Count records per URL-derived entity
    Entities(EntitiesCommand),

    /// Clean up a text column
    Normalize(NormalizeCommand),

    /// Initialize sift configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}

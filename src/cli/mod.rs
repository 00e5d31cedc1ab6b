//! CLI argument parsing for ux4ai
//!
//! Global flags: --root, --config, --data-dir, --reference-dir, --format,
//! --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CompareArgs, ShowArgs, StudentsArgs, SubmitArgs};
pub use ux4ai_core::format::OutputFormat;
use parse::parse_format;

/// ux4ai - aggregate and compare workshop ratings of AI products
#[derive(Parser, Debug)]
#[command(name = "ux4ai")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for the config file and relative paths
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit config file (default: ux4ai.toml under the root)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Root of the submission tree
    #[arg(long, global = true, env = "UX4AI_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory holding reference records
    #[arg(long, global = true, env = "UX4AI_REFERENCE_DIR")]
    pub reference_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug events and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace, or directives)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit log events as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Aggregate every product in the submission tree
    Products,

    /// Show one product's aggregate
    Show(ShowArgs),

    /// Compare two products side by side
    Compare(CompareArgs),

    /// Per-student comparison against the reference answers
    Students(StudentsArgs),

    /// Class-wide summary against the reference answers
    Summary,

    /// Record a new rating
    Submit(SubmitArgs),

    /// List accepted records and problems found while scanning
    Scan,
}

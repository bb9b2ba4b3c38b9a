//! Command-line interface definitions.
//!
//! The two positional arguments are taken as raw strings so that blank and
//! malformed values reach [`InputValidator`](super::validate::InputValidator)
//! and get its messages rather than clap's.

use std::path::PathBuf;

use clap::Parser;

use crate::infrastructure::config::logging::LogLevel;
use crate::infrastructure::config::settings::OutputFormat;

/// Find the highest view points of a height-annotated mesh
#[derive(Parser, Debug)]
#[command(name = "viewfinder")]
#[command(version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Path to the mesh JSON file
    #[arg(value_name = "MESH_FILE")]
    pub mesh_file: String,

    /// Maximum number of view points to report
    #[arg(value_name = "NUMBER_OF_VIEW_POINTS")]
    pub number_of_view_points: String,

    /// Path to configuration file [default: viewfinder.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format for the view points
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Color output mode [auto, always, never]
    #[arg(long, default_value = "auto", hide_possible_values = true)]
    pub color: ColorChoice,

    /// Decrease output verbosity
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Override log level
    #[arg(long, ignore_case = true)]
    pub log_level: Option<LogLevel>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

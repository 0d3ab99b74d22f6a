//! CLI argument parsing for copresence

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for presence results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "copresence")]
#[command(version)]
#[command(about = "Total time two participants were present together inside a lesson", long_about = None)]
pub struct Cli {
    /// JSON document with lesson/pupil/tutor timestamps, or an array of them (reads stdin if omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Show normalized spans and per-participant presence in text output
    #[arg(short = 'd', long = "details")]
    pub details: bool,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{RootsArgs, SolveArgs};

/// IRR - internal rate of return from spending and income cash flows
#[derive(Parser)]
#[command(name = "irr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Log root-finding details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate the IRR of a spending/income series
    Solve(SolveArgs),

    /// List the roots of a polynomial
    Roots(RootsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

//! IRR CLI - Command-line interface for cash-flow IRR.
//!
//! # Usage
//!
//! ```bash
//! # IRR of spending 100 now and receiving 110 next period
//! irr solve --spending 100,0 --income 0,110
//!
//! # Same, as JSON
//! irr --format json solve --spending 100,0 --income 0,110
//!
//! # Roots of 2 - 3x + x^2 (ascending coefficients)
//! irr roots 2,-3,1
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("debug"))
            .with_writer(std::io::stderr)
            .init();
    }

    let format = cli.format;

    match cli.command {
        Commands::Solve(args) => commands::solve::execute(args, format)?,
        Commands::Roots(args) => commands::roots::execute(args, format)?,
    }

    Ok(())
}

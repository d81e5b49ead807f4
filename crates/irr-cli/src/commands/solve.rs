//! Solve command implementation.
//!
//! Calculates the IRR of a spending/income series.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use irr_analytics::{IrrOutcome, IrrSolver};

use crate::cli::OutputFormat;
use crate::commands::root_finder_config;
use crate::error::CliError;
use crate::output::{format_list, format_percent, print_header, print_output, print_warning, KeyValue};

/// Arguments for the solve command.
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Spending per period, comma separated (e.g. 100,0,0)
    #[arg(short, long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    pub spending: Vec<f64>,

    /// Income per period, comma separated (e.g. 0,60,60)
    #[arg(short, long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    pub income: Vec<f64>,

    /// Largest imaginary part still treated as a real root (0 for an exact test)
    #[arg(short, long)]
    pub tolerance: Option<f64>,
}

/// Solve result for JSON output.
#[derive(Debug, Serialize)]
pub struct SolveResult {
    pub status: i32,
    pub irr: Option<f64>,
    pub discount_factor: Option<f64>,
    pub real_roots: Vec<f64>,
    pub candidates: Vec<f64>,
}

impl From<&IrrOutcome> for SolveResult {
    fn from(outcome: &IrrOutcome) -> Self {
        Self {
            status: outcome.status(),
            irr: outcome.is_valid().then_some(outcome.irr),
            discount_factor: outcome.discount_factor,
            real_roots: outcome.real_roots.clone(),
            candidates: outcome.candidates.clone(),
        }
    }
}

/// Execute the solve command.
pub fn execute(args: SolveArgs, format: OutputFormat) -> Result<()> {
    let config = root_finder_config(args.tolerance)?;
    let outcome = IrrSolver::new()
        .with_config(config)
        .solve_flows(args.spending, args.income)
        .map_err(CliError::from)?;

    if outcome.is_ambiguous() {
        print_warning(&format!(
            "{} discount factors in [0, 1); the first one was used",
            outcome.candidates.len()
        ));
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&SolveResult::from(&outcome))?);
        }
        OutputFormat::Minimal => {
            println!("{}", if outcome.is_valid() { outcome.irr.to_string() } else { "NaN".to_string() });
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("IRR", format_percent(outcome.irr)),
                KeyValue::new(
                    "Discount factor",
                    outcome
                        .discount_factor
                        .map_or_else(|| "-".to_string(), |v| format!("{:.10}", v)),
                ),
                KeyValue::new("Real roots", format_list(&outcome.real_roots)),
                KeyValue::new("Candidates", format_list(&outcome.candidates)),
                KeyValue::new("Status", outcome.status().to_string()),
            ];
            if format == OutputFormat::Table {
                print_header("Internal Rate of Return");
            }
            print_output(&rows, format)?;
        }
    }

    Ok(())
}

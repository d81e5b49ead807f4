//! Roots command implementation.
//!
//! Lists every root of a polynomial given in ascending coefficient order.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use irr_math::polynomial::Polynomial;
use irr_math::solvers::find_roots;

use crate::cli::OutputFormat;
use crate::commands::root_finder_config;
use crate::error::CliError;
use crate::output::print_output;

/// Arguments for the roots command.
#[derive(Args, Debug)]
pub struct RootsArgs {
    /// Coefficients c0,c1,...,cn of c0 + c1 x + ... + cn x^n
    #[arg(value_delimiter = ',', required = true, allow_hyphen_values = true)]
    pub coefficients: Vec<f64>,

    /// Only list roots classified as real
    #[arg(short, long)]
    pub real_only: bool,

    /// Largest imaginary part still treated as a real root (0 for an exact test)
    #[arg(short, long)]
    pub tolerance: Option<f64>,
}

/// One polynomial root.
#[derive(Debug, Serialize, Tabled)]
pub struct RootRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Real")]
    pub real: f64,
    #[tabled(rename = "Imaginary")]
    pub imaginary: f64,
    #[tabled(rename = "Kind")]
    pub kind: &'static str,
}

/// Execute the roots command.
pub fn execute(args: RootsArgs, format: OutputFormat) -> Result<()> {
    let config = root_finder_config(args.tolerance)?;
    let polynomial = Polynomial::new(args.coefficients).map_err(CliError::from)?;
    let roots = find_roots(&polynomial, &config).map_err(CliError::from)?;

    let rows: Vec<RootRow> = roots
        .iter()
        .enumerate()
        .map(|(index, root)| RootRow {
            index,
            real: root.re,
            imaginary: root.im,
            kind: if config.is_real(root) { "real" } else { "complex" },
        })
        .filter(|row| !args.real_only || row.kind == "real")
        .collect();

    if format == OutputFormat::Minimal {
        let real: Vec<String> = rows
            .iter()
            .filter(|row| row.kind == "real")
            .map(|row| row.real.to_string())
            .collect();
        println!("{}", real.join(","));
        return Ok(());
    }

    print_output(&rows, format)
}

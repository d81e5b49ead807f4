//! CLI command implementations.

pub mod roots;
pub mod solve;

pub use roots::RootsArgs;
pub use solve::SolveArgs;

use irr_math::solvers::RootFinderConfig;

use crate::error::{CliError, CliResult};

/// Builds a root finder configuration from an optional tolerance override.
pub fn root_finder_config(tolerance: Option<f64>) -> CliResult<RootFinderConfig> {
    match tolerance {
        None => Ok(RootFinderConfig::default()),
        Some(t) if t.is_finite() && t >= 0.0 => {
            Ok(RootFinderConfig::default().with_imaginary_tolerance(t))
        }
        Some(t) => Err(CliError::InvalidTolerance(t)),
    }
}

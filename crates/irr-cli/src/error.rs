//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid imaginary-part tolerance.
    #[error("Invalid tolerance: {0}. Must be a non-negative number.")]
    InvalidTolerance(f64),

    /// Calculation error.
    #[error("Calculation error: {0}")]
    Calculation(String),
}

impl From<irr_analytics::AnalyticsError> for CliError {
    fn from(err: irr_analytics::AnalyticsError) -> Self {
        CliError::Calculation(err.to_string())
    }
}

impl From<irr_math::MathError> for CliError {
    fn from(err: irr_math::MathError) -> Self {
        CliError::Calculation(err.to_string())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

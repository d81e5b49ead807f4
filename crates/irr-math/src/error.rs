//! Error types for polynomial root finding.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while finding polynomial roots.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Coefficient count does not match the requested degree.
    #[error("Shape mismatch: degree {degree} needs {expected} coefficients, got {actual}")]
    ShapeMismatch {
        /// Requested polynomial degree.
        degree: usize,
        /// Expected number of coefficients (`degree + 1`).
        expected: usize,
        /// Number of coefficients supplied.
        actual: usize,
    },

    /// The eigenvalue decomposition of the companion matrix did not converge.
    #[error("Eigenvalue decomposition failed for {size}x{size} companion matrix after {max_iterations} iterations")]
    DecompositionFailed {
        /// Dimension of the companion matrix.
        size: usize,
        /// Iteration budget that was exhausted.
        max_iterations: usize,
    },

    /// The highest-order coefficient is zero, so the polynomial is not of the stated degree.
    #[error("Leading coefficient of degree {degree} polynomial is zero")]
    ZeroLeadingCoefficient {
        /// Stated polynomial degree.
        degree: usize,
    },

    /// A coefficient is NaN or infinite.
    #[error("Coefficient at index {index} is not finite: {value}")]
    NonFiniteCoefficient {
        /// Position of the offending coefficient.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a shape mismatch error for a degree/coefficient-count pair.
    #[must_use]
    pub fn shape_mismatch(degree: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            degree,
            expected: degree + 1,
            actual,
        }
    }

    /// Creates a decomposition failure error.
    #[must_use]
    pub fn decomposition_failed(size: usize, max_iterations: usize) -> Self {
        Self::DecompositionFailed {
            size,
            max_iterations,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

//! Error types for IRR analytics.

use irr_math::MathError;
use thiserror::Error;

/// Error type for cash-flow validation and IRR solving.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// Spending and income series have different lengths.
    #[error("Number of income and outcome is not equal.")]
    LengthMismatch {
        /// Number of spending periods.
        spending: usize,
        /// Number of income periods.
        income: usize,
    },

    /// Too few periods to form a polynomial of degree one or more.
    #[error("Number of income and outcome is less than {required}.")]
    InsufficientPeriods {
        /// Minimum number of periods.
        required: usize,
        /// Number of periods supplied.
        actual: usize,
    },

    /// Root finding failed.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl AnalyticsError {
    /// Returns true if the error stems from invalid caller input rather than a
    /// numerical failure.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        match self {
            AnalyticsError::LengthMismatch { .. } | AnalyticsError::InsufficientPeriods { .. } => {
                true
            }
            AnalyticsError::Math(MathError::ShapeMismatch { .. })
            | AnalyticsError::Math(MathError::NonFiniteCoefficient { .. })
            | AnalyticsError::Math(MathError::InvalidInput { .. }) => true,
            AnalyticsError::Math(_) => false,
        }
    }
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = AnalyticsError::LengthMismatch {
            spending: 2,
            income: 3,
        };
        assert_eq!(err.to_string(), "Number of income and outcome is not equal.");

        let err = AnalyticsError::InsufficientPeriods {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Number of income and outcome is less than 2."
        );
    }

    #[test]
    fn test_math_error_is_transparent() {
        let err: AnalyticsError = MathError::decomposition_failed(3, 10).into();
        assert_eq!(err.to_string(), MathError::decomposition_failed(3, 10).to_string());
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_input_classification() {
        assert!(AnalyticsError::LengthMismatch {
            spending: 1,
            income: 2
        }
        .is_input_error());
        assert!(AnalyticsError::from(MathError::shape_mismatch(2, 1)).is_input_error());
        assert!(!AnalyticsError::from(MathError::ZeroLeadingCoefficient { degree: 2 })
            .is_input_error());
    }
}

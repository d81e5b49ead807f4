//! End-to-end IRR solving for a cash-flow series.
//!
//! Net flows become polynomial coefficients, the companion-matrix root
//! finder supplies the real roots, and the first root in `[0, 1)` is
//! converted to a rate.

use serde::Serialize;

use irr_math::solvers::{find_real_roots, RootFinderConfig};

use crate::cashflows::CashFlowSeries;
use crate::error::AnalyticsResult;
use crate::yields::{candidate_discount_factors, irr_from_discount_factor, select_discount_factor};

/// Response status for a valid IRR.
pub const STATUS_OK: i32 = 0;

/// Response status for a NaN IRR or a failed computation.
pub const STATUS_FAILED: i32 = 1;

/// Result of solving a cash-flow series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IrrOutcome {
    /// IRR in percent, NaN when no valid discount factor exists.
    pub irr: f64,
    /// The selected discount factor, if any root fell in `[0, 1)`.
    pub discount_factor: Option<f64>,
    /// Real roots in root-finder order.
    pub real_roots: Vec<f64>,
    /// Every real root in `[0, 1)`, in root-finder order.
    pub candidates: Vec<f64>,
}

impl IrrOutcome {
    /// Builds an outcome from the real roots of the NPV polynomial.
    #[must_use]
    pub fn from_real_roots(real_roots: Vec<f64>) -> Self {
        let discount_factor = select_discount_factor(&real_roots);
        let irr = irr_from_discount_factor(discount_factor.unwrap_or(0.0));
        let candidates = candidate_discount_factors(&real_roots);

        Self {
            irr,
            discount_factor,
            real_roots,
            candidates,
        }
    }

    /// True if the IRR is a number.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.irr.is_nan()
    }

    /// True if more than one root qualified; only the first was used.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.candidates.len() > 1
    }

    /// Envelope status code: [`STATUS_OK`] or [`STATUS_FAILED`].
    #[must_use]
    pub fn status(&self) -> i32 {
        if self.is_valid() {
            STATUS_OK
        } else {
            STATUS_FAILED
        }
    }
}

/// IRR solver with a fixed root finder configuration.
///
/// Stateless apart from its configuration; share it freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct IrrSolver {
    config: RootFinderConfig,
}

impl IrrSolver {
    /// Creates a solver with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root finder configuration.
    #[must_use]
    pub fn with_config(mut self, config: RootFinderConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the root finder configuration.
    #[must_use]
    pub fn config(&self) -> &RootFinderConfig {
        &self.config
    }

    /// Solves a validated cash-flow series.
    ///
    /// A NaN IRR is a successful outcome; only root-finding failures are errors.
    pub fn solve(&self, series: &CashFlowSeries) -> AnalyticsResult<IrrOutcome> {
        let net = series.net_flows();
        let real_roots = find_real_roots(series.degree(), &net, &self.config)?;
        let outcome = IrrOutcome::from_real_roots(real_roots);

        log::debug!(
            "{} periods: {} real roots, {} candidates, irr {}",
            series.len(),
            outcome.real_roots.len(),
            outcome.candidates.len(),
            outcome.irr
        );

        Ok(outcome)
    }

    /// Validates and solves raw spending/income sequences.
    pub fn solve_flows(&self, spending: Vec<f64>, income: Vec<f64>) -> AnalyticsResult<IrrOutcome> {
        let series = CashFlowSeries::new(spending, income)?;
        self.solve(&series)
    }
}

/// Solves spending/income sequences with the default configuration.
pub fn solve_irr(spending: Vec<f64>, income: Vec<f64>) -> AnalyticsResult<IrrOutcome> {
    IrrSolver::new().solve_flows(spending, income)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyticsError;
    use approx::assert_relative_eq;
    use irr_math::MathError;

    #[test]
    fn test_ten_percent_reference() {
        let outcome = solve_irr(vec![100.0, 0.0], vec![0.0, 110.0]).unwrap();

        assert!(outcome.is_valid());
        assert_eq!(outcome.status(), STATUS_OK);
        assert_relative_eq!(outcome.irr, 10.0, epsilon = 1e-9);
        assert_relative_eq!(outcome.discount_factor.unwrap(), 100.0 / 110.0, epsilon = 1e-12);
        assert!(!outcome.is_ambiguous());
    }

    #[test]
    fn test_no_valid_root_is_nan_not_error() {
        // -100 + 90v: v = 1.11, outside [0, 1)
        let outcome = solve_irr(vec![100.0, 0.0], vec![0.0, 90.0]).unwrap();

        assert!(!outcome.is_valid());
        assert_eq!(outcome.status(), STATUS_FAILED);
        assert_eq!(outcome.discount_factor, None);
        assert_eq!(outcome.real_roots.len(), 1);
    }

    #[test]
    fn test_validation_errors_propagate() {
        assert!(matches!(
            solve_irr(vec![1.0, 2.0], vec![1.0]),
            Err(AnalyticsError::LengthMismatch { .. })
        ));
        assert!(matches!(
            solve_irr(vec![1.0], vec![1.0]),
            Err(AnalyticsError::InsufficientPeriods { .. })
        ));
    }

    #[test]
    fn test_zero_final_flow() {
        // Last period nets to zero: the polynomial loses its leading term.
        let err = solve_irr(vec![100.0, 50.0], vec![0.0, 50.0]).unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::Math(MathError::ZeroLeadingCoefficient { degree: 1 })
        );
    }

    #[test]
    fn test_outcome_from_roots() {
        let outcome = IrrOutcome::from_real_roots(vec![1.2, 0.25, 0.5]);

        assert_relative_eq!(outcome.irr, 300.0);
        assert_eq!(outcome.discount_factor, Some(0.25));
        assert_eq!(outcome.candidates, vec![0.25, 0.5]);
        assert!(outcome.is_ambiguous());
    }

    #[test]
    fn test_exact_config_still_solves_linear() {
        let solver = IrrSolver::new().with_config(RootFinderConfig::exact());
        let outcome = solver
            .solve_flows(vec![100.0, 0.0], vec![0.0, 110.0])
            .unwrap();

        assert_relative_eq!(outcome.irr, 10.0, epsilon = 1e-9);
        assert_eq!(solver.config().imaginary_tolerance, 0.0);
    }
}

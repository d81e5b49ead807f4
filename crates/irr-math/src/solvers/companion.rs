//! Companion-matrix root finder.

use nalgebra::Complex;

use super::{PolynomialRootFinder, RootFinderConfig};
use crate::error::{MathError, MathResult};
use crate::linear_algebra::{companion_matrix, eigenvalues};
use crate::polynomial::Polynomial;

/// Finds every root of a polynomial via companion matrix eigendecomposition.
///
/// Roots are returned in the order the Schur decomposition produces them;
/// no sorting is applied. A constant polynomial has no roots.
///
/// # Errors
///
/// - [`MathError::NonFiniteCoefficient`] if any coefficient is NaN or infinite
/// - [`MathError::ZeroLeadingCoefficient`] if the top coefficient is zero
/// - [`MathError::DecompositionFailed`] if the Schur iteration does not converge
pub fn find_roots(
    polynomial: &Polynomial,
    config: &RootFinderConfig,
) -> MathResult<Vec<Complex<f64>>> {
    polynomial.validate()?;

    if polynomial.degree() == 0 {
        return Ok(vec![]);
    }

    let companion = companion_matrix(polynomial);
    let roots = eigenvalues(companion, config.convergence_eps, config.max_iterations)?;

    log::trace!(
        "degree {} polynomial: {} roots from companion matrix",
        polynomial.degree(),
        roots.len()
    );

    Ok(roots)
}

/// Keeps the real parts of the roots classified as real, preserving order.
#[must_use]
pub fn real_roots(roots: &[Complex<f64>], config: &RootFinderConfig) -> Vec<f64> {
    roots
        .iter()
        .filter(|root| config.is_real(root))
        .map(|root| root.re)
        .collect()
}

/// Finds the real roots of `c₀ + c₁x + ... + c_degree x^degree`.
///
/// # Arguments
///
/// * `degree` - Polynomial degree
/// * `coefficients` - `degree + 1` coefficients in ascending power order
/// * `config` - Root finder configuration
///
/// # Errors
///
/// [`MathError::ShapeMismatch`] if `coefficients.len() != degree + 1`, plus
/// everything [`find_roots`] can return.
pub fn find_real_roots(
    degree: usize,
    coefficients: &[f64],
    config: &RootFinderConfig,
) -> MathResult<Vec<f64>> {
    if coefficients.len() != degree + 1 {
        return Err(MathError::shape_mismatch(degree, coefficients.len()));
    }

    let polynomial = Polynomial::new(coefficients.to_vec())?;
    let roots = find_roots(&polynomial, config)?;
    let real = real_roots(&roots, config);

    log::debug!(
        "degree {}: {} of {} roots classified real (tolerance {:e})",
        degree,
        real.len(),
        roots.len(),
        config.imaginary_tolerance
    );

    Ok(real)
}

/// Companion-matrix root finder with a fixed configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompanionMatrixSolver {
    config: RootFinderConfig,
}

impl CompanionMatrixSolver {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: RootFinderConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &RootFinderConfig {
        &self.config
    }
}

impl PolynomialRootFinder for CompanionMatrixSolver {
    fn roots(&self, polynomial: &Polynomial) -> MathResult<Vec<Complex<f64>>> {
        find_roots(polynomial, &self.config)
    }

    fn real_roots(&self, polynomial: &Polynomial) -> MathResult<Vec<f64>> {
        find_real_roots(polynomial.degree(), polynomial.coefficients(), &self.config)
    }

    fn name(&self) -> &'static str {
        "Companion matrix"
    }
}

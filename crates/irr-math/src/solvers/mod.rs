//! Polynomial root finding.
//!
//! Roots are found by reducing the problem to an eigenvalue problem:
//! the eigenvalues of a polynomial's companion matrix are exactly its
//! roots. The eigenvalues come from a dense real Schur decomposition,
//! so the cost grows with the cube of the degree.
//!
//! - [`find_roots`]: every root, complex, counted with multiplicity
//! - [`find_real_roots`]: real parts of the roots classified as real
//!
//! # Real/complex classification
//!
//! A root is real when `|im| <= imaginary_tolerance`. The Schur form
//! reports eigenvalues from 1×1 diagonal blocks with an imaginary part
//! of exactly zero, so a tolerance of `0.0` gives the strict test.
//! The default tolerance also admits roots that come out of a 2×2 block
//! with negligible imaginary noise.
//!
//! # Example
//!
//! ```rust
//! use irr_math::solvers::{find_real_roots, RootFinderConfig};
//!
//! // 2 - 3x + x^2 = (x - 1)(x - 2)
//! let mut roots = find_real_roots(2, &[2.0, -3.0, 1.0], &RootFinderConfig::default()).unwrap();
//! roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
//! assert!((roots[0] - 1.0).abs() < 1e-10);
//! assert!((roots[1] - 2.0).abs() < 1e-10);
//! ```

mod companion;

pub use companion::{find_real_roots, find_roots, real_roots, CompanionMatrixSolver};

use nalgebra::Complex;
use serde::{Deserialize, Serialize};

use crate::error::MathResult;
use crate::polynomial::Polynomial;

/// Default magnitude below which an imaginary part counts as zero.
pub const DEFAULT_IMAGINARY_TOLERANCE: f64 = 1e-10;

/// Default QR sweep budget for the Schur decomposition.
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// Default deflation threshold for the Schur decomposition.
pub const DEFAULT_CONVERGENCE_EPS: f64 = f64::EPSILON;

/// Configuration for companion-matrix root finding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootFinderConfig {
    /// Largest `|im|` still classified as a real root.
    pub imaginary_tolerance: f64,
    /// Maximum number of QR sweeps before the decomposition is abandoned.
    pub max_iterations: usize,
    /// Subdiagonal deflation threshold.
    pub convergence_eps: f64,
}

impl Default for RootFinderConfig {
    fn default() -> Self {
        Self {
            imaginary_tolerance: DEFAULT_IMAGINARY_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            convergence_eps: DEFAULT_CONVERGENCE_EPS,
        }
    }
}

impl RootFinderConfig {
    /// Creates a new root finder configuration.
    #[must_use]
    pub fn new(imaginary_tolerance: f64, max_iterations: usize) -> Self {
        Self {
            imaginary_tolerance,
            max_iterations,
            convergence_eps: DEFAULT_CONVERGENCE_EPS,
        }
    }

    /// Configuration that only accepts an imaginary part of exactly zero.
    #[must_use]
    pub fn exact() -> Self {
        Self::default().with_imaginary_tolerance(0.0)
    }

    /// Sets the imaginary-part tolerance.
    #[must_use]
    pub fn with_imaginary_tolerance(mut self, tolerance: f64) -> Self {
        self.imaginary_tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the convergence threshold.
    #[must_use]
    pub fn with_convergence_eps(mut self, eps: f64) -> Self {
        self.convergence_eps = eps;
        self
    }

    /// Returns true if `root` is classified as real under this configuration.
    #[must_use]
    pub fn is_real(&self, root: &Complex<f64>) -> bool {
        root.im.abs() <= self.imaginary_tolerance
    }
}

/// Trait for polynomial root finders.
///
/// Implementations return every root of the polynomial, counted with
/// multiplicity, in an order of their choosing.
pub trait PolynomialRootFinder: Send + Sync {
    /// Finds all roots of the given polynomial.
    fn roots(&self, polynomial: &Polynomial) -> MathResult<Vec<Complex<f64>>>;

    /// Finds the real roots, in the order [`roots`](Self::roots) returns them.
    fn real_roots(&self, polynomial: &Polynomial) -> MathResult<Vec<f64>>;

    /// Returns the name of the root finder.
    fn name(&self) -> &'static str;
}

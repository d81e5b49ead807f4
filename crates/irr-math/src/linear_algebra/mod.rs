//! Linear algebra utilities.
//!
//! Companion-matrix construction and dense eigenvalue computation,
//! the two halves of polynomial root finding.

use nalgebra::linalg::Schur;
use nalgebra::{Complex, DMatrix, DVector};

use crate::error::{MathError, MathResult};
use crate::polynomial::Polynomial;

/// Builds the companion matrix of a polynomial.
///
/// For `p(x) = c₀ + c₁x + ... + cₙxⁿ` the matrix is `n × n`:
///
/// ```text
/// C = [ 0   0   ...  0  -c₀/cₙ    ]
///     [ 1   0   ...  0  -c₁/cₙ    ]
///     [ 0   1   ...  0  -c₂/cₙ    ]
///     [ .   .   ...  .   .        ]
///     [ 0   0   ...  1  -cₙ₋₁/cₙ  ]
/// ```
///
/// Its eigenvalues are exactly the roots of `p`. The caller must ensure
/// the leading coefficient is non-zero (see [`Polynomial::validate`]).
#[must_use]
pub fn companion_matrix(polynomial: &Polynomial) -> DMatrix<f64> {
    let coeffs = polynomial.coefficients();
    let n = polynomial.degree();
    let leading = coeffs[n];

    let mut companion = DMatrix::zeros(n, n);
    for i in 1..n {
        companion[(i, i - 1)] = 1.0;
    }
    for i in 0..n {
        companion[(i, n - 1)] = -coeffs[i] / leading;
    }

    companion
}

/// Number of reflected restarts tried after the plain decomposition stalls.
const SCHUR_RESTARTS: usize = 3;

/// Sweep budget per row for the plain attempt, as in LAPACK's `dlahqr`.
const SWEEPS_PER_ROW: usize = 30;

/// Computes all eigenvalues of a square matrix through its real Schur form.
///
/// Eigenvalues come back in the order they appear on the quasi-triangular
/// diagonal. Real eigenvalues from 1×1 blocks carry an imaginary part of
/// exactly zero.
///
/// The double-shift QR sweep takes its shifts from the trailing 2×2 block,
/// so it cycles on matrices such as the companion matrix of `xⁿ - 1`, where
/// that block is nilpotent. The plain attempt gets at most 30 sweeps per
/// row. When that runs out the decomposition is restarted, with the full
/// `max_iterations` budget, on `QᵀAQ` for a fixed Householder reflector `Q`. The
/// spectrum is unchanged but the Hessenberg form starts from a different
/// first column. The order is then that of the restarted decomposition.
///
/// # Arguments
///
/// * `matrix` - Square matrix
/// * `eps` - Convergence threshold for subdiagonal deflation
/// * `max_iterations` - QR sweep budget per attempt (`0` means unbounded)
pub fn eigenvalues(
    matrix: DMatrix<f64>,
    eps: f64,
    max_iterations: usize,
) -> MathResult<Vec<Complex<f64>>> {
    let n = matrix.nrows();
    if n != matrix.ncols() {
        return Err(MathError::invalid_input(
            "Matrix must be square for eigenvalue decomposition",
        ));
    }

    if n == 0 {
        return Ok(vec![]);
    }

    let plain_budget = match max_iterations {
        0 => SWEEPS_PER_ROW * n,
        budget => budget.min(SWEEPS_PER_ROW * n),
    };
    if let Some(schur) = Schur::try_new(matrix.clone(), eps, plain_budget) {
        return Ok(schur.complex_eigenvalues().iter().copied().collect());
    }

    for restart in 0..SCHUR_RESTARTS {
        log::debug!(
            "Schur iteration stalled on {}x{} matrix, restart {} from reflected basis",
            n,
            n,
            restart + 1
        );

        let reflector = householder_reflector(n, restart);
        let similar = &reflector * &matrix * &reflector;
        if let Some(schur) = Schur::try_new(similar, eps, max_iterations) {
            return Ok(schur.complex_eigenvalues().iter().copied().collect());
        }
    }

    Err(MathError::decomposition_failed(n, max_iterations))
}

/// Symmetric orthogonal reflector `I - 2vvᵀ/(vᵀv)` with a fixed, non-uniform `v`.
///
/// `v` must not be an eigenvector of a cyclic permutation, so a constant
/// vector is avoided.
fn householder_reflector(n: usize, restart: usize) -> DMatrix<f64> {
    let v = DVector::from_fn(n, |i, _| {
        let sign = if (i * (restart + 1)) % 2 == 0 { 1.0 } else { -1.0 };
        sign / (i + restart + 1) as f64
    });
    let scale = 2.0 / v.norm_squared();

    DMatrix::identity(n, n) - (&v * v.transpose()) * scale
}

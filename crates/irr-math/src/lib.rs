//! # IRR Math
//!
//! Numerical core of the IRR solver.
//!
//! This crate provides:
//!
//! - **Polynomials**: Dense real polynomials with Horner evaluation
//! - **Linear Algebra**: Companion matrices and Schur-based eigenvalues
//! - **Solvers**: Polynomial root finding with real/complex classification
//!
//! ## Design Philosophy
//!
//! - **Pure**: No shared state; every call owns its matrices
//! - **Explicit failures**: Shape and convergence problems are returned, never panicked on
//! - **Solver order**: Roots keep the order the decomposition produces

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]

pub mod error;
pub mod linear_algebra;
pub mod polynomial;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::linear_algebra::{companion_matrix, eigenvalues};
    pub use crate::polynomial::Polynomial;
    pub use crate::solvers::{
        find_real_roots, find_roots, real_roots, CompanionMatrixSolver, PolynomialRootFinder,
        RootFinderConfig,
    };
}

pub use error::{MathError, MathResult};
pub use polynomial::Polynomial;
pub use solvers::{find_real_roots, find_roots, RootFinderConfig};

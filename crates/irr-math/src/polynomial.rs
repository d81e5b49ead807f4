//! Dense real polynomials in ascending power order.
//!
//! `coefficients[i]` is the coefficient of `x^i`, so
//! `p(x) = c₀ + c₁x + c₂x² + ... + cₙxⁿ`.

use crate::error::{MathError, MathResult};

/// A real polynomial stored by ascending power.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from ascending-order coefficients.
    ///
    /// At least one coefficient is required.
    pub fn new(coefficients: Vec<f64>) -> MathResult<Self> {
        if coefficients.is_empty() {
            return Err(MathError::invalid_input(
                "Polynomial needs at least one coefficient",
            ));
        }
        Ok(Self { coefficients })
    }

    /// Creates a polynomial of the stated degree, checking the coefficient count.
    pub fn with_degree(degree: usize, coefficients: Vec<f64>) -> MathResult<Self> {
        if coefficients.len() != degree + 1 {
            return Err(MathError::shape_mismatch(degree, coefficients.len()));
        }
        Self::new(coefficients)
    }

    /// Nominal degree (number of coefficients minus one).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Coefficients in ascending power order.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Coefficient of the highest power.
    #[must_use]
    pub fn leading_coefficient(&self) -> f64 {
        self.coefficients[self.coefficients.len() - 1]
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc.mul_add(x, c))
    }

    /// Checks every coefficient is finite and the leading one is non-zero.
    pub fn validate(&self) -> MathResult<()> {
        if let Some((index, &value)) = self
            .coefficients
            .iter()
            .enumerate()
            .find(|(_, c)| !c.is_finite())
        {
            return Err(MathError::NonFiniteCoefficient { index, value });
        }

        if self.degree() > 0 && self.leading_coefficient() == 0.0 {
            return Err(MathError::ZeroLeadingCoefficient {
                degree: self.degree(),
            });
        }

        Ok(())
    }
}

//! Spending/income cash-flow series.
//!
//! A [`CashFlowSeries`] pairs what goes out with what comes in for each
//! period. Its net flows, `income[i] - spending[i]`, are the coefficients
//! of the IRR polynomial in ascending power order.

use serde::Serialize;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Minimum number of periods for an IRR to exist.
pub const MIN_PERIODS: usize = 2;

/// Per-period spending and income of equal length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowSeries {
    spending: Vec<f64>,
    income: Vec<f64>,
}

impl CashFlowSeries {
    /// Creates a validated series.
    ///
    /// # Errors
    ///
    /// - [`AnalyticsError::LengthMismatch`] if the sequences differ in length
    /// - [`AnalyticsError::InsufficientPeriods`] if there are fewer than two periods
    pub fn new(spending: Vec<f64>, income: Vec<f64>) -> AnalyticsResult<Self> {
        if spending.len() != income.len() {
            return Err(AnalyticsError::LengthMismatch {
                spending: spending.len(),
                income: income.len(),
            });
        }

        if spending.len() < MIN_PERIODS {
            return Err(AnalyticsError::InsufficientPeriods {
                required: MIN_PERIODS,
                actual: spending.len(),
            });
        }

        Ok(Self { spending, income })
    }

    /// Creates a series from net flows, booking negatives as spending and
    /// positives as income.
    pub fn from_net_flows(net: &[f64]) -> AnalyticsResult<Self> {
        let spending = net.iter().map(|&v| if v < 0.0 { -v } else { 0.0 }).collect();
        let income = net.iter().map(|&v| if v > 0.0 { v } else { 0.0 }).collect();
        Self::new(spending, income)
    }

    /// Number of periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spending.len()
    }

    /// Always false: a validated series has at least two periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spending.is_empty()
    }

    /// Degree of the IRR polynomial (`len - 1`).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.len() - 1
    }

    /// Spending per period.
    #[must_use]
    pub fn spending(&self) -> &[f64] {
        &self.spending
    }

    /// Income per period.
    #[must_use]
    pub fn income(&self) -> &[f64] {
        &self.income
    }

    /// Net flow per period, `income[i] - spending[i]`.
    #[must_use]
    pub fn net_flows(&self) -> Vec<f64> {
        self.income
            .iter()
            .zip(&self.spending)
            .map(|(inc, spend)| inc - spend)
            .collect()
    }
}

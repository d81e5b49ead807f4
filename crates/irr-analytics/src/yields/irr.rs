//! IRR extraction from real polynomial roots.

/// Returns true if `v` lies in the half-open interval `[0, 1)`.
#[must_use]
pub fn is_valid_discount_factor(v: f64) -> bool {
    (0.0..1.0).contains(&v)
}

/// First root in `[0, 1)`, scanning in the given order.
#[must_use]
pub fn select_discount_factor(real_roots: &[f64]) -> Option<f64> {
    real_roots
        .iter()
        .copied()
        .find(|&v| is_valid_discount_factor(v))
}

/// Every root in `[0, 1)`, in the given order.
#[must_use]
pub fn candidate_discount_factors(real_roots: &[f64]) -> Vec<f64> {
    real_roots
        .iter()
        .copied()
        .filter(|&v| is_valid_discount_factor(v))
        .collect()
}

/// Converts a discount factor to an IRR percentage.
///
/// With `d = 1 - v` the rate is `d / (1 - d) * 100`. A zero discount factor
/// is never valid and yields NaN, as does any non-finite result.
#[must_use]
pub fn irr_from_discount_factor(v: f64) -> f64 {
    if v == 0.0 {
        return f64::NAN;
    }

    let d = 1.0 - v;
    let irr = d / (1.0 - d) * 100.0;

    if irr.is_finite() {
        irr
    } else {
        f64::NAN
    }
}

/// Extracts the IRR percentage from a set of real roots.
///
/// Selects the first root in `[0, 1)`; when none qualifies the discount
/// factor defaults to zero and the result is NaN. Never fails.
///
/// # Example
///
/// ```rust
/// use irr_analytics::yields::extract_irr;
///
/// assert_eq!(extract_irr(&[1.2, 0.25]), 300.0);
/// assert!(extract_irr(&[]).is_nan());
/// ```
#[must_use]
pub fn extract_irr(real_roots: &[f64]) -> f64 {
    let v = select_discount_factor(real_roots).unwrap_or(0.0);
    irr_from_discount_factor(v)
}

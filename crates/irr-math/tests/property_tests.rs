//! Property-based tests for companion-matrix root finding.
//!
//! These tests verify properties that should hold for any input:
//! - Every real root is a zero of the polynomial
//! - Repeated calls return identical roots
//! - A wrong coefficient count is always rejected
//! - Sparse flows (only the first and last non-zero) always decompose

use irr_math::prelude::*;
use proptest::prelude::*;

/// Coefficient vectors of degree 1..=8 with a leading coefficient bounded away from zero.
fn coefficients() -> impl Strategy<Value = Vec<f64>> {
    (1usize..=8).prop_flat_map(|degree| {
        (
            prop::collection::vec(-100.0f64..100.0, degree),
            prop_oneof![-100.0f64..-1.0, 1.0f64..100.0],
        )
            .prop_map(|(mut lower, leading)| {
                lower.push(leading);
                lower
            })
    })
}

/// Single outlay and single receipt: `c₀ + cₙxⁿ` with zeros in between.
///
/// The companion matrix is a scaled cyclic permutation.
fn sparse_coefficients() -> impl Strategy<Value = Vec<f64>> {
    (
        1usize..=16,
        -200.0f64..-1.0,
        1.0f64..200.0,
    )
        .prop_map(|(degree, outlay, receipt)| {
            let mut coeffs = vec![0.0; degree + 1];
            coeffs[0] = outlay;
            coeffs[degree] = receipt;
            coeffs
        })
}

/// Residual bound scaled by the size of the terms being summed.
fn residual_bound(coeffs: &[f64], x: f64) -> f64 {
    let scale: f64 = coeffs
        .iter()
        .enumerate()
        .map(|(i, c)| c.abs() * x.abs().powi(i as i32))
        .sum();
    1e-6 * scale.max(1.0)
}

proptest! {
    #[test]
    fn real_roots_are_zeros(coeffs in coefficients()) {
        let degree = coeffs.len() - 1;
        let polynomial = Polynomial::new(coeffs.clone()).unwrap();
        let roots = find_real_roots(degree, &coeffs, &RootFinderConfig::default()).unwrap();

        prop_assert!(roots.len() <= degree);
        for r in roots {
            let value = polynomial.evaluate(r);
            prop_assert!(
                value.abs() <= residual_bound(&coeffs, r),
                "p({}) = {} for coefficients {:?}", r, value, coeffs
            );
        }
    }

    #[test]
    fn root_count_matches_degree(coeffs in coefficients()) {
        let polynomial = Polynomial::new(coeffs.clone()).unwrap();
        let roots = find_roots(&polynomial, &RootFinderConfig::default()).unwrap();
        prop_assert_eq!(roots.len(), polynomial.degree());
    }

    #[test]
    fn find_real_roots_is_idempotent(coeffs in coefficients()) {
        let degree = coeffs.len() - 1;
        let config = RootFinderConfig::default();
        let first = find_real_roots(degree, &coeffs, &config).unwrap();
        let second = find_real_roots(degree, &coeffs, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn exact_classification_is_subset(coeffs in coefficients()) {
        let degree = coeffs.len() - 1;
        let exact = find_real_roots(degree, &coeffs, &RootFinderConfig::exact()).unwrap();
        let tolerant = find_real_roots(degree, &coeffs, &RootFinderConfig::default()).unwrap();
        prop_assert!(exact.len() <= tolerant.len());
    }

    #[test]
    fn sparse_flows_decompose(coeffs in sparse_coefficients()) {
        let degree = coeffs.len() - 1;
        let polynomial = Polynomial::new(coeffs.clone()).unwrap();

        let roots = find_roots(&polynomial, &RootFinderConfig::default());
        prop_assert!(roots.is_ok(), "{:?} for coefficients {:?}", roots, coeffs);
        prop_assert_eq!(roots.unwrap().len(), degree);

        // Exactly one positive real root: (-c₀/cₙ)^(1/n).
        let expected = (-coeffs[0] / coeffs[degree]).powf(1.0 / degree as f64);
        let real = find_real_roots(degree, &coeffs, &RootFinderConfig::default()).unwrap();
        let positive: Vec<f64> = real.into_iter().filter(|r| *r > 0.0).collect();
        prop_assert_eq!(positive.len(), 1);
        prop_assert!(
            (positive[0] - expected).abs() <= 1e-9 * expected,
            "root {} expected {} for coefficients {:?}", positive[0], expected, coeffs
        );
    }

    #[test]
    fn wrong_coefficient_count_is_rejected(degree in 0usize..10, len in 1usize..12) {
        prop_assume!(len != degree + 1);
        let coeffs = vec![1.0; len];
        let result = find_real_roots(degree, &coeffs, &RootFinderConfig::default());
        let is_shape_mismatch = matches!(result, Err(MathError::ShapeMismatch { .. }));
        prop_assert!(is_shape_mismatch);
    }
}

#[test]
fn roots_from_known_factors() {
    // (x - 0.9)(x + 1.5)(x - 4) expanded
    let coeffs = [5.4, -3.75, -3.4, 1.0];
    let mut roots = find_real_roots(3, &coeffs, &RootFinderConfig::default()).unwrap();
    roots.sort_by(|a, b| a.partial_cmp(b).unwrap());

    assert_eq!(roots.len(), 3);
    approx::assert_relative_eq!(roots[0], -1.5, epsilon = 1e-9);
    approx::assert_relative_eq!(roots[1], 0.9, epsilon = 1e-9);
    approx::assert_relative_eq!(roots[2], 4.0, epsilon = 1e-9);
}

//! Known-value scenarios for izi-math
//!
//! Checks the reference kernels and the validated API against fixed inputs
//! with known answers.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI, SQRT_2};

use izi_math::kernels::{cos_approx, sin_approx, sqrt_approx, UNCOMPUTED_ERROR};
use izi_math::{cos, cos_with_iterations, sin, sin_with_iterations, sqrt, sqrt_with_tolerance};
use izi_math::ApproxError;

const TOLERANCE: f64 = 1e-8;
const EPSILON: f64 = 1e-6;

// ============================================================================
// Kernel Scenarios
// ============================================================================

#[test]
fn test_kernel_sqrt_two() {
    assert!((sqrt_approx(2.0, 1e-9) - 1.41421356).abs() < 1e-8);
    assert!((sqrt_approx(2.0, 1e-9) - SQRT_2).abs() <= 1e-9);
}

#[test]
fn test_kernel_sqrt_zero_and_one() {
    assert_eq!(sqrt_approx(0.0, 1e-6), 0.0);
    assert_eq!(sqrt_approx(1.0, 1e-6), 1.0);
    assert_eq!(sqrt_approx(1.0, 0.5), 1.0);
}

#[test]
fn test_kernel_sin_zero() {
    let (value, error) = sin_approx(0.0, 20);
    assert_eq!(value, 0.0);
    // Every term vanishes at zero, so the bound is exactly zero.
    assert_eq!(error, 0.0);
}

#[test]
fn test_kernel_large_iterations_stay_finite() {
    let (s_ref, _) = sin_approx(6.2, 160);
    let (c_ref, _) = cos_approx(6.2, 160);
    let (s, s_err) = sin_approx(6.2, 1000);
    let (c, c_err) = cos_approx(6.2, 1000);
    assert!(s_err.is_finite() && c_err.is_finite());
    assert_eq!(s, s_ref);
    assert_eq!(c, c_ref);
    assert!((s - 6.2f64.sin()).abs() < 1e-10);
}

#[test]
fn test_kernel_sin_half_pi() {
    let (value, error) = sin_approx(FRAC_PI_2, 20);
    assert!((value - 1.0).abs() < 1e-9);
    assert!(error < 1e-9);
}

#[test]
fn test_kernel_cos_pi() {
    let (value, error) = cos_approx(PI, 20);
    assert!((value + 1.0).abs() < 1e-9);
    assert!(error < 1e-9);
}

#[test]
fn test_kernel_cos_zero_iterations() {
    assert_eq!(cos_approx(0.0, 0), (1.0, UNCOMPUTED_ERROR));
}

// ============================================================================
// Square Root
// ============================================================================

#[test]
fn test_sqrt_perfect_squares() {
    for (value, root) in [(4.0, 2.0), (9.0, 3.0), (16.0, 4.0), (1.0, 1.0), (0.0, 0.0)] {
        let got = sqrt(value).unwrap();
        assert!((got - root).abs() < TOLERANCE, "sqrt({}) = {}", value, got);
    }
}

#[test]
fn test_sqrt_non_perfect_squares() {
    for value in [2.0f64, 3.0, 10.0, 0.25, 2.25, 3.564, 1_000_000.0] {
        let got = sqrt(value).unwrap();
        assert!(
            (got - value.sqrt()).abs() < TOLERANCE,
            "sqrt({}) = {}, expected {}",
            value,
            got,
            value.sqrt()
        );
    }
}

#[test]
fn test_sqrt_negative_is_domain_error() {
    for value in [-1.0, -100.0] {
        assert!(matches!(
            sqrt(value),
            Err(ApproxError::InvalidDomain { .. })
        ));
    }
}

#[test]
fn test_sqrt_custom_tolerance() {
    let got = sqrt_with_tolerance(2.0, 0.01).unwrap();
    assert!((got - SQRT_2).abs() < 0.01);
}

#[test]
fn test_sqrt_tolerance_below_minimum() {
    let err = sqrt_with_tolerance(4.0, 1e-20).unwrap_err();
    assert!(err.to_string().contains("must be at least"));
}

// ============================================================================
// Sine
// ============================================================================

#[test]
fn test_sin_known_angles() {
    let cases = [
        (0.0, 0.0),
        (FRAC_PI_6, 0.5),
        (FRAC_PI_4, SQRT_2 / 2.0),
        (FRAC_PI_3, 3f64.sqrt() / 2.0),
        (FRAC_PI_2, 1.0),
        (PI, 0.0),
        (3.0 * PI / 2.0, -1.0),
        (2.0 * PI, 0.0),
        (-FRAC_PI_2, -1.0),
        (-FRAC_PI_4, -SQRT_2 / 2.0),
        (0.001, 0.001),
    ];
    for (x, expected) in cases {
        let got = sin(x).unwrap().value;
        assert!((got - expected).abs() < EPSILON, "sin({}) = {}", x, got);
    }
}

#[test]
fn test_sin_matches_std() {
    for x in [1.0f64, 2.5, 5.0, 100.0, -100.0, -1.5] {
        let got = sin(x).unwrap().value;
        assert!((got - x.sin()).abs() < 1e-10, "sin({}) = {}", x, got);
    }
}

#[test]
fn test_sin_few_iterations() {
    let few = sin_with_iterations(1.0, 3).unwrap();
    assert!((few.value - 1f64.sin()).abs() < 0.01);

    let many = sin_with_iterations(1.0, 100).unwrap();
    assert!(many.error_bound <= few.error_bound);
    assert!(few.error_bound >= 0.0);
}

#[test]
fn test_sin_rejects_bad_iterations() {
    assert!(sin_with_iterations(1.0, 0).is_err());
    assert!(sin_with_iterations(1.0, -5).is_err());
    assert!(sin_with_iterations(1.0, 101).is_err());
}

// ============================================================================
// Cosine
// ============================================================================

#[test]
fn test_cos_known_angles() {
    let cases = [
        (0.0, 1.0),
        (FRAC_PI_6, 3f64.sqrt() / 2.0),
        (FRAC_PI_4, SQRT_2 / 2.0),
        (FRAC_PI_3, 0.5),
        (FRAC_PI_2, 0.0),
        (PI, -1.0),
        (3.0 * PI / 2.0, 0.0),
        (2.0 * PI, 1.0),
        (-FRAC_PI_3, 0.5),
    ];
    for (x, expected) in cases {
        let got = cos(x).unwrap().value;
        assert!((got - expected).abs() < EPSILON, "cos({}) = {}", x, got);
    }
}

#[test]
fn test_cos_matches_std() {
    for x in [1.0f64, 2.5, 5.0, 100.0, -1.5] {
        let got = cos(x).unwrap().value;
        assert!((got - x.cos()).abs() < 1e-10, "cos({}) = {}", x, got);
    }
}

#[test]
fn test_cos_few_iterations() {
    let few = cos_with_iterations(1.0, 4).unwrap();
    assert!((few.value - 1f64.cos()).abs() < 0.01);

    let many = cos_with_iterations(1.0, 100).unwrap();
    assert!(many.error_bound <= few.error_bound);
}

#[test]
fn test_cos_rejects_non_finite() {
    assert!(matches!(
        cos(f64::INFINITY),
        Err(ApproxError::NonFinite { name: "x", .. })
    ));
}

// ============================================================================
// Identities
// ============================================================================

#[test]
fn test_pythagorean_identity() {
    for x in [1.0, FRAC_PI_3, 2.7] {
        let s = sin(x).unwrap().value;
        let c = cos(x).unwrap().value;
        assert!((s * s + c * c - 1.0).abs() < EPSILON, "x = {}", x);
    }
}

// ============================================================================
// Reentrancy
// ============================================================================

#[test]
fn test_concurrent_calls_agree() {
    let expected: Vec<(f64, f64)> = (0..64).map(|i| sin_approx(i as f64 * 0.37, 40)).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                (0..64)
                    .map(|i| sin_approx(i as f64 * 0.37, 40))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

//! Sine and cosine by truncated Taylor series
//!
//! Both kernels reduce the argument modulo `2π`, fold it onto the positive
//! half-line by symmetry, then sum the alternating series term by term while
//! tracking a bound on the truncation error.

use core::f64::consts::TAU;

/// Error bound returned by [`sin_approx`] and [`cos_approx`] when
/// `iterations < 1`. It marks "no bound computed", not a magnitude.
pub const UNCOMPUTED_ERROR: f64 = -1.0;

/// Largest series index for which the running factorial stays comfortably
/// inside the `f64` range (171! overflows).
pub const MAX_SERIES_INDEX: i32 = 160;

/// Result of summing a truncated series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Series {
    pub value: f64,
    /// `|x|^(i+1) / (i+1)!` for the last accepted index `i`. `None` when no
    /// bound was computed.
    pub error_bound: Option<f64>,
    /// Number of terms accumulated.
    pub terms: u32,
}

impl Series {
    /// Collapse into the `(value, error_bound)` pair used at the host
    /// boundary, with [`UNCOMPUTED_ERROR`] standing in for a missing bound.
    pub fn into_pair(self) -> (f64, f64) {
        (self.value, self.error_bound.unwrap_or(UNCOMPUTED_ERROR))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Add,
    Subtract,
}

impl Sign {
    fn flip(self) -> Self {
        match self {
            Sign::Add => Sign::Subtract,
            Sign::Subtract => Sign::Add,
        }
    }
}

/// Reduce `x` modulo `2π` with a truncating remainder.
///
/// The result keeps the sign of `x`, so `reduce_angle(-x) == -reduce_angle(x)`
/// exactly.
///
/// # Test Cases
/// - reduce_angle(1.0) = 1.0
/// - reduce_angle(-1.0) = -1.0
/// - reduce_angle(2π) = 0.0
pub fn reduce_angle(x: f64) -> f64 {
    x % TAU
}

/// Sum `Σ ±first_term·x^(i-first_index) / i!` over `i = first_index,
/// first_index + 2, ... <= last_index`.
///
/// The error bound for index `i` is computed before its term is added and
/// uses `i + 1`, so after the loop it bounds what the accepted terms leave
/// out.
///
/// Summing stops early once the running factorial leaves the `f64` range or
/// the next term is exactly zero. Later terms would only add nothing or turn
/// the sum into `inf / inf = NaN`.
fn alternating_series(x: f64, first_term: f64, first_index: i32, last_index: i32) -> Series {
    let mut sign = Sign::Add;
    let mut value = 0.0;
    let mut cur_term = first_term;
    let mut cur_denom = 1.0;
    let mut error_bound = None;
    let mut terms: u32 = 0;

    let mut i = first_index;
    while i <= last_index {
        let next = f64::from(i) + 1.0;
        error_bound = Some(cur_term * x / (cur_denom * next));

        match sign {
            Sign::Add => value += cur_term / cur_denom,
            Sign::Subtract => value -= cur_term / cur_denom,
        }
        sign = sign.flip();

        cur_term *= x * x;
        cur_denom *= next * (next + 1.0);
        terms += 1;

        if !cur_denom.is_finite() || !cur_term.is_finite() || cur_term / cur_denom == 0.0 {
            break;
        }

        i = match i.checked_add(2) {
            Some(i) => i,
            None => break,
        };
    }

    Series {
        value,
        error_bound,
        terms,
    }
}

/// Sine by Taylor series `x - x³/3! + x⁵/5! - ...` over odd indices
/// `1, 3, 5, ... <= iterations`.
///
/// Negative reduced arguments are folded with `sin(-x) = -sin(x)`. With
/// `iterations < 1` no term is summed and the bound is `None`.
pub fn sin_series(x: f64, iterations: i32) -> Series {
    let mut reduced = reduce_angle(x);
    let negative = reduced < 0.0;
    if negative {
        reduced = -reduced;
    }

    let mut series = alternating_series(reduced, reduced, 1, iterations);
    if negative {
        series.value = -series.value;
    }
    series
}

/// Cosine by Taylor series `1 - x²/2! + x⁴/4! - ...` over even indices
/// `0, 2, 4, ... <= iterations`.
///
/// Negative reduced arguments are folded with `cos(-x) = cos(x)`. With
/// `iterations == 0` the constant term is still summed, but the bound is
/// reported as `None` like any other count below one.
pub fn cos_series(x: f64, iterations: i32) -> Series {
    let reduced = reduce_angle(x).abs();

    let mut series = alternating_series(reduced, 1.0, 0, iterations);
    if iterations < 1 {
        series.error_bound = None;
    }
    series
}

/// Sine with truncation-error bound, as `(estimate, error_bound)`.
///
/// `iterations` is the highest series index admitted, not a term count:
/// `iterations = 5` sums the terms for indices 1, 3 and 5.
///
/// Past index [`MAX_SERIES_INDEX`] the terms fall below `f64` resolution, and
/// once the running factorial overflows (after index 170) summing stops, so
/// very large counts return the same finite value as about 170.
///
/// # Test Cases
/// - sin_approx(0.0, 20) = (0.0, 0.0) (every term vanishes at zero, so the
///   bound is exactly 0)
/// - sin_approx(π/2, 20) ≈ (1.0, < 1e-9)
/// - sin_approx(1.0, 0) = (0.0, -1.0)
pub fn sin_approx(x: f64, iterations: i32) -> (f64, f64) {
    sin_series(x, iterations).into_pair()
}

/// Cosine with truncation-error bound, as `(estimate, error_bound)`.
///
/// `iterations` is the highest series index admitted: `iterations = 4` sums
/// the terms for indices 0, 2 and 4.
///
/// Large counts behave as for [`sin_approx`]: summing stops once the running
/// factorial overflows, keeping the value and bound finite.
///
/// # Test Cases
/// - cos_approx(0.0, 20) = (1.0, 0.0)
/// - cos_approx(π, 20) ≈ (-1.0, < 1e-9)
/// - cos_approx(0.0, 0) = (1.0, -1.0)
pub fn cos_approx(x: f64, iterations: i32) -> (f64, f64) {
    cos_series(x, iterations).into_pair()
}

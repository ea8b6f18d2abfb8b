//! Square root by bisection
//!
//! The search brackets the root of `mid² - value` and halves the bracket
//! until it is no wider than the caller's tolerance.

/// Estimate returned by [`sqrt_approx`] when the search loop never ran.
///
/// This happens when the tolerance is already at least as wide as the
/// initial bracket, or when an operand is NaN.
pub const NO_ESTIMATE: f64 = -1.0;

/// How a bisection search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BisectionOutcome {
    /// A midpoint squared to the operand exactly (includes the `0` and `1`
    /// short-circuits).
    Exact,
    /// The bracket narrowed to within the tolerance.
    Converged,
    /// The bracket endpoints became adjacent floats before reaching the
    /// tolerance. The estimate is as precise as `f64` allows.
    Stalled,
    /// The step budget ran out first.
    StepLimit,
    /// The loop body never ran, so no midpoint was produced.
    Untouched,
}

/// Result of [`bisect_sqrt`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bisection {
    /// Last midpoint computed, or the short-circuit value.
    pub estimate: Option<f64>,
    /// Number of midpoints evaluated.
    pub steps: u32,
    pub outcome: BisectionOutcome,
}

impl Bisection {
    fn exact(root: f64, steps: u32) -> Self {
        Self {
            estimate: Some(root),
            steps,
            outcome: BisectionOutcome::Exact,
        }
    }
}

/// Initial bracket for the root: `[0, 1]` below one, `[0, value]` otherwise.
///
/// # Test Cases
/// - sqrt_bracket(0.25) = (0.0, 1.0)
/// - sqrt_bracket(9.0) = (0.0, 9.0)
pub fn sqrt_bracket(value: f64) -> (f64, f64) {
    if value < 1.0 {
        (0.0, 1.0)
    } else {
        (0.0, value)
    }
}

/// Bisection square root with a step budget and a report of how it ended.
///
/// Runs the same search as [`sqrt_approx`]. The loop continues while
/// `right - left > tolerance`; the estimate is the last midpoint assigned
/// inside the loop, not a fresh midpoint of the final bracket.
///
/// The search also stops when a midpoint lands on a bracket endpoint, which
/// means the endpoints are adjacent floats and the bracket cannot shrink.
/// That bounds the loop even for `tolerance <= 0`.
///
/// # Parameters
/// - value "Operand, expected to be non-negative"
/// - tolerance "Bracket width at which to stop, expected to be positive"
/// - max_steps "Upper bound on midpoints evaluated"
pub fn bisect_sqrt(value: f64, tolerance: f64, max_steps: u32) -> Bisection {
    if value == 0.0 {
        return Bisection::exact(0.0, 0);
    }
    if value == 1.0 {
        return Bisection::exact(1.0, 0);
    }

    let (mut left, mut right) = sqrt_bracket(value);
    let mut mid = None;
    let mut steps: u32 = 0;

    while right - left > tolerance {
        if steps >= max_steps {
            return Bisection {
                estimate: mid,
                steps,
                outcome: BisectionOutcome::StepLimit,
            };
        }

        let m = (left + right) / 2.0;
        steps += 1;

        let m_squared = m * m;
        if m_squared == value {
            return Bisection::exact(m, steps);
        }
        if m <= left || m >= right {
            return Bisection {
                estimate: Some(m),
                steps,
                outcome: BisectionOutcome::Stalled,
            };
        }

        if m_squared > value {
            right = m;
        } else {
            left = m;
        }
        mid = Some(m);
    }

    Bisection {
        estimate: mid,
        steps,
        outcome: if mid.is_some() {
            BisectionOutcome::Converged
        } else {
            BisectionOutcome::Untouched
        },
    }
}

/// Square root by bisection.
///
/// `0` and `1` return exactly. Otherwise the result lies within roughly
/// `tolerance` of the true root. Returns [`NO_ESTIMATE`] when the tolerance
/// is no narrower than the initial bracket.
///
/// Negative operands give a meaningless small number. Non-positive
/// tolerances run until the bracket stalls at adjacent floats.
///
/// # Test Cases
/// - sqrt_approx(0.0, 1e-6) = 0.0
/// - sqrt_approx(1.0, 1e-6) = 1.0
/// - sqrt_approx(4.0, 1e-9) ≈ 2.0
/// - sqrt_approx(2.0, 1e-9) ≈ 1.41421356
/// - sqrt_approx(4.0, 10.0) = -1.0
pub fn sqrt_approx(value: f64, tolerance: f64) -> f64 {
    bisect_sqrt(value, tolerance, u32::MAX)
        .estimate
        .unwrap_or(NO_ESTIMATE)
}

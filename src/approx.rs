//! Validated approximations
//!
//! [`Approximator`] checks every argument before handing it to the reference
//! kernels, so misuse comes back as an [`ApproxError`] instead of a wrong
//! number, a negative error bound or a loop that never ends.

use izi_math_kernels::{bisect_sqrt, cos_series, sin_series, sqrt_bracket, BisectionOutcome, Series};

use crate::config::ApproxConfig;
use crate::error::{ensure_finite, ApproxError, ApproxResult};

/// A series approximation and its truncation-error bound.
///
/// `error_bound` is always a real magnitude: `|x|^(i+1) / (i+1)!` for the
/// last series index `i` summed, which bounds `|value - true value|` up to
/// floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub value: f64,
    pub error_bound: f64,
}

impl Estimate {
    /// The `(value, error_bound)` pair used at the host boundary.
    pub fn into_pair(self) -> (f64, f64) {
        (self.value, self.error_bound)
    }
}

/// Square root, sine and cosine with argument validation.
#[derive(Debug, Clone, Default)]
pub struct Approximator {
    config: ApproxConfig,
}

impl Approximator {
    /// Create an approximator after validating `config`.
    pub fn new(config: ApproxConfig) -> ApproxResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ApproxConfig {
        &self.config
    }

    /// Square root at the configured default tolerance.
    pub fn sqrt(&self, value: f64) -> ApproxResult<f64> {
        self.sqrt_with_tolerance(value, self.config.sqrt.default_tolerance)
    }

    /// Square root within `tolerance` of the true root.
    ///
    /// # Errors
    /// - `NonFinite` if `value` or `tolerance` is NaN or infinite
    /// - `InvalidDomain` if `value < 0`
    /// - `InvalidArgument` if `tolerance` is below the configured minimum
    /// - `NotConverged` if the bisection step budget runs out
    pub fn sqrt_with_tolerance(&self, value: f64, tolerance: f64) -> ApproxResult<f64> {
        ensure_finite("value", value)?;
        ensure_finite("tolerance", tolerance)?;
        if value < 0.0 {
            return Err(ApproxError::InvalidDomain { value });
        }
        let min_tolerance = self.config.sqrt.min_tolerance;
        if tolerance < min_tolerance {
            return Err(ApproxError::invalid(
                "tolerance",
                format!("must be at least {}, got {}", min_tolerance, tolerance),
            ));
        }

        let bisection = bisect_sqrt(value, tolerance, self.config.sqrt.max_bisection_steps);
        match (bisection.outcome, bisection.estimate) {
            (BisectionOutcome::StepLimit, _) => Err(ApproxError::NotConverged {
                steps: bisection.steps,
            }),
            (_, Some(root)) => Ok(root),
            (_, None) => {
                // The bracket is already within tolerance of the root.
                let (left, right) = sqrt_bracket(value);
                Ok((left + right) / 2.0)
            }
        }
    }

    /// Sine at the configured default series index.
    pub fn sin(&self, x: f64) -> ApproxResult<Estimate> {
        self.sin_with_iterations(x, self.config.series.default_iterations)
    }

    /// Sine summing series indices `1, 3, 5, ... <= iterations`.
    ///
    /// # Errors
    /// - `NonFinite` if `x` is NaN or infinite
    /// - `InvalidArgument` if `iterations` is outside `1..=max_iterations`
    pub fn sin_with_iterations(&self, x: f64, iterations: i32) -> ApproxResult<Estimate> {
        ensure_finite("x", x)?;
        self.check_iterations(iterations)?;
        estimate(sin_series(x, iterations))
    }

    /// Cosine at the configured default series index.
    pub fn cos(&self, x: f64) -> ApproxResult<Estimate> {
        self.cos_with_iterations(x, self.config.series.default_iterations)
    }

    /// Cosine summing series indices `0, 2, 4, ... <= iterations`.
    ///
    /// # Errors
    /// - `NonFinite` if `x` is NaN or infinite
    /// - `InvalidArgument` if `iterations` is outside `1..=max_iterations`
    pub fn cos_with_iterations(&self, x: f64, iterations: i32) -> ApproxResult<Estimate> {
        ensure_finite("x", x)?;
        self.check_iterations(iterations)?;
        estimate(cos_series(x, iterations))
    }

    fn check_iterations(&self, iterations: i32) -> ApproxResult<()> {
        let max = self.config.series.max_iterations;
        if iterations < 1 {
            return Err(ApproxError::invalid(
                "iterations",
                format!("must be at least 1, got {}", iterations),
            ));
        }
        if iterations > max {
            return Err(ApproxError::invalid(
                "iterations",
                format!("must be at most {}, got {}", max, iterations),
            ));
        }
        Ok(())
    }
}

fn estimate(series: Series) -> ApproxResult<Estimate> {
    match series.error_bound {
        Some(error_bound) => Ok(Estimate {
            value: series.value,
            error_bound,
        }),
        None => Err(ApproxError::invalid(
            "iterations",
            "no series term carried an error bound",
        )),
    }
}

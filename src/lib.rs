//! izi-math - approximate square root, sine and cosine
//!
//! Numeric primitives for environments without a native math library:
//! square root by bisection, and sine/cosine by truncated Taylor series that
//! report how large the truncation error can be.
//!
//! # Layers
//!
//! - **Kernels** ([`kernels`]) - the reference forms. Plain `f64` in and out,
//!   no validation, a `-1` sentinel where no error bound was computed.
//! - **Validated API** ([`Approximator`], [`sqrt`], [`sin`], [`cos`]) - the
//!   same algorithms behind argument checks that turn misuse into an
//!   [`ApproxError`].
//!
//! # Example
//!
//! ```rust
//! let root = izi_math::sqrt(2.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-8);
//!
//! let half_pi = std::f64::consts::FRAC_PI_2;
//! let sine = izi_math::sin(half_pi).unwrap();
//! assert!((sine.value - 1.0).abs() <= sine.error_bound + 1e-12);
//!
//! let (value, error) = izi_math::kernels::cos_approx(0.0, 0);
//! assert_eq!((value, error), (1.0, izi_math::kernels::UNCOMPUTED_ERROR));
//! ```
//!
//! Every function is pure and reentrant; call it from any thread without
//! setup.

pub mod approx;
pub mod config;
pub mod error;

pub use izi_math_kernels as kernels;

pub use approx::{Approximator, Estimate};
pub use config::{ApproxConfig, ConfigError, ConfigResult, SeriesConfig, SqrtConfig};
pub use error::{ApproxError, ApproxResult};

/// Square root at the default tolerance (`1e-8`).
///
/// Negative operands are refused with [`ApproxError::InvalidDomain`].
pub fn sqrt(value: f64) -> ApproxResult<f64> {
    Approximator::default().sqrt(value)
}

/// Square root within `tolerance` of the true root.
pub fn sqrt_with_tolerance(value: f64, tolerance: f64) -> ApproxResult<f64> {
    Approximator::default().sqrt_with_tolerance(value, tolerance)
}

/// Sine at the default series index (`40`).
pub fn sin(x: f64) -> ApproxResult<Estimate> {
    Approximator::default().sin(x)
}

/// Sine summing series indices up to `iterations`.
pub fn sin_with_iterations(x: f64, iterations: i32) -> ApproxResult<Estimate> {
    Approximator::default().sin_with_iterations(x, iterations)
}

/// Cosine at the default series index (`40`).
pub fn cos(x: f64) -> ApproxResult<Estimate> {
    Approximator::default().cos(x)
}

/// Cosine summing series indices up to `iterations`.
pub fn cos_with_iterations(x: f64, iterations: i32) -> ApproxResult<Estimate> {
    Approximator::default().cos_with_iterations(x, iterations)
}

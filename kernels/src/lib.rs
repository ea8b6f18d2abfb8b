//! izi-math kernels - reference numeric primitives
//!
//! This crate contains the three numeric kernels behind `izi-math`:
//! bisection square root, and sine/cosine by truncated Taylor series with a
//! reported truncation-error bound.
//!
//! # Design Philosophy
//!
//! 1. **Plain numbers in, plain numbers out** - the tuple and scalar forms
//!    (`sqrt_approx`, `sin_approx`, `cos_approx`) keep the calling convention
//!    a host runtime marshals across its boundary
//! 2. **Introspection beside it** - `bisect_sqrt`, `sin_series` and
//!    `cos_series` run the same loops and say how they ended
//! 3. **No validation** - kernels accept any input; the `izi-math` crate
//!    layers argument checking and typed errors on top
//!
//! # Supported Operations
//!
//! | Kernel | Inputs | Output |
//! |---|---|---|
//! | `sqrt_approx` | `value`, `tolerance` | estimate |
//! | `sin_approx` | `x`, `iterations` | `(estimate, error_bound)` |
//! | `cos_approx` | `x`, `iterations` | `(estimate, error_bound)` |
//!
//! Every kernel is pure and reentrant. There is no initialization step and
//! no state shared between calls.

pub mod sqrt;
pub mod trig;

pub use sqrt::*;
pub use trig::*;

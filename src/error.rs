//! Error types for the validated approximation API.

use thiserror::Error;

use crate::config::ConfigError;

/// Why a validated approximation was refused.
#[derive(Debug, Error)]
pub enum ApproxError {
    #[error("square root is undefined for negative value {value}")]
    InvalidDomain { value: f64 },

    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("argument `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("bisection did not converge within {steps} steps")]
    NotConverged { steps: u32 },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for validated approximations.
pub type ApproxResult<T> = Result<T, ApproxError>;

impl ApproxError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ApproxError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Reject NaN and infinities.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> ApproxResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ApproxError::NonFinite { name, value })
    }
}

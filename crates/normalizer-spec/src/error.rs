//! Error types for configuration validation.

use thiserror::Error;

use crate::params::OutputFormat;

/// Errors from validating a [`crate::Configuration`].
///
/// Raised synchronously before any pipeline stage runs; a rejected
/// configuration never produces partial output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("intensity must be finite and > 0, got {0}")]
    NonPositiveIntensity(f64),

    #[error("smoothness must be finite and >= 0, got {0}")]
    InvalidSmoothness(f64),

    #[error("16-bit depth requires PNG output, got {0:?}")]
    DepthFormatMismatch(OutputFormat),
}

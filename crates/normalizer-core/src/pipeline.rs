//! Pipeline orchestration.
//!
//! Sequences pre-filter → gradient estimation → normal reconstruction →
//! channel encoding for one (height field, configuration) pair. The
//! orchestrator holds no state between invocations, so live-adjustment
//! callers re-invoke it freely against the same cached height field;
//! throttling repeated invocations is the caller's job.

use thiserror::Error;

use normalizer_spec::{ConfigError, Configuration};

use crate::encode::{self, EncodedBuffer};
use crate::field::HeightField;
use crate::filter;
use crate::gradient;
use crate::normal;

/// Errors from one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Run the full conversion pipeline.
///
/// Validates the configuration and the input field before any stage
/// runs; a rejected invocation performs no computation. The result is a
/// deterministic pure function of the inputs.
pub fn generate_normal_map(
    field: &HeightField,
    config: &Configuration,
) -> Result<EncodedBuffer, PipelineError> {
    config.validate()?;
    validate_height_field(field)?;

    let filtered = filter::pre_filter(field, config);
    let grads = gradient::scharr_gradients(&filtered);
    let normals = normal::reconstruct(&grads, config.intensity);

    Ok(encode::encode(&normals, config))
}

/// Reject degenerate or non-finite input at pipeline entry.
fn validate_height_field(field: &HeightField) -> Result<(), PipelineError> {
    if field.width == 0 || field.height == 0 {
        return Err(PipelineError::InvalidInput(format!(
            "height field must be at least 1x1, got {}x{}",
            field.width, field.height
        )));
    }

    let expected = (field.width as usize) * (field.height as usize);
    if field.data.len() != expected {
        return Err(PipelineError::InvalidInput(format!(
            "height field has {} samples, expected {}",
            field.data.len(),
            expected
        )));
    }

    if let Some(idx) = field.data.iter().position(|v| !v.is_finite()) {
        return Err(PipelineError::InvalidInput(format!(
            "height field contains a non-finite sample at index {}",
            idx
        )));
    }

    Ok(())
}

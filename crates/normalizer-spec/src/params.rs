//! Configuration types for one pipeline run.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Parameters for a single height-to-normal-map conversion.
///
/// Immutable for the duration of one run; live-preview callers build a
/// fresh value on every slider change and re-invoke the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Pre-filter blur sigma. 0.0 disables filtering.
    #[serde(default)]
    pub smoothness: f64,
    /// Gradient strength multiplier (> 0).
    #[serde(default = "default_intensity")]
    pub intensity: f64,
    /// Use the edge-preserving bilateral pre-filter instead of a plain blur.
    #[serde(default)]
    pub high_quality: bool,
    /// Flip the sign of the X component (red channel).
    #[serde(default)]
    pub invert_x: bool,
    /// Flip the sign of the Y component (green channel).
    #[serde(default)]
    pub invert_y: bool,
    /// Output sample width per channel.
    #[serde(default)]
    pub bit_depth: BitDepth,
    /// Target container format. 16-bit depth is only valid with PNG.
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_intensity() -> f64 {
    1.0
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            smoothness: 0.0,
            intensity: default_intensity(),
            high_quality: false,
            invert_x: false,
            invert_y: false,
            bit_depth: BitDepth::default(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Configuration {
    /// Validate parameter ranges and cross-field invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.intensity.is_finite() || self.intensity <= 0.0 {
            return Err(ConfigError::NonPositiveIntensity(self.intensity));
        }
        if !self.smoothness.is_finite() || self.smoothness < 0.0 {
            return Err(ConfigError::InvalidSmoothness(self.smoothness));
        }
        if self.bit_depth == BitDepth::Sixteen && self.output_format != OutputFormat::Png {
            return Err(ConfigError::DepthFormatMismatch(self.output_format));
        }
        Ok(())
    }
}

/// Per-channel sample width of the encoded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BitDepth {
    /// 8 bits per channel (max value 255).
    #[default]
    #[serde(rename = "8")]
    Eight,
    /// 16 bits per channel (max value 65535), PNG only.
    #[serde(rename = "16")]
    Sixteen,
}

impl BitDepth {
    /// Largest encodable channel value at this depth.
    pub fn max_value(self) -> u16 {
        match self {
            BitDepth::Eight => u8::MAX as u16,
            BitDepth::Sixteen => u16::MAX,
        }
    }

    /// Bytes occupied by one channel sample.
    pub fn bytes_per_sample(self) -> usize {
        match self {
            BitDepth::Eight => 1,
            BitDepth::Sixteen => 2,
        }
    }
}

/// Container formats the caller may export to.
///
/// The core never encodes JPEG or BMP itself; the variant only
/// participates in validation (16-bit output requires PNG).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
    Bmp,
}

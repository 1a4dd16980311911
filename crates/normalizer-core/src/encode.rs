//! Channel encoding of normal vectors into integer samples.
//!
//! This stage is where channel-convention compatibility is resolved:
//! OpenGL and DirectX tangent-space normal maps differ only by the sign
//! of the green channel, so a caller targeting the other convention
//! flips `invert_y` and re-runs. The remap is purely per-pixel.

use normalizer_spec::{BitDepth, Configuration};

use crate::field::NormalField;

/// Final per-channel integer samples, ready for container encoding.
///
/// Three interleaved channels (R = X, G = Y, B = Z), row-major, with
/// every value bounded by `bit_depth.max_value()`.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Sample width per channel.
    pub bit_depth: BitDepth,
    /// Interleaved RGB samples (row-major).
    pub data: Vec<u16>,
}

impl EncodedBuffer {
    /// Get the [R, G, B] samples at the given coordinates.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u16; 3] {
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 3;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    /// Pack the samples into wire bytes.
    ///
    /// 8-bit depth emits one byte per sample; 16-bit emits big-endian
    /// byte pairs, the sample order PNG expects.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self.bit_depth {
            BitDepth::Eight => self.data.iter().map(|&v| v as u8).collect(),
            BitDepth::Sixteen => {
                let mut bytes = Vec::with_capacity(self.data.len() * 2);
                for &v in &self.data {
                    bytes.extend_from_slice(&v.to_be_bytes());
                }
                bytes
            }
        }
    }
}

/// Encode a normal field into integer channel samples.
///
/// `invert_x` flips the red channel, `invert_y` the green channel; the
/// blue (Z) channel is never inverted.
pub fn encode(normals: &NormalField, config: &Configuration) -> EncodedBuffer {
    let max = config.bit_depth.max_value();
    let mut data = Vec::with_capacity(normals.data.len() * 3);

    for n in &normals.data {
        data.push(encode_component(n[0], config.invert_x, max));
        data.push(encode_component(n[1], config.invert_y, max));
        data.push(encode_component(n[2], false, max));
    }

    EncodedBuffer {
        width: normals.width,
        height: normals.height,
        bit_depth: config.bit_depth,
        data,
    }
}

/// Map one component from [-1, 1] to an unsigned channel value.
///
/// `encoded = round((c * cond + 1) * 0.5 * max)` with the result clamped
/// to [0, max] to absorb floating-point rounding at the extremes.
/// Rounding is half away from zero (`f64::round`); this is the
/// compatibility baseline for reference outputs.
#[inline]
pub fn encode_component(c: f64, invert: bool, max: u16) -> u16 {
    let cond = if invert { -1.0 } else { 1.0 };
    let scaled = (c * cond + 1.0) * 0.5 * max as f64;
    scaled.round().clamp(0.0, max as f64) as u16
}

/// Map one encoded channel value back to [-1, 1].
///
/// Inverse of [`encode_component`] up to quantization; used by tests to
/// check that quantization is idempotent.
#[inline]
pub fn decode_component(v: u16, max: u16) -> f64 {
    (v as f64 / max as f64) * 2.0 - 1.0
}

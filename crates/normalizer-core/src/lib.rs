//! Normalizer Conversion Core
//!
//! This crate converts a 2D grayscale height field into a tangent-space
//! normal map. The pipeline is a deterministic pure function of a
//! [`HeightField`] and a [`Configuration`](normalizer_spec::Configuration):
//! the same inputs always produce byte-identical output, so live-preview
//! callers can simply re-invoke it on every parameter change.
//!
//! # Pipeline
//!
//! Pre-filter (plain or bilateral blur) → Scharr gradient estimation →
//! fixed-Z normal reconstruction → channel encoding at 8 or 16 bit.
//!
//! # Example
//!
//! ```
//! use normalizer_core::{generate_normal_map, HeightField};
//! use normalizer_spec::Configuration;
//!
//! let field = HeightField::from_samples(4, 4, vec![0.5; 16]);
//! let config = Configuration::default();
//!
//! let encoded = generate_normal_map(&field, &config).unwrap();
//! assert_eq!((encoded.width, encoded.height), (4, 4));
//! // Flat input encodes as the flat tangent-space normal (128, 128, 255).
//! assert_eq!(encoded.pixel(0, 0), [128, 128, 255]);
//! ```
//!
//! # Conventions
//!
//! Increasing height tilts the normal away from the gradient direction;
//! [`Configuration::invert_y`](normalizer_spec::Configuration::invert_y)
//! switches between OpenGL and DirectX green-channel conventions at the
//! encoding stage. Quantization rounds half away from zero; neighborhood
//! reads reflect symmetrically at the image border.
//!
//! # Modules
//!
//! - [`field`]: Height, gradient, and normal sample grids
//! - [`filter`]: Gaussian and bilateral pre-filters
//! - [`gradient`]: Scharr gradient estimation
//! - [`normal`]: Normal vector reconstruction
//! - [`encode`]: Channel inversion and quantization
//! - [`pipeline`]: The orchestrator tying the stages together
//! - [`png`]: Deterministic PNG writer for encoded output

pub mod encode;
pub mod field;
pub mod filter;
pub mod gradient;
pub mod normal;
pub mod pipeline;
pub mod png;

// Re-export main types for convenience
pub use encode::EncodedBuffer;
pub use field::{GradientField, HeightField, NormalField};
pub use pipeline::{generate_normal_map, PipelineError};
pub use png::{PngConfig, PngError};

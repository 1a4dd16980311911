//! Normalizer Configuration Library
//!
//! This crate provides the parameter types for the normalizer conversion
//! pipeline. A [`Configuration`] is a plain serde-serializable bundle that
//! callers (UI front-ends, batch tools, tests) fill in and hand to
//! `normalizer-core` for one pipeline run.
//!
//! # Example
//!
//! ```
//! use normalizer_spec::{BitDepth, Configuration, OutputFormat};
//!
//! let config = Configuration {
//!     smoothness: 1.5,
//!     intensity: 0.8,
//!     high_quality: true,
//!     invert_y: true,
//!     ..Configuration::default()
//! };
//!
//! assert!(config.validate().is_ok());
//!
//! // 16-bit export is only carried by PNG.
//! let bad = Configuration {
//!     bit_depth: BitDepth::Sixteen,
//!     output_format: OutputFormat::Jpeg,
//!     ..Configuration::default()
//! };
//! assert!(bad.validate().is_err());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Configuration rejection errors
//! - [`params`]: The [`Configuration`] bundle and its field enums

pub mod error;
pub mod params;

// Re-export commonly used types at the crate root
pub use error::ConfigError;
pub use params::{BitDepth, Configuration, OutputFormat};

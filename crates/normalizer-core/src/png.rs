//! Deterministic PNG writer for encoded normal maps.
//!
//! Uses fixed compression settings so the same encoded buffer always
//! produces byte-identical PNG output, which keeps live-preview and
//! regression hashes stable.

use std::io::Write;
use std::path::Path;

use png::{BitDepth as PngBitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use normalizer_spec::BitDepth;

use crate::encode::EncodedBuffer;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Create config optimized for file size (slower, but deterministic).
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    /// Create config optimized for speed (faster, but larger files).
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write an encoded normal map to a PNG file.
pub fn write_rgb(buffer: &EncodedBuffer, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_rgb_to_writer(buffer, writer, config)
}

/// Write an encoded normal map to any writer.
///
/// The PNG bit depth follows the buffer's depth; 16-bit samples are
/// written big-endian as PNG requires.
pub fn write_rgb_to_writer<W: Write>(
    buffer: &EncodedBuffer,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let depth = match buffer.bit_depth {
        BitDepth::Eight => PngBitDepth::Eight,
        BitDepth::Sixteen => PngBitDepth::Sixteen,
    };

    let mut encoder = Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(depth);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&buffer.to_bytes())?;

    Ok(())
}

/// Write to a `Vec<u8>` and return the BLAKE3 hash of the PNG bytes.
pub fn write_rgb_to_vec_with_hash(
    buffer: &EncodedBuffer,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgb_to_writer(buffer, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::HeightField;
    use crate::generate_normal_map;
    use normalizer_spec::Configuration;

    fn sample_buffer(bit_depth: normalizer_spec::BitDepth) -> EncodedBuffer {
        let mut field = HeightField::new(32, 32, 0.3);
        for y in 10..20 {
            for x in 10..20 {
                field.set(x, y, 0.8);
            }
        }
        let config = Configuration {
            bit_depth,
            ..Configuration::default()
        };
        generate_normal_map(&field, &config).unwrap()
    }

    #[test]
    fn rgb8_output_is_deterministic() {
        let buffer = sample_buffer(BitDepth::Eight);
        let config = PngConfig::default();

        let (data1, hash1) = write_rgb_to_vec_with_hash(&buffer, &config).unwrap();
        let (data2, hash2) = write_rgb_to_vec_with_hash(&buffer, &config).unwrap();

        assert_eq!(data1, data2, "PNG data should be identical");
        assert_eq!(hash1, hash2, "PNG hashes should be identical");
    }

    #[test]
    fn rgb16_output_is_deterministic() {
        let buffer = sample_buffer(BitDepth::Sixteen);
        let config = PngConfig::default();

        let (data1, hash1) = write_rgb_to_vec_with_hash(&buffer, &config).unwrap();
        let (data2, hash2) = write_rgb_to_vec_with_hash(&buffer, &config).unwrap();

        assert_eq!(data1, data2);
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn depths_produce_distinct_files() {
        let config = PngConfig::default();
        let (data8, _) = write_rgb_to_vec_with_hash(&sample_buffer(BitDepth::Eight), &config).unwrap();
        let (data16, _) =
            write_rgb_to_vec_with_hash(&sample_buffer(BitDepth::Sixteen), &config).unwrap();

        assert_ne!(data8, data16);
        // IHDR bit depth byte: offset 8 (length) + 4 (type) + 13th byte of data.
        assert_eq!(data8[24], 8);
        assert_eq!(data16[24], 16);
    }

    #[test]
    fn writes_file_to_disk() {
        let buffer = sample_buffer(BitDepth::Eight);
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("normal.png");

        write_rgb(&buffer, &path, &PngConfig::default()).unwrap();

        let on_disk = std::fs::read(&path).unwrap();
        let (in_memory, _) = write_rgb_to_vec_with_hash(&buffer, &PngConfig::default()).unwrap();
        assert_eq!(on_disk, in_memory);
    }
}

//! Pre-filtering of the height field before gradient estimation.
//!
//! Two modes: a separable Gaussian blur driven directly by `smoothness`,
//! and an edge-preserving bilateral filter for high-quality mode. The
//! bilateral filter is the pipeline's dominant cost center
//! (O(pixels × window area)); live-preview callers should expect extra
//! latency on large images when it is enabled.

use std::borrow::Cow;

use normalizer_spec::Configuration;

use crate::field::{reflect_index, HeightField};

/// Bilateral spatial sigma floor, so tiny smoothness values stay
/// near-identity instead of degenerating.
const MIN_SPATIAL_SIGMA: f64 = 0.5;

/// Bilateral intensity sigma floor.
const MIN_COLOR_SIGMA: f64 = 0.05;

/// Ratio between smoothness and the bilateral intensity sigma.
const COLOR_SIGMA_RATIO: f64 = 10.0;

/// Smoothness below this threshold skips filtering entirely.
const SKIP_THRESHOLD: f64 = 1e-3;

/// Apply the configured pre-filter to a height field.
///
/// Returns a borrowed `Cow` when the configuration makes the filter an
/// identity (smoothness at or near zero), avoiding both the copy and
/// any floating-point drift.
pub fn pre_filter<'a>(field: &'a HeightField, config: &Configuration) -> Cow<'a, HeightField> {
    if config.smoothness <= SKIP_THRESHOLD {
        return Cow::Borrowed(field);
    }

    if config.high_quality {
        let sigma_spatial = config.smoothness.max(MIN_SPATIAL_SIGMA);
        let sigma_color = (config.smoothness / COLOR_SIGMA_RATIO).max(MIN_COLOR_SIGMA);
        Cow::Owned(bilateral_filter(field, sigma_spatial, sigma_color))
    } else {
        Cow::Owned(gaussian_blur(field, config.smoothness))
    }
}

/// Apply a separable Gaussian blur with the given sigma.
pub fn gaussian_blur(field: &HeightField, sigma: f64) -> HeightField {
    let width = field.width;
    let height = field.height;

    let kernel = gaussian_kernel(sigma);
    let half = (kernel.len() / 2) as i32;

    // Horizontal pass
    let mut temp = HeightField::new(width, height, 0.0);
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0.0;
            for (i, weight) in kernel.iter().enumerate() {
                let sx = reflect_index(x as i32 + i as i32 - half, width);
                sum += field.get(sx, y) * weight;
            }
            temp.set(x, y, sum);
        }
    }

    // Vertical pass
    let mut out = HeightField::new(width, height, 0.0);
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0.0;
            for (i, weight) in kernel.iter().enumerate() {
                let sy = reflect_index(y as i32 + i as i32 - half, height);
                sum += temp.get(x, sy) * weight;
            }
            out.set(x, y, sum);
        }
    }

    out
}

/// Build a normalized 1D Gaussian kernel covering 3 sigma per side.
fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let kernel_size = ((sigma * 3.0).ceil() as usize * 2 + 1).max(3);
    let half = (kernel_size / 2) as f64;

    let mut kernel = vec![0.0; kernel_size];
    let mut sum = 0.0;
    for (i, value) in kernel.iter_mut().enumerate() {
        let x = i as f64 - half;
        *value = (-x * x / (2.0 * sigma * sigma)).exp();
        sum += *value;
    }
    for value in &mut kernel {
        *value /= sum;
    }

    kernel
}

/// Apply a brute-force bilateral filter.
///
/// Each output sample is a weighted mean over a window of radius
/// `ceil(2 * sigma_spatial)`, where the weight is the product of a
/// spatial Gaussian over pixel distance and an intensity Gaussian over
/// sample difference. Sharp height discontinuities therefore survive
/// smoothing instead of washing out.
pub fn bilateral_filter(field: &HeightField, sigma_spatial: f64, sigma_color: f64) -> HeightField {
    let width = field.width;
    let height = field.height;
    let radius = (sigma_spatial * 2.0).ceil() as i32;

    let spatial_norm = -1.0 / (2.0 * sigma_spatial * sigma_spatial);
    let color_norm = -1.0 / (2.0 * sigma_color * sigma_color);

    let mut out = HeightField::new(width, height, 0.0);
    for y in 0..height {
        for x in 0..width {
            let center = field.get(x, y);
            let mut sum = 0.0;
            let mut weight_sum = 0.0;

            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    let sample = field.get_reflected(x as i32 + dx, y as i32 + dy);
                    let dist_sq = (dx * dx + dy * dy) as f64;
                    let diff = sample - center;

                    let weight = (dist_sq * spatial_norm).exp() * (diff * diff * color_norm).exp();
                    sum += sample * weight;
                    weight_sum += weight;
                }
            }

            // The center tap always contributes weight 1, so weight_sum > 0.
            out.set(x, y, sum / weight_sum);
        }
    }

    out
}

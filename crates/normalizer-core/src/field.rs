//! Sample grids passed between pipeline stages.
//!
//! All grids are row-major with `(0, 0)` at the top-left, matching image
//! coordinates (y grows downward). Neighborhood reads reflect
//! symmetrically at the border so every stage preserves dimensions
//! without cropping.

/// A 2D grid of height samples, conceptually in [0, 1].
///
/// Immutable for the duration of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Samples (single channel, row-major).
    pub data: Vec<f64>,
}

/// Rec. 709 luma weights for reducing RGB input to height.
const LUMA_R: f64 = 0.2126;
const LUMA_G: f64 = 0.7152;
const LUMA_B: f64 = 0.0722;

impl HeightField {
    /// Create a new height field filled with a value.
    pub fn new(width: u32, height: u32, fill: f64) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a height field from raw samples.
    ///
    /// # Panics
    ///
    /// Panics if `samples.len() != width * height`.
    pub fn from_samples(width: u32, height: u32, samples: Vec<f64>) -> Self {
        assert_eq!(
            samples.len(),
            (width as usize) * (height as usize),
            "sample count must match dimensions"
        );
        Self {
            width,
            height,
            data: samples,
        }
    }

    /// Create a height field from interleaved 8-bit RGB pixels using
    /// Rec. 709 luminance.
    ///
    /// # Panics
    ///
    /// Panics if `pixels.len() != width * height * 3`.
    pub fn from_rgb8_luminance(width: u32, height: u32, pixels: &[u8]) -> Self {
        let size = (width as usize) * (height as usize);
        assert_eq!(pixels.len(), size * 3, "pixel count must match dimensions");

        let data = pixels
            .chunks_exact(3)
            .map(|px| {
                let r = px[0] as f64 / 255.0;
                let g = px[1] as f64 / 255.0;
                let b = px[2] as f64 / 255.0;
                r * LUMA_R + g * LUMA_G + b * LUMA_B
            })
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Create a height field from 8-bit grayscale pixels.
    ///
    /// # Panics
    ///
    /// Panics if `pixels.len() != width * height`.
    pub fn from_gray8(width: u32, height: u32, pixels: &[u8]) -> Self {
        let size = (width as usize) * (height as usize);
        assert_eq!(pixels.len(), size, "pixel count must match dimensions");

        let data = pixels.iter().map(|&v| v as f64 / 255.0).collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Get a sample at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.data[idx]
    }

    /// Set a sample at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.data[idx] = value;
    }

    /// Get a sample with symmetric border reflection.
    ///
    /// Index -1 maps to 0, -2 to 1, `width` to `width - 1`, and so on.
    #[inline]
    pub fn get_reflected(&self, x: i32, y: i32) -> f64 {
        let rx = reflect_index(x, self.width);
        let ry = reflect_index(y, self.height);
        self.get(rx, ry)
    }
}

/// Reflect an index symmetrically into `[0, len)`.
#[inline]
pub(crate) fn reflect_index(i: i32, len: u32) -> u32 {
    let len = len as i32;
    let m = i.rem_euclid(2 * len);
    if m < len {
        m as u32
    } else {
        (2 * len - 1 - m) as u32
    }
}

/// Per-pixel horizontal and vertical intensity gradients.
///
/// Produced by the gradient estimator, consumed by the normal
/// reconstructor; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientField {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Horizontal derivative per pixel (row-major).
    pub dx: Vec<f64>,
    /// Vertical derivative per pixel (row-major).
    pub dy: Vec<f64>,
}

impl GradientField {
    /// Create a zeroed gradient field.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            dx: vec![0.0; size],
            dy: vec![0.0; size],
        }
    }

    /// Get the (dx, dy) pair at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> (f64, f64) {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        (self.dx[idx], self.dy[idx])
    }

    /// Set the (dx, dy) pair at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, dx: f64, dy: f64) {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.dx[idx] = dx;
        self.dy[idx] = dy;
    }
}

/// A grid of unit tangent-space normal vectors.
///
/// Invariant: every element has |n| = 1 within floating-point tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalField {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Unit vectors [nx, ny, nz] (row-major).
    pub data: Vec<[f64; 3]>,
}

impl NormalField {
    /// Create a normal field filled with the flat normal (0, 0, 1).
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![[0.0, 0.0, 1.0]; size],
        }
    }

    /// Get the normal at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [f64; 3] {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.data[idx]
    }

    /// Set the normal at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, n: [f64; 3]) {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.data[idx] = n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn height_field_get_set() {
        let mut field = HeightField::new(3, 2, 0.0);
        field.set(0, 0, 0.1);
        field.set(2, 0, 0.2);
        field.set(1, 1, 0.3);

        assert!(approx_eq(field.get(0, 0), 0.1));
        assert!(approx_eq(field.get(2, 0), 0.2));
        assert!(approx_eq(field.get(1, 1), 0.3));
        assert!(approx_eq(field.get(2, 1), 0.0));
    }

    #[test]
    fn reflection_mirrors_about_edge_sample() {
        // Width 4: indices ... 1 0 | 0 1 2 3 | 3 2 ...
        assert_eq!(reflect_index(-1, 4), 0);
        assert_eq!(reflect_index(-2, 4), 1);
        assert_eq!(reflect_index(0, 4), 0);
        assert_eq!(reflect_index(3, 4), 3);
        assert_eq!(reflect_index(4, 4), 3);
        assert_eq!(reflect_index(5, 4), 2);
        // Degenerate single-sample axis always lands on 0.
        assert_eq!(reflect_index(-3, 1), 0);
        assert_eq!(reflect_index(7, 1), 0);
    }

    #[test]
    fn get_reflected_matches_edge_samples() {
        let mut field = HeightField::new(2, 2, 0.0);
        field.set(0, 0, 1.0);
        field.set(1, 0, 2.0);
        field.set(0, 1, 3.0);
        field.set(1, 1, 4.0);

        assert!(approx_eq(field.get_reflected(-1, -1), 1.0));
        assert!(approx_eq(field.get_reflected(2, 0), 2.0));
        assert!(approx_eq(field.get_reflected(-1, 2), 3.0));
        assert!(approx_eq(field.get_reflected(2, 2), 4.0));
    }

    #[test]
    fn luminance_weights_follow_rec709() {
        // Pure red, green, blue pixels.
        let pixels = [255, 0, 0, 0, 255, 0, 0, 0, 255];
        let field = HeightField::from_rgb8_luminance(3, 1, &pixels);

        assert!(approx_eq(field.get(0, 0), 0.2126));
        assert!(approx_eq(field.get(1, 0), 0.7152));
        assert!(approx_eq(field.get(2, 0), 0.0722));
    }

    #[test]
    fn gray8_maps_to_unit_range() {
        let field = HeightField::from_gray8(2, 1, &[0, 255]);
        assert!(approx_eq(field.get(0, 0), 0.0));
        assert!(approx_eq(field.get(1, 0), 1.0));
    }

    #[test]
    #[should_panic(expected = "sample count")]
    fn from_samples_rejects_length_mismatch() {
        let _ = HeightField::from_samples(2, 2, vec![0.0; 3]);
    }

    #[test]
    fn gradient_field_pairs() {
        let mut grads = GradientField::new(2, 2);
        grads.set(1, 0, 0.5, -0.25);
        assert_eq!(grads.get(1, 0), (0.5, -0.25));
        assert_eq!(grads.get(0, 1), (0.0, 0.0));
    }

    #[test]
    fn normal_field_defaults_to_flat() {
        let normals = NormalField::new(2, 2);
        assert_eq!(normals.get(1, 1), [0.0, 0.0, 1.0]);
    }
}

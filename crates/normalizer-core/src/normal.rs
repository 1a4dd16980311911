//! Normal vector reconstruction from gradients.

use crate::field::{GradientField, NormalField};

/// Reconstruct unit tangent-space normals from a gradient field.
///
/// Per pixel, the un-normalized vector is
/// `(-dx * intensity, -dy * intensity, 1.0)`: the fixed unit Z assumes a
/// locally near-flat surface, and the leading minus signs tilt the
/// normal away from the up-slope. Intensity is applied before
/// normalization (applying it after would cancel out).
///
/// A zero-gradient pixel reconstructs to exactly (0, 0, 1) for any
/// intensity.
pub fn reconstruct(grads: &GradientField, intensity: f64) -> NormalField {
    let mut normals = NormalField::new(grads.width, grads.height);

    for y in 0..grads.height {
        for x in 0..grads.width {
            let (dx, dy) = grads.get(x, y);
            if dx == 0.0 && dy == 0.0 {
                // Flat surface; NormalField::new already filled (0, 0, 1).
                continue;
            }

            let nx = -dx * intensity;
            let ny = -dy * intensity;
            let nz = 1.0;

            // len >= 1 because nz is fixed at 1, so no division hazard.
            let len = (nx * nx + ny * ny + nz * nz).sqrt();
            normals.set(x, y, [nx / len, ny / len, nz / len]);
        }
    }

    normals
}

//! Scharr gradient estimation.

use crate::field::{GradientField, HeightField};

/// Estimate per-pixel gradients with the 3×3 Scharr operator.
///
/// `dx` is positive where height increases to the right, `dy` where it
/// increases downward (image coordinates). The field is sampled with
/// symmetric border reflection, so the output has the same dimensions
/// as the input with no out-of-bounds reads.
#[allow(clippy::needless_range_loop)]
pub fn scharr_gradients(field: &HeightField) -> GradientField {
    let mut grads = GradientField::new(field.width, field.height);

    for y in 0..field.height {
        for x in 0..field.width {
            // Sample 3x3 neighborhood with reflection
            let mut samples = [[0.0; 3]; 3];
            for dy in 0..3 {
                for dx in 0..3 {
                    let sx = x as i32 + dx as i32 - 1;
                    let sy = y as i32 + dy as i32 - 1;
                    samples[dy][dx] = field.get_reflected(sx, sy);
                }
            }

            // Scharr operators for gradient
            // Gx = |  -3  0   3 |    Gy = | -3 -10 -3 |
            //      | -10  0  10 |         |  0   0  0 |
            //      |  -3  0   3 |         |  3  10  3 |

            let gx = 3.0 * (samples[0][2] - samples[0][0])
                + 10.0 * (samples[1][2] - samples[1][0])
                + 3.0 * (samples[2][2] - samples[2][0]);

            let gy = 3.0 * (samples[2][0] - samples[0][0])
                + 10.0 * (samples[2][1] - samples[0][1])
                + 3.0 * (samples[2][2] - samples[0][2]);

            grads.set(x, y, gx, gy);
        }
    }

    grads
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn flat_field_has_zero_gradients() {
        let field = HeightField::new(8, 8, 0.5);
        let grads = scharr_gradients(&field);

        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(grads.get(x, y), (0.0, 0.0));
            }
        }
    }

    #[test]
    fn horizontal_ramp_yields_positive_dx() {
        // Height increases to the right with slope 0.1 per pixel.
        let mut field = HeightField::new(8, 8, 0.0);
        for y in 0..8 {
            for x in 0..8 {
                field.set(x, y, x as f64 * 0.1);
            }
        }

        let grads = scharr_gradients(&field);

        // Interior: full kernel weight sum (3 + 10 + 3) * 2px * slope.
        let (dx, dy) = grads.get(4, 4);
        assert!(approx_eq(dx, 16.0 * 2.0 * 0.1), "dx = {}", dx);
        assert!(approx_eq(dy, 0.0), "dy = {}", dy);
    }

    #[test]
    fn vertical_ramp_yields_positive_dy() {
        // Height increases downward.
        let mut field = HeightField::new(8, 8, 0.0);
        for y in 0..8 {
            for x in 0..8 {
                field.set(x, y, y as f64 * 0.1);
            }
        }

        let grads = scharr_gradients(&field);
        let (dx, dy) = grads.get(4, 4);
        assert!(approx_eq(dx, 0.0), "dx = {}", dx);
        assert!(approx_eq(dy, 16.0 * 2.0 * 0.1), "dy = {}", dy);
    }

    #[test]
    fn transpose_symmetry() {
        // dx of a field equals dy of its transpose.
        let mut field = HeightField::new(5, 5, 0.0);
        for y in 0..5u32 {
            for x in 0..5u32 {
                field.set(x, y, ((x * 7 + y * 13) % 11) as f64 / 11.0);
            }
        }
        let mut transposed = HeightField::new(5, 5, 0.0);
        for y in 0..5 {
            for x in 0..5 {
                transposed.set(y, x, field.get(x, y));
            }
        }

        let grads = scharr_gradients(&field);
        let grads_t = scharr_gradients(&transposed);

        for y in 0..5 {
            for x in 0..5 {
                let (dx, dy) = grads.get(x, y);
                let (dx_t, dy_t) = grads_t.get(y, x);
                assert!(approx_eq(dx, dy_t));
                assert!(approx_eq(dy, dx_t));
            }
        }
    }

    #[test]
    fn border_reflection_keeps_ramp_edges_finite() {
        // At the left edge of a ramp the reflected neighborhood halves
        // the response but must not explode or read out of bounds.
        let mut field = HeightField::new(8, 1, 0.0);
        for x in 0..8 {
            field.set(x, 0, x as f64 * 0.1);
        }

        let grads = scharr_gradients(&field);
        let (dx_edge, _) = grads.get(0, 0);
        let (dx_mid, _) = grads.get(4, 0);
        assert!(approx_eq(dx_edge, dx_mid / 2.0), "dx_edge = {}", dx_edge);
    }

    #[test]
    fn dimensions_preserved() {
        let field = HeightField::new(13, 7, 0.25);
        let grads = scharr_gradients(&field);
        assert_eq!(grads.width, 13);
        assert_eq!(grads.height, 7);
        assert_eq!(grads.dx.len(), 13 * 7);
        assert_eq!(grads.dy.len(), 13 * 7);
    }
}

//! Direction-aligned non-maximum suppression on gradient magnitude.
//!
//! For each pixel the response is kept only if it exceeds its first neighbor
//! and is no smaller than its second along the quantized gradient direction,
//! thinning smeared step responses to one-pixel ridges before thresholding.
//!
//! The outermost 1-pixel frame is zeroed to avoid out-of-bounds neighbor
//! lookups; border gradients are dominated by clamping artefacts anyway.

use crate::edges::grad::Grad;
use crate::image::{PlaneF32, PlaneView, PlaneViewMut};

const TAN_22_5_DEG: f32 = 0.41421356237;

/// Suppress non-maxima, returning the thinned magnitude plane.
pub fn suppress_nonmaxima(grad: &Grad) -> PlaneF32 {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut out = PlaneF32::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);
        let out_row = out.row_mut(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag <= 0.0 {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            let (neighbor1, neighbor2) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (mag_row[x - 1], mag_row[x + 1])
                } else if same_sign {
                    (mag_prev[x + 1], mag_next[x - 1])
                } else {
                    (mag_prev[x - 1], mag_next[x + 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x + 1], mag_next[x - 1])
            } else {
                (mag_prev[x - 1], mag_next[x + 1])
            };

            // Asymmetric tie-break: a two-pixel-wide tied response keeps
            // exactly one pixel instead of suppressing both.
            if mag <= neighbor1 || mag < neighbor2 {
                continue;
            }

            out_row[x] = mag;
        }
    }

    out
}

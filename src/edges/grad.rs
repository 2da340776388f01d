//! Sobel gradients with per-pixel magnitude.
//!
//! Convolves the 3×3 Sobel kernel pair with border clamping and outputs
//! per-pixel `gx`, `gy`, `mag = sqrt(gx² + gy²)`. Magnitudes stay in the
//! intensity domain of the input (0..255-scale samples), which is what the
//! hysteresis thresholds are expressed in.
//!
//! Complexity: O(W·H); memory: three float planes.

use crate::image::{PlaneF32, PlaneU8, PlaneView, PlaneViewMut};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: PlaneF32,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: PlaneF32,
    /// Euclidean magnitude per pixel: `sqrt(gx² + gy²)`
    pub mag: PlaneF32,
}

/// Compute Sobel gradients on a single-channel 8-bit plane.
pub fn sobel_gradients(src: &PlaneU8) -> Grad {
    let w = src.w;
    let h = src.h;
    let mut gx = PlaneF32::new(w, h);
    let mut gy = PlaneF32::new(w, h);
    let mut mag = PlaneF32::new(w, h);

    if w == 0 || h == 0 {
        return Grad { gx, gy, mag };
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [src.row(y_idx[0]), src.row(y_idx[1]), src.row(y_idx[2])];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                sum_x += row[x_idx[0]] as f32 * kx_row[0]
                    + row[x_idx[1]] as f32 * kx_row[1]
                    + row[x_idx[2]] as f32 * kx_row[2];
                sum_y += row[x_idx[0]] as f32 * ky_row[0]
                    + row[x_idx[1]] as f32 * ky_row[1]
                    + row[x_idx[2]] as f32 * ky_row[2];
            }

            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
            out_mag[x] = (sum_x * sum_x + sum_y * sum_y).sqrt();
        }
    }

    Grad { gx, gy, mag }
}

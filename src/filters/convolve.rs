//! 3×3 convolution with clamped borders.
//!
//! Two fixed kernels live here: the sharpen kernel applied in strong sketch
//! mode and the Laplacian used by the noise-level descriptor.

use crate::image::{PlaneF32, PlaneU8, PlaneView, PlaneViewMut};

pub type Kernel3 = [[f32; 3]; 3];

/// Sharpening kernel: center 5, four-neighbor −1, corners 0.
pub const SHARPEN_KERNEL: Kernel3 = [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]];

/// Second-derivative (Laplacian) kernel.
pub const LAPLACIAN_KERNEL: Kernel3 = [[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]];

/// Convolve an 8-bit plane, saturating the result to 0..=255.
pub fn convolve3x3_u8(src: &PlaneU8, kernel: &Kernel3) -> PlaneU8 {
    let w = src.w;
    let h = src.h;
    let mut dst = PlaneU8::new(w, h);
    if w == 0 || h == 0 {
        return dst;
    }
    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [src.row(y_idx[0]), src.row(y_idx[1]), src.row(y_idx[2])];
        let out = dst.row_mut(y);
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];
            let mut acc = 0.0f32;
            for (ky, row) in rows.iter().enumerate() {
                let k_row = &kernel[ky];
                acc += row[x_idx[0]] as f32 * k_row[0]
                    + row[x_idx[1]] as f32 * k_row[1]
                    + row[x_idx[2]] as f32 * k_row[2];
            }
            out[x] = acc.round().clamp(0.0, 255.0) as u8;
        }
    }
    dst
}

/// Convolve an 8-bit plane into an unclamped f32 response.
pub fn convolve3x3_f32(src: &PlaneU8, kernel: &Kernel3) -> PlaneF32 {
    let w = src.w;
    let h = src.h;
    let mut dst = PlaneF32::new(w, h);
    if w == 0 || h == 0 {
        return dst;
    }
    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [src.row(y_idx[0]), src.row(y_idx[1]), src.row(y_idx[2])];
        let out = dst.row_mut(y);
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];
            let mut acc = 0.0f32;
            for (ky, row) in rows.iter().enumerate() {
                let k_row = &kernel[ky];
                acc += row[x_idx[0]] as f32 * k_row[0]
                    + row[x_idx[1]] as f32 * k_row[1]
                    + row[x_idx[2]] as f32 * k_row[2];
            }
            out[x] = acc;
        }
    }
    dst
}

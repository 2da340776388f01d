//! Edge-preserving bilateral filter.
//!
//! Each output sample is a weighted average over a square window, with the
//! weight of a neighbor falling off both with spatial distance
//! (`sigma_space`) and with intensity difference (`sigma_color`). Uniform
//! regions blend; strong edges survive because samples across the edge carry
//! near-zero color weight.
//!
//! The 256-entry color weight table is precomputed per call; rows are
//! processed in parallel. Output is independent of row execution order.

use crate::filters::ensure_odd;
use crate::image::{PlaneU8, PlaneView};
use rayon::prelude::*;

/// Apply one bilateral pass over `src`.
///
/// `diameter` is normalized to odd ≥ 1. Non-positive sigmas are raised to a
/// small positive floor rather than rejected. Borders replicate.
pub fn bilateral_filter(src: &PlaneU8, diameter: i32, sigma_color: f32, sigma_space: f32) -> PlaneU8 {
    let d = ensure_odd(diameter);
    if d == 1 || src.w == 0 || src.h == 0 {
        return src.clone();
    }
    let r = (d / 2) as i32;
    let sigma_color = sigma_color.max(1e-2);
    let sigma_space = sigma_space.max(1e-2);

    // Color weights depend only on the absolute intensity difference.
    let color_denom = 2.0 * sigma_color * sigma_color;
    let color_weight: Vec<f32> = (0..256)
        .map(|diff| (-(diff * diff) as f32 / color_denom).exp())
        .collect();

    // Spatial weights over the window, row-major (2r+1)².
    let space_denom = 2.0 * sigma_space * sigma_space;
    let side = d;
    let mut space_weight = vec![0.0f32; side * side];
    for dy in -r..=r {
        for dx in -r..=r {
            let dist2 = (dx * dx + dy * dy) as f32;
            space_weight[((dy + r) as usize) * side + (dx + r) as usize] =
                (-dist2 / space_denom).exp();
        }
    }

    let w = src.w;
    let h = src.h;
    let mut out = vec![0u8; w * h];
    out.par_chunks_mut(w).enumerate().for_each(|(y, out_row)| {
        for x in 0..w {
            let center = src.get(x, y) as i32;
            let mut num = 0.0f32;
            let mut den = 0.0f32;
            for dy in -r..=r {
                let yy = (y as i32 + dy).clamp(0, h as i32 - 1) as usize;
                let src_row = src.row(yy);
                let sw_row = &space_weight[((dy + r) as usize) * side..];
                for dx in -r..=r {
                    let xx = (x as i32 + dx).clamp(0, w as i32 - 1) as usize;
                    let v = src_row[xx] as i32;
                    let weight =
                        sw_row[(dx + r) as usize] * color_weight[(v - center).unsigned_abs() as usize];
                    num += weight * v as f32;
                    den += weight;
                }
            }
            out_row[x] = (num / den).round().clamp(0.0, 255.0) as u8;
        }
    });
    PlaneU8::from_vec(w, h, out)
}

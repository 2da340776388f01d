//! Separable Gaussian blur on 8-bit planes.
//!
//! The kernel is built from the extent alone, with sigma derived the same way
//! OpenCV does when no sigma is given: `0.3·((k−1)·0.5 − 1) + 0.8`. Taps are
//! normalized to unit sum, so a constant plane blurs to itself.

use crate::filters::ensure_odd;
use crate::image::{PlaneU8, PlaneView, PlaneViewMut};

/// 1D Gaussian taps for an odd extent `k`, normalized to sum 1.
fn gaussian_taps(k: usize) -> Vec<f32> {
    debug_assert!(k % 2 == 1);
    if k == 1 {
        return vec![1.0];
    }
    let sigma = 0.3 * ((k as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let center = (k / 2) as i32;
    let denom = 2.0 * sigma * sigma;
    let mut taps: Vec<f32> = (0..k as i32)
        .map(|i| {
            let d = (i - center) as f32;
            (-d * d / denom).exp()
        })
        .collect();
    let sum: f32 = taps.iter().sum();
    for t in &mut taps {
        *t /= sum;
    }
    taps
}

/// Blur `src` with a square Gaussian kernel of extent `ksize`.
///
/// `ksize` is normalized to odd ≥ 1 first; an extent of 1 is the identity.
/// Borders replicate the nearest sample. Output samples are rounded to the
/// nearest integer at write, matching 8-bit filter behaviour.
pub fn gaussian_blur(src: &PlaneU8, ksize: i32) -> PlaneU8 {
    let k = ensure_odd(ksize);
    if k == 1 || src.w == 0 || src.h == 0 {
        return src.clone();
    }
    let taps = gaussian_taps(k);
    let r = (k / 2) as i32;
    let w = src.w;
    let h = src.h;

    // Horizontal pass in f32 to avoid double rounding.
    let mut tmp = vec![0.0f32; w * h];
    for y in 0..h {
        let row = src.row(y);
        let out = &mut tmp[y * w..(y + 1) * w];
        for x in 0..w {
            let mut acc = 0.0f32;
            for (i, &t) in taps.iter().enumerate() {
                let xi = (x as i32 + i as i32 - r).clamp(0, w as i32 - 1) as usize;
                acc += row[xi] as f32 * t;
            }
            out[x] = acc;
        }
    }

    // Vertical pass with final rounding.
    let mut dst = PlaneU8::new(w, h);
    for y in 0..h {
        let out = dst.row_mut(y);
        for x in 0..w {
            let mut acc = 0.0f32;
            for (i, &t) in taps.iter().enumerate() {
                let yi = (y as i32 + i as i32 - r).clamp(0, h as i32 - 1) as usize;
                acc += tmp[yi * w + x] * t;
            }
            out[x] = acc.round().clamp(0.0, 255.0) as u8;
        }
    }
    dst
}

#[cfg(test)]
mod tests {
    use super::{gaussian_blur, gaussian_taps};
    use crate::image::PlaneU8;

    #[test]
    fn taps_are_normalized_and_symmetric() {
        for k in [3usize, 9, 21, 25] {
            let taps = gaussian_taps(k);
            assert_eq!(taps.len(), k);
            let sum: f32 = taps.iter().sum();
            assert!((sum - 1.0).abs() < 1e-5);
            for i in 0..k / 2 {
                assert!((taps[i] - taps[k - 1 - i]).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn constant_plane_is_unchanged() {
        let plane = PlaneU8::filled(16, 12, 128);
        let blurred = gaussian_blur(&plane, 9);
        assert_eq!(blurred, plane);
    }

    #[test]
    fn even_extent_rounds_up_instead_of_failing() {
        let plane = PlaneU8::filled(8, 8, 50);
        let blurred = gaussian_blur(&plane, 8);
        assert_eq!(blurred, plane);
    }

    #[test]
    fn extent_one_is_identity() {
        let mut plane = PlaneU8::new(4, 4);
        plane.set(2, 2, 200);
        assert_eq!(gaussian_blur(&plane, 1), plane);
    }

    #[test]
    fn impulse_spreads_symmetrically() {
        let mut plane = PlaneU8::new(9, 9);
        plane.set(4, 4, 255);
        let blurred = gaussian_blur(&plane, 3);
        assert!(blurred.get(4, 4) > blurred.get(3, 4));
        assert_eq!(blurred.get(3, 4), blurred.get(5, 4));
        assert_eq!(blurred.get(4, 3), blurred.get(4, 5));
    }
}

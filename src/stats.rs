//! Statistical descriptors driving the parameter advisor.
//!
//! Five scalars summarize a grayscale image:
//!
//! - `contrast` — standard deviation of all intensities.
//! - `edge_density` — mean of an internal edge map computed with a fixed
//!   80/160 threshold pair (independent of any caller-facing thresholds).
//! - `noise_level` — variance of the 3×3 Laplacian response; large for
//!   speckled images, small for smooth ones.
//! - `smoothness` — mean absolute difference against a 9×9 Gaussian blur.
//!   Low (≲ 20) means flat-color content such as logos and line art; high
//!   (≳ 25) means natural photographic texture.
//! - `strong_edge_ratio` — strong edge pixels (map value > 200) over weak
//!   ones (map value in (50, 200]), floored at one weak pixel. Above 0.35
//!   the content is graphic/geometric; 0.1–0.35 reads as a natural scene;
//!   below 0.1 the image is blurry or low-detail.
//!
//! All five are deterministic pure functions of the input pixels.

use crate::edges::detect_edges;
use crate::error::SketchError;
use crate::filters::{convolve3x3_f32, gaussian_blur, LAPLACIAN_KERNEL};
use crate::image::{PlaneU8, PlaneView, Raster};

/// Thresholds of the internal density-measurement edge map.
const DENSITY_EDGE_LOW: i32 = 80;
const DENSITY_EDGE_HIGH: i32 = 160;

/// Gaussian extent used by the smoothness probe.
const SMOOTHNESS_BLUR_KSIZE: i32 = 9;

/// Immutable statistics record for one grayscale image.
#[derive(Clone, Copy, Debug, Default, serde::Serialize)]
pub struct StatsDescriptor {
    pub contrast: f64,
    pub edge_density: f64,
    pub noise_level: f64,
    pub smoothness: f64,
    pub strong_edge_ratio: f64,
}

/// Compute the five descriptors for a single-channel raster.
///
/// Errors with [`SketchError::InvalidInput`] when handed a multi-channel
/// raster; callers convert color inputs with [`Raster::to_grayscale`] first.
pub fn extract_statistics(gray: &Raster) -> Result<StatsDescriptor, SketchError> {
    let plane = gray.gray_plane()?;

    let contrast = std_dev(&plane);

    let edge_map = detect_edges(&plane, DENSITY_EDGE_LOW, DENSITY_EDGE_HIGH);
    let edge_density = mean_u8(&edge_map);

    let noise_level = laplacian_variance(&plane);

    let blurred = gaussian_blur(&plane, SMOOTHNESS_BLUR_KSIZE);
    let smoothness = mean_abs_diff(&plane, &blurred);

    let strong = edge_map.as_slice().iter().filter(|&&v| v > 200).count();
    let weak = edge_map
        .as_slice()
        .iter()
        .filter(|&&v| v > 50 && v <= 200)
        .count();
    let strong_edge_ratio = strong as f64 / weak.max(1) as f64;

    Ok(StatsDescriptor {
        contrast,
        edge_density,
        noise_level,
        smoothness,
        strong_edge_ratio,
    })
}

fn mean_u8(plane: &PlaneU8) -> f64 {
    let sum: u64 = plane.as_slice().iter().map(|&v| v as u64).sum();
    sum as f64 / plane.data.len() as f64
}

/// Population standard deviation of the intensities.
fn std_dev(plane: &PlaneU8) -> f64 {
    let n = plane.data.len() as f64;
    let mean = mean_u8(plane);
    let var = plane
        .as_slice()
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    var.sqrt()
}

/// Population variance of the Laplacian response.
fn laplacian_variance(plane: &PlaneU8) -> f64 {
    let resp = convolve3x3_f32(plane, &LAPLACIAN_KERNEL);
    let n = resp.data.len() as f64;
    let mean = resp.as_slice().iter().map(|&v| v as f64).sum::<f64>() / n;
    resp.as_slice()
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n
}

fn mean_abs_diff(a: &PlaneU8, b: &PlaneU8) -> f64 {
    debug_assert_eq!(a.data.len(), b.data.len());
    let sum: f64 = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&p, &q)| (p as f64 - q as f64).abs())
        .sum();
    sum / a.data.len() as f64
}

#[cfg(test)]
mod tests {
    use super::extract_statistics;
    use crate::image::{Channels, Raster};

    #[test]
    fn flat_gray_image_scores_zero_everywhere() {
        let raster = Raster::new(100, 100, Channels::Gray, vec![128u8; 100 * 100]).unwrap();
        let stats = extract_statistics(&raster).unwrap();
        assert_eq!(stats.contrast, 0.0);
        assert_eq!(stats.edge_density, 0.0);
        assert_eq!(stats.noise_level, 0.0);
        assert_eq!(stats.smoothness, 0.0);
        assert_eq!(stats.strong_edge_ratio, 0.0);
    }

    #[test]
    fn rejects_color_input() {
        let raster = Raster::new(4, 4, Channels::Rgb, vec![0u8; 48]).unwrap();
        assert!(extract_statistics(&raster).is_err());
    }

    #[test]
    fn descriptors_are_finite_and_nonnegative() {
        // Noisy-ish deterministic pattern.
        let w = 64;
        let h = 48;
        let data: Vec<u8> = (0..w * h)
            .map(|i| ((i * 7919 + (i / w) * 104729) % 256) as u8)
            .collect();
        let raster = Raster::new(w, h, Channels::Gray, data).unwrap();
        let stats = extract_statistics(&raster).unwrap();
        for v in [
            stats.contrast,
            stats.edge_density,
            stats.noise_level,
            stats.smoothness,
            stats.strong_edge_ratio,
        ] {
            assert!(v.is_finite());
            assert!(v >= 0.0);
        }
        assert!(stats.contrast > 0.0);
        assert!(stats.noise_level > 0.0);
    }

    #[test]
    fn checkerboard_scores_high_contrast_and_edges() {
        let w = 64;
        let h = 64;
        let cell = 8;
        let data: Vec<u8> = (0..w * h)
            .map(|i| {
                let x = i % w;
                let y = i / w;
                if ((x / cell) + (y / cell)) % 2 == 0 {
                    16
                } else {
                    240
                }
            })
            .collect();
        let raster = Raster::new(w, h, Channels::Gray, data).unwrap();
        let stats = extract_statistics(&raster).unwrap();
        assert!(stats.contrast > 100.0);
        assert!(stats.edge_density > 0.0);
        assert!(stats.strong_edge_ratio > 0.35);
    }
}

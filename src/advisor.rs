//! Heuristic parameter suggestion from image statistics.
//!
//! A fixed decision table maps the five descriptors to a full
//! [`FilterParams`]. The rules are small and deliberately hard-coded; they
//! are evaluated in a fixed order with first-match semantics and exact
//! boundary constants, not through a configurable rule engine.
//!
//! The sharpness the advisor picks (30 or 80) and the threshold the pipeline
//! branches on (50) are independent by design: a caller may take the advised
//! parameters and then drag the sharpness slider somewhere else entirely.

use crate::params::FilterParams;
use crate::stats::StatsDescriptor;
use log::debug;

/// Suggest parameters for the image summarized by `stats`.
///
/// Pure and total: every well-formed descriptor maps to a parameter set.
/// Fields without a rule (currently `smooth_diameter`) keep their defaults.
pub fn advise_parameters(stats: &StatsDescriptor) -> FilterParams {
    // Strong sketch only when all four signals indicate flat-color,
    // high-contrast, edge-dense content (logos, line art, text). Any single
    // natural-photo signal falls back to the soft mode.
    let graphic_content = stats.edge_density > 40.0
        && stats.contrast > 50.0
        && stats.smoothness < 22.0
        && stats.strong_edge_ratio > 0.35;
    let sharpness = if graphic_content { 80 } else { 30 };

    // Lower contrast needs a softer (larger) dodge blur to avoid a harsh
    // result.
    let blend_blur_ksize = if stats.contrast < 30.0 {
        25
    } else if stats.contrast < 60.0 {
        17
    } else {
        11
    };

    // Noisier images tolerate more aggressive color mixing, capped so clean
    // images are not over-smoothed.
    let smooth_sigma_color = ((stats.noise_level / 4.0).trunc() as i32).clamp(20, 120) as f32;
    let smooth_sigma_space = ((stats.contrast / 2.0).trunc() as i32).clamp(10, 50) as f32;

    let smooth_iterations = if stats.noise_level > 300.0 {
        3
    } else if stats.noise_level > 120.0 {
        2
    } else {
        1
    };

    // Sharper images get higher absolute thresholds so only genuinely strong
    // edges survive the overlay.
    let mut edge_low = ((stats.contrast * 0.8) as i32).max(10);
    let mut edge_high = ((stats.contrast * 1.8) as i32).min(200);
    if edge_low > edge_high {
        std::mem::swap(&mut edge_low, &mut edge_high);
    }

    debug!(
        "advise: sharpness={sharpness} blur_ksize={blend_blur_ksize} \
         sigma_color={smooth_sigma_color} sigma_space={smooth_sigma_space} \
         iterations={smooth_iterations} edges={edge_low}/{edge_high}"
    );

    FilterParams {
        edge_low,
        edge_high,
        smooth_sigma_color,
        smooth_sigma_space,
        smooth_iterations,
        blend_blur_ksize,
        sharpness,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::advise_parameters;
    use crate::stats::StatsDescriptor;

    fn stats(
        contrast: f64,
        edge_density: f64,
        noise_level: f64,
        smoothness: f64,
        strong_edge_ratio: f64,
    ) -> StatsDescriptor {
        StatsDescriptor {
            contrast,
            edge_density,
            noise_level,
            smoothness,
            strong_edge_ratio,
        }
    }

    #[test]
    fn graphic_content_gets_strong_sharpness() {
        let params = advise_parameters(&stats(60.0, 45.0, 50.0, 10.0, 0.5));
        assert_eq!(params.sharpness, 80);
    }

    #[test]
    fn any_failed_signal_falls_back_to_soft() {
        // Each case breaks exactly one of the four conditions.
        for s in [
            stats(60.0, 40.0, 50.0, 10.0, 0.5),  // edge density at boundary
            stats(50.0, 45.0, 50.0, 10.0, 0.5),  // contrast at boundary
            stats(60.0, 45.0, 50.0, 22.0, 0.5),  // smoothness at boundary
            stats(60.0, 45.0, 50.0, 10.0, 0.35), // ratio at boundary
        ] {
            assert_eq!(advise_parameters(&s).sharpness, 30);
        }
    }

    #[test]
    fn blur_kernel_follows_contrast_tiers() {
        assert_eq!(advise_parameters(&stats(29.9, 0.0, 0.0, 0.0, 0.0)).blend_blur_ksize, 25);
        assert_eq!(advise_parameters(&stats(30.0, 0.0, 0.0, 0.0, 0.0)).blend_blur_ksize, 17);
        assert_eq!(advise_parameters(&stats(59.9, 0.0, 0.0, 0.0, 0.0)).blend_blur_ksize, 17);
        assert_eq!(advise_parameters(&stats(60.0, 0.0, 0.0, 0.0, 0.0)).blend_blur_ksize, 11);
    }

    #[test]
    fn sigmas_are_truncated_then_clamped() {
        let low = advise_parameters(&stats(0.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(low.smooth_sigma_color, 20.0);
        assert_eq!(low.smooth_sigma_space, 10.0);

        let mid = advise_parameters(&stats(70.3, 0.0, 170.9, 0.0, 0.0));
        assert_eq!(mid.smooth_sigma_color, 42.0); // trunc(170.9 / 4) = 42
        assert_eq!(mid.smooth_sigma_space, 35.0); // trunc(70.3 / 2) = 35

        let high = advise_parameters(&stats(200.0, 0.0, 1000.0, 0.0, 0.0));
        assert_eq!(high.smooth_sigma_color, 120.0);
        assert_eq!(high.smooth_sigma_space, 50.0);
    }

    #[test]
    fn iterations_follow_noise_tiers() {
        assert_eq!(advise_parameters(&stats(0.0, 0.0, 120.0, 0.0, 0.0)).smooth_iterations, 1);
        assert_eq!(advise_parameters(&stats(0.0, 0.0, 120.1, 0.0, 0.0)).smooth_iterations, 2);
        assert_eq!(advise_parameters(&stats(0.0, 0.0, 300.0, 0.0, 0.0)).smooth_iterations, 2);
        assert_eq!(advise_parameters(&stats(0.0, 0.0, 300.1, 0.0, 0.0)).smooth_iterations, 3);
    }

    #[test]
    fn edge_thresholds_scale_with_contrast() {
        let params = advise_parameters(&stats(100.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(params.edge_low, 80);
        assert_eq!(params.edge_high, 180);

        let clamped = advise_parameters(&stats(200.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(clamped.edge_low, 160);
        assert_eq!(clamped.edge_high, 200);
    }

    #[test]
    fn thresholds_come_back_ordered_even_for_flat_images() {
        // contrast 0 gives raw low=10, high=0; the advisor swaps.
        let params = advise_parameters(&stats(0.0, 0.0, 0.0, 0.0, 0.0));
        assert!(params.edge_low <= params.edge_high);
        assert_eq!((params.edge_low, params.edge_high), (0, 10));
    }

    #[test]
    fn unruled_fields_keep_their_defaults() {
        let params = advise_parameters(&stats(40.0, 10.0, 50.0, 30.0, 0.2));
        assert_eq!(params.smooth_diameter, 9);
    }
}

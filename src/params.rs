//! Filter parameter bundle consumed by the render pipeline.
//!
//! A `FilterParams` is built three ways: from `Default`, from the advisor
//! ([`crate::advise_parameters`]), or loaded from a JSON file a collaborator
//! persisted. Values outside their documented ranges are normalized inside
//! the pipeline (kernels forced odd ≥ 1, thresholds clamped and swapped)
//! rather than rejected here, so a hand-edited file cannot brick a render.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Sharpness slider value at and above which the pipeline picks the strong
/// (edge-augmented, sharpened) sketch branch.
pub const STRONG_MODE_THRESHOLD: i32 = 50;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    /// Lower hysteresis threshold for the strong-mode edge overlay (0–255).
    pub edge_low: i32,
    /// Upper hysteresis threshold for the strong-mode edge overlay (0–255).
    pub edge_high: i32,
    /// Spatial extent of the bilateral smoothing window (odd, ≥ 1 after
    /// normalization).
    pub smooth_diameter: i32,
    /// Intensity-difference tolerance of the bilateral filter.
    pub smooth_sigma_color: f32,
    /// Spatial falloff of the bilateral filter.
    pub smooth_sigma_space: f32,
    /// How many times the smoothing pass is reapplied.
    pub smooth_iterations: u32,
    /// Gaussian kernel extent for the dodge-blend blur (odd, ≥ 1 after
    /// normalization).
    pub blend_blur_ksize: i32,
    /// Sketch strength in [0, 100]; `< 50` renders soft, otherwise strong.
    pub sharpness: i32,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            edge_low: 50,
            edge_high: 150,
            smooth_diameter: 9,
            smooth_sigma_color: 75.0,
            smooth_sigma_space: 75.0,
            smooth_iterations: 1,
            blend_blur_ksize: 21,
            sharpness: 50,
        }
    }
}

/// Load parameters from a JSON file; missing fields take their defaults.
pub fn load_params(path: &Path) -> Result<FilterParams, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read params {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse params {}: {e}", path.display()))
}

/// Serialize parameters as pretty JSON to `path`.
pub fn save_params(path: &Path, params: &FilterParams) -> Result<(), String> {
    let json = serde_json::to_string_pretty(params)
        .map_err(|e| format!("Failed to serialize params: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write params {}: {e}", path.display()))
}

//! Sketch rendering pipeline.
//!
//! Overview
//! - Converts the color input to a luma plane.
//! - Suppresses fine texture with an iterated bilateral filter while keeping
//!   dominant edges, approximating a hand-drawn look.
//! - Builds the base sketch by a color-dodge blend of the grayscale plane
//!   against an inverted, Gaussian-blurred copy of the smoothed plane:
//!   uniform regions wash out white, edges stay dark.
//! - In strong mode, overlays a hysteresis edge map (edges forced dark) and
//!   runs a fixed 3×3 sharpen over the combined plane.
//!
//! Every `render` call is an independent pure transformation; the soft/strong
//! choice is a branch within the call, not stored state.

use crate::edges::detect_edges;
use crate::error::SketchError;
use crate::filters::{bilateral_filter, convolve3x3_u8, gaussian_blur, SHARPEN_KERNEL};
use crate::image::{Channels, PlaneU8, PlaneView, Raster};
use crate::params::{FilterParams, STRONG_MODE_THRESHOLD};
use log::debug;
use std::collections::BTreeMap;

/// Rendering branch, decided once per call from the sharpness slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SketchMode {
    /// Base dodge-blend sketch only.
    Soft,
    /// Base sketch plus edge overlay and sharpening.
    Strong,
}

impl SketchMode {
    /// `sharpness < 50` renders soft; everything else renders strong.
    pub fn from_sharpness(sharpness: i32) -> Self {
        if sharpness < STRONG_MODE_THRESHOLD {
            SketchMode::Soft
        } else {
            SketchMode::Strong
        }
    }
}

/// Output of one [`render`] call.
#[derive(Clone, Debug)]
pub struct SketchResult {
    /// The sketch, replicated to three channels.
    pub image: Raster,
    /// Auxiliary diagnostic planes, keyed by name. Reserved; currently
    /// always empty.
    pub extras: BTreeMap<String, Raster>,
}

/// Render a pencil sketch of `color` under `params`.
///
/// Errors with [`SketchError::InvalidInput`] if the input is not a 3-channel
/// raster (zero-dimension rasters cannot be constructed). The input is never
/// mutated; identical inputs produce byte-identical output.
pub fn render(color: &Raster, params: &FilterParams) -> Result<SketchResult, SketchError> {
    if color.width() == 0 || color.height() == 0 {
        return Err(SketchError::InvalidInput(
            "cannot render an empty image".into(),
        ));
    }
    if color.channels() != Channels::Rgb {
        return Err(SketchError::InvalidInput(
            "render expects a 3-channel color raster".into(),
        ));
    }

    let mode = SketchMode::from_sharpness(params.sharpness);
    debug!(
        "render: {}x{} mode={mode:?} iterations={}",
        color.width(),
        color.height(),
        params.smooth_iterations
    );

    let gray = color.luma_plane();
    let smooth = smooth_plane(&gray, params);
    let base = dodge_sketch(&gray, &smooth, params.blend_blur_ksize);

    let sketch = match mode {
        SketchMode::Soft => base,
        SketchMode::Strong => {
            let edges = detect_edges(&gray, params.edge_low, params.edge_high);
            let masked = mask_edges_dark(&base, &edges);
            convolve3x3_u8(&masked, &SHARPEN_KERNEL)
        }
    };

    Ok(SketchResult {
        image: Raster::rgb_from_gray(&sketch),
        extras: BTreeMap::new(),
    })
}

/// Iterated bilateral smoothing; each pass feeds the next.
fn smooth_plane(gray: &PlaneU8, params: &FilterParams) -> PlaneU8 {
    let iterations = params.smooth_iterations.max(1);
    let mut result = gray.clone();
    for _ in 0..iterations {
        result = bilateral_filter(
            &result,
            params.smooth_diameter,
            params.smooth_sigma_color,
            params.smooth_sigma_space,
        );
    }
    result
}

/// Color-dodge base sketch: `min(255, gray · 256 / max(1, 255 − blurred))`.
fn dodge_sketch(gray: &PlaneU8, smooth: &PlaneU8, blur_ksize: i32) -> PlaneU8 {
    let blurred = gaussian_blur(&smooth.inverted(), blur_ksize);
    let data = gray
        .as_slice()
        .iter()
        .zip(blurred.as_slice())
        .map(|(&g, &b)| {
            let denom = (255 - b as i32).max(1) as u32;
            ((g as u32 * 256) / denom).min(255) as u8
        })
        .collect();
    PlaneU8::from_vec(gray.w, gray.h, data)
}

/// Force pixels under the edge map dark, leaving the rest of the sketch
/// untouched.
fn mask_edges_dark(sketch: &PlaneU8, edges: &PlaneU8) -> PlaneU8 {
    let data = sketch
        .as_slice()
        .iter()
        .zip(edges.as_slice())
        .map(|(&s, &e)| if e != 0 { 0 } else { s })
        .collect();
    PlaneU8::from_vec(sketch.w, sketch.h, data)
}

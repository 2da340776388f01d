//! Hysteresis edge operator built from Sobel gradients, non-maximum
//! suppression, and a double-threshold connectivity pass.
//!
//! The output map distinguishes the two acceptance classes:
//!
//! - `EDGE_STRONG` (255): gradient magnitude reached the high threshold.
//! - `EDGE_WEAK` (128): magnitude between the thresholds, kept because it
//!   connects to a strong pixel.
//! - 0 everywhere else.
//!
//! The statistics pass exploits the distinction (strong-to-weak ratio); the
//! render pipeline treats any nonzero value as an edge.
//!
//! Design goals follow the rest of the crate: clarity and row-friendly
//! access, clamped borders, deterministic output.

pub mod grad;
pub mod hysteresis;
pub mod nms;

pub use grad::{sobel_gradients, Grad};

use crate::image::PlaneU8;
use hysteresis::link_edges;
use nms::suppress_nonmaxima;

/// Map value for pixels accepted at the high threshold.
pub const EDGE_STRONG: u8 = 255;
/// Map value for pixels accepted through hysteresis linking.
pub const EDGE_WEAK: u8 = 128;

/// Detect edges in `gray` with a hysteresis threshold pair.
///
/// Thresholds are normalized before use: clamped to the 0..=255 intensity
/// domain and swapped into `low ≤ high` order, so a caller passing the pair
/// reversed (or out of range) gets identical behaviour to the normalized
/// pair.
pub fn detect_edges(gray: &PlaneU8, low: i32, high: i32) -> PlaneU8 {
    let mut low = low.clamp(0, 255) as f32;
    let mut high = high.clamp(0, 255) as f32;
    if low > high {
        std::mem::swap(&mut low, &mut high);
    }

    let grad = sobel_gradients(gray);
    let suppressed = suppress_nonmaxima(&grad);
    link_edges(&suppressed, low, high)
}

//! Double threshold and connectivity linking over a thinned magnitude plane.

use crate::edges::{EDGE_STRONG, EDGE_WEAK};
use crate::image::{PlaneF32, PlaneU8, PlaneView};

/// Classify thinned magnitudes against a `low ≤ high` threshold pair.
///
/// Pixels at or above `high` become strong seeds; pixels in `[low, high)`
/// survive only if they are 8-connected (directly or transitively) to a seed,
/// and are marked weak. Everything else is zero.
pub fn link_edges(suppressed: &PlaneF32, low: f32, high: f32) -> PlaneU8 {
    debug_assert!(low <= high);
    let w = suppressed.w;
    let h = suppressed.h;
    let mut map = PlaneU8::new(w, h);
    if w == 0 || h == 0 {
        return map;
    }

    // Seed pass: strong pixels go straight onto the link stack.
    let mut stack: Vec<(usize, usize)> = Vec::new();
    for y in 0..h {
        let mag_row = suppressed.row(y);
        for (x, &mag) in mag_row.iter().enumerate() {
            if mag > 0.0 && mag >= high {
                map.set(x, y, EDGE_STRONG);
                stack.push((x, y));
            }
        }
    }

    // Link pass: flood from seeds into candidate neighbors.
    while let Some((x, y)) = stack.pop() {
        let x0 = x.saturating_sub(1);
        let y0 = y.saturating_sub(1);
        let x1 = (x + 1).min(w - 1);
        let y1 = (y + 1).min(h - 1);
        for ny in y0..=y1 {
            for nx in x0..=x1 {
                if map.get(nx, ny) != 0 {
                    continue;
                }
                let mag = suppressed.get(nx, ny);
                if mag >= low && mag > 0.0 {
                    map.set(nx, ny, EDGE_WEAK);
                    stack.push((nx, ny));
                }
            }
        }
    }

    map
}

//! Dense single-plane filters used by the pipeline and the statistics pass.
//!
//! - Separable Gaussian blur with OpenCV-compatible automatic sigma.
//! - Edge-preserving bilateral filter (row-parallel).
//! - 3×3 convolution with clamped borders, backing the sharpen and Laplacian
//!   kernels.
//!
//! Borders are handled by clamping indices (replicate). All filters read one
//! plane and emit a new one.

pub mod bilateral;
pub mod convolve;
pub mod gaussian;

pub use bilateral::bilateral_filter;
pub use convolve::{convolve3x3_f32, convolve3x3_u8, Kernel3, LAPLACIAN_KERNEL, SHARPEN_KERNEL};
pub use gaussian::gaussian_blur;

/// Normalize a kernel extent to the nearest odd value ≥ 1.
///
/// Even values round up; non-positive values collapse to 1. Every blur and
/// smoothing kernel in the pipeline passes through here before use.
#[inline]
pub fn ensure_odd(k: i32) -> usize {
    let k = k.max(1) as usize;
    if k % 2 == 0 {
        k + 1
    } else {
        k
    }
}

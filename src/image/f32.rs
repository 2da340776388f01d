//! Owned single-channel f32 plane in row-major layout.
//!
//! Used for intermediate numeric buffers: Sobel gradients, suppressed
//! magnitudes, Laplacian responses. Tightly packed like [`PlaneU8`].
//!
//! [`PlaneU8`]: crate::image::PlaneU8

use crate::image::traits::{PlaneView, PlaneViewMut};

#[derive(Clone, Debug)]
pub struct PlaneF32 {
    /// Plane width in pixels
    pub w: usize,
    /// Plane height in pixels
    pub h: usize,
    /// Backing storage in row-major order, `w * h` samples
    pub data: Vec<f32>,
}

impl PlaneF32 {
    /// Construct a zero-initialized plane of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl PlaneView for PlaneF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl PlaneViewMut for PlaneF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

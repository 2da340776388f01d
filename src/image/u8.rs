//! Owned single-channel 8-bit plane in row-major layout.
//!
//! The working currency of the pipeline: grayscale conversion, smoothing and
//! blending all read and write `PlaneU8`. Buffers are tightly packed
//! (no padding between rows).

use crate::image::traits::{PlaneView, PlaneViewMut};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaneU8 {
    /// Plane width in pixels
    pub w: usize,
    /// Plane height in pixels
    pub h: usize,
    /// Backing storage in row-major order, `w * h` samples
    pub data: Vec<u8>,
}

impl PlaneU8 {
    /// Construct a zero-initialized plane of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0u8; w * h],
        }
    }

    /// Construct a plane taking ownership of `data` (`data.len() == w * h`).
    pub fn from_vec(w: usize, h: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), w * h);
        Self { w, h, data }
    }

    /// Construct a plane filled with a constant value.
    pub fn filled(w: usize, h: usize, value: u8) -> Self {
        Self {
            w,
            h,
            data: vec![value; w * h],
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Per-pixel inversion (`255 − v`), used by the dodge-blend stage.
    pub fn inverted(&self) -> Self {
        Self {
            w: self.w,
            h: self.h,
            data: self.data.iter().map(|&v| 255 - v).collect(),
        }
    }
}

impl PlaneView for PlaneU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl PlaneViewMut for PlaneU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

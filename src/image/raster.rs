//! Public raster data carrier exchanged with callers.
//!
//! A `Raster` owns a contiguous `width × height × channels` grid of 8-bit
//! samples, with the channel count fixed at construction. The pipeline never
//! mutates a raster in place: stages read one raster (or plane) and emit
//! another.

use crate::error::SketchError;
use crate::image::PlaneU8;

/// Channel layout of a [`Raster`]. Interleaved RGB for color images.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channels {
    Gray,
    Rgb,
}

impl Channels {
    /// Samples per pixel.
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    channels: Channels,
    data: Vec<u8>,
}

impl Raster {
    /// Construct a raster, validating geometry against the buffer length.
    pub fn new(
        width: usize,
        height: usize,
        channels: Channels,
        data: Vec<u8>,
    ) -> Result<Self, SketchError> {
        if width == 0 || height == 0 {
            return Err(SketchError::InvalidInput(format!(
                "raster dimensions must be positive, got {width}x{height}"
            )));
        }
        let expected = width * height * channels.count();
        if data.len() != expected {
            return Err(SketchError::InvalidInput(format!(
                "buffer length {} does not match {width}x{height}x{}",
                data.len(),
                channels.count()
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Wrap a grayscale plane as a single-channel raster.
    pub fn from_gray(plane: PlaneU8) -> Self {
        Self {
            width: plane.w,
            height: plane.h,
            channels: Channels::Gray,
            data: plane.data,
        }
    }

    /// Replicate a grayscale plane into the three channels of an RGB raster.
    pub fn rgb_from_gray(plane: &PlaneU8) -> Self {
        let mut data = Vec::with_capacity(plane.data.len() * 3);
        for &v in &plane.data {
            data.extend_from_slice(&[v, v, v]);
        }
        Self {
            width: plane.w,
            height: plane.h,
            channels: Channels::Rgb,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Single-channel raster reduced to its backing plane.
    ///
    /// Errors with [`SketchError::InvalidInput`] on a multi-channel raster;
    /// callers convert color inputs first (see [`Raster::to_grayscale`]).
    pub fn gray_plane(&self) -> Result<PlaneU8, SketchError> {
        match self.channels {
            Channels::Gray => Ok(PlaneU8::from_vec(
                self.width,
                self.height,
                self.data.clone(),
            )),
            Channels::Rgb => Err(SketchError::InvalidInput(
                "expected a single-channel raster, got 3 channels".into(),
            )),
        }
    }

    /// Luminance plane of an RGB raster (0.299 R + 0.587 G + 0.114 B,
    /// rounded to the nearest integer). A grayscale raster is passed through.
    pub fn luma_plane(&self) -> PlaneU8 {
        match self.channels {
            Channels::Gray => PlaneU8::from_vec(self.width, self.height, self.data.clone()),
            Channels::Rgb => {
                let mut out = Vec::with_capacity(self.width * self.height);
                for px in self.data.chunks_exact(3) {
                    let luma =
                        0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32;
                    out.push(luma.round().min(255.0) as u8);
                }
                PlaneU8::from_vec(self.width, self.height, out)
            }
        }
    }

    /// Grayscale rendition of this raster (standard luma weighting).
    pub fn to_grayscale(&self) -> Raster {
        Raster::from_gray(self.luma_plane())
    }
}

#[cfg(test)]
mod tests {
    use super::{Channels, Raster};
    use crate::error::SketchError;

    #[test]
    fn rejects_zero_dimensions() {
        let err = Raster::new(0, 10, Channels::Gray, vec![]).unwrap_err();
        assert!(matches!(err, SketchError::InvalidInput(_)));
    }

    #[test]
    fn rejects_mismatched_buffer() {
        let err = Raster::new(4, 4, Channels::Rgb, vec![0u8; 16]).unwrap_err();
        assert!(matches!(err, SketchError::InvalidInput(_)));
    }

    #[test]
    fn luma_of_pure_channels() {
        let data = vec![
            255, 0, 0, // red
            0, 255, 0, // green
            0, 0, 255, // blue
            255, 255, 255, // white
        ];
        let raster = Raster::new(4, 1, Channels::Rgb, data).unwrap();
        let luma = raster.luma_plane();
        assert_eq!(luma.data, vec![76, 150, 29, 255]);
    }

    #[test]
    fn gray_plane_rejects_rgb() {
        let raster = Raster::new(2, 2, Channels::Rgb, vec![0u8; 12]).unwrap();
        assert!(raster.gray_plane().is_err());
        assert!(raster.to_grayscale().gray_plane().is_ok());
    }

    #[test]
    fn rgb_replication_interleaves_channels() {
        let plane = crate::image::PlaneU8::from_vec(2, 1, vec![10, 20]);
        let rgb = Raster::rgb_from_gray(&plane);
        assert_eq!(rgb.channels(), Channels::Rgb);
        assert_eq!(rgb.data(), &[10, 10, 10, 20, 20, 20]);
    }
}

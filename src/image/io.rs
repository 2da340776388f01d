//! Decode/encode helpers for the collaborator edge.
//!
//! - `load_raster`: read a PNG/JPEG/etc. into an interleaved RGB `Raster`.
//! - `save_raster`: write a `Raster` to disk, format chosen by extension.
//!
//! The core pipeline never touches the filesystem itself; these helpers exist
//! so a host application has a one-call path from file to `Raster` and back.

use super::{Channels, Raster};
use ::image::{DynamicImage, GrayImage, RgbImage};
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to an 8-bit RGB raster.
pub fn load_raster(path: &Path) -> Result<Raster, String> {
    let img = ::image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Raster::new(width, height, Channels::Rgb, img.into_raw())
        .map_err(|e| format!("Decoded image is malformed: {e}"))
}

/// Save a raster to disk, creating parent directories as needed.
pub fn save_raster(path: &Path, raster: &Raster) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let width = raster.width() as u32;
    let height = raster.height() as u32;
    let data = raster.data().to_vec();
    let dynamic = match raster.channels() {
        Channels::Gray => GrayImage::from_raw(width, height, data)
            .map(DynamicImage::ImageLuma8)
            .ok_or_else(|| "Failed to create grayscale buffer".to_string())?,
        Channels::Rgb => RgbImage::from_raw(width, height, data)
            .map(DynamicImage::ImageRgb8)
            .ok_or_else(|| "Failed to create RGB buffer".to_string())?,
    };
    dynamic
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_raster, save_raster};
    use crate::image::{Channels, Raster};

    #[test]
    fn png_roundtrip_preserves_pixels() {
        let path = std::env::temp_dir().join("pencil_sketch_io_test.png");
        let data: Vec<u8> = (0..4 * 3 * 3).map(|i| (i * 11 % 256) as u8).collect();
        let raster = Raster::new(4, 3, Channels::Rgb, data).unwrap();

        save_raster(&path, &raster).unwrap();
        let back = load_raster(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(back, raster);
    }

    #[test]
    fn grayscale_rasters_save_as_single_channel() {
        let path = std::env::temp_dir().join("pencil_sketch_io_gray_test.png");
        let raster = Raster::new(5, 2, Channels::Gray, vec![9u8; 10]).unwrap();
        save_raster(&path, &raster).unwrap();
        // Loading always yields RGB; the gray value replicates.
        let back = load_raster(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(back.channels(), Channels::Rgb);
        assert!(back.data().iter().all(|&v| v == 9));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_raster(std::path::Path::new("/nonexistent/photo.png")).unwrap_err();
        assert!(err.contains("/nonexistent/photo.png"));
    }
}

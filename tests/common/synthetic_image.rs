use pencil_sketch::{Channels, Raster};

/// Generates a solid-color RGB raster.
pub fn solid_rgb(width: usize, height: usize, value: u8) -> Raster {
    Raster::new(width, height, Channels::Rgb, vec![value; width * height * 3])
        .expect("valid solid buffer")
}

/// Generates a solid grayscale raster.
pub fn solid_gray(width: usize, height: usize, value: u8) -> Raster {
    Raster::new(width, height, Channels::Gray, vec![value; width * height])
        .expect("valid solid buffer")
}

/// Generates a high-contrast checkerboard RGB raster.
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize) -> Raster {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let val = if (cx + cy) & 1 == 0 { 32u8 } else { 220u8 };
            data.extend_from_slice(&[val, val, val]);
        }
    }
    Raster::new(width, height, Channels::Rgb, data).expect("valid checkerboard buffer")
}

/// Generates a deterministic speckled grayscale raster (hash-noise).
pub fn noise_gray(width: usize, height: usize) -> Raster {
    let data: Vec<u8> = (0..width * height)
        .map(|i| {
            let mut v = i as u64;
            v = v.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (v >> 33) as u8
        })
        .collect();
    Raster::new(width, height, Channels::Gray, data).expect("valid noise buffer")
}

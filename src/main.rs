use pencil_sketch::{advise_parameters, extract_statistics, render};
use pencil_sketch::{Channels, Raster};

fn main() {
    // Demo stub: builds a synthetic color image and runs the full flow.
    let w = 320usize;
    let h = 240usize;
    let mut data = Vec::with_capacity(w * h * 3);
    for y in 0..h {
        for x in 0..w {
            let v = if ((x / 20) + (y / 20)) % 2 == 0 { 30 } else { 220 };
            data.extend_from_slice(&[v, v, v]);
        }
    }
    let color = Raster::new(w, h, Channels::Rgb, data).expect("valid synthetic buffer");

    let stats = extract_statistics(&color.to_grayscale()).expect("grayscale input");
    println!(
        "contrast={:.1} edge_density={:.2} noise={:.1} smoothness={:.2} strong_ratio={:.3}",
        stats.contrast,
        stats.edge_density,
        stats.noise_level,
        stats.smoothness,
        stats.strong_edge_ratio
    );

    let params = advise_parameters(&stats);
    println!("advised: {params:?}");

    let result = render(&color, &params).expect("3-channel input");
    println!(
        "sketch: {}x{} ({:?})",
        result.image.width(),
        result.image.height(),
        result.image.channels()
    );
}

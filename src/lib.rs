#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod advisor;
pub mod error;
pub mod image;
pub mod params;
pub mod pipeline;
pub mod stats;

// Building-block modules – public, but considered unstable internals.
pub mod edges;
pub mod filters;

// --- High-level re-exports -------------------------------------------------

// Main entry points: the three core operations.
pub use crate::advisor::advise_parameters;
pub use crate::pipeline::{render, SketchMode, SketchResult};
pub use crate::stats::{extract_statistics, StatsDescriptor};

// Data carriers and configuration.
pub use crate::error::SketchError;
pub use crate::image::{Channels, Raster};
pub use crate::params::FilterParams;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use pencil_sketch::prelude::*;
///
/// # fn main() -> Result<(), SketchError> {
/// let (w, h) = (64usize, 48usize);
/// let color = Raster::new(w, h, Channels::Rgb, vec![200u8; w * h * 3])?;
///
/// let stats = extract_statistics(&color.to_grayscale())?;
/// let params = advise_parameters(&stats);
/// let result = render(&color, &params)?;
/// assert_eq!(result.image.width(), w);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::advisor::advise_parameters;
    pub use crate::error::SketchError;
    pub use crate::image::{Channels, Raster};
    pub use crate::params::FilterParams;
    pub use crate::pipeline::{render, SketchMode, SketchResult};
    pub use crate::stats::{extract_statistics, StatsDescriptor};
}

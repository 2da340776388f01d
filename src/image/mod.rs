pub mod f32;
pub mod io;
pub mod raster;
pub mod traits;
pub mod u8;

pub use self::f32::PlaneF32;
pub use self::io::{load_raster, save_raster};
pub use self::raster::{Channels, Raster};
pub use self::traits::{PlaneView, PlaneViewMut};
pub use self::u8::PlaneU8;

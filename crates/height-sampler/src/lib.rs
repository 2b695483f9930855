//! Reduces a decoded raster to a normalized [`Heightmap`] grid.
//!
//! - [`sample_heightmap`] — nearest-neighbor downsampling with a fixed channel policy
//! - [`decode_raster`] — decode PNG/JPEG/... bytes into an owned RGBA buffer
//! - [`heightmap_to_png`] — render a heightmap back out as an 8-bit grayscale PNG

pub mod decode;
pub mod errors;
pub mod sample;

pub use decode::{decode_raster, heightmap_to_png};
pub use errors::SampleError;
pub use sample::sample_heightmap;

pub use relief_types::{ChannelMode, GridSize, Heightmap, RasterImage, RasterView};

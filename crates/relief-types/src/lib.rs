pub mod geometry;
pub mod heightmap;
pub mod raster;

pub use geometry::*;
pub use heightmap::*;
pub use raster::*;

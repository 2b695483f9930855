//! Height-field triangulation and STL serialization.
//!
//! # Key Components
//!
//! - [`relief_triangles`] — lazy two-triangles-per-cell stream over a [`Heightmap`]
//! - [`encode_relief`] — binary STL bytes, written straight from the stream
//! - [`encode_relief_ascii`] — the textual STL variant, same triangle order
//! - [`read_binary_stl`] — parse binary STL bytes back for inspection

pub mod ascii;
pub mod binary;
pub mod errors;
pub mod options;
pub mod reader;
pub mod triangulate;

pub use ascii::encode_relief_ascii;
pub use binary::{
    encode_relief, expected_stl_len, stl_triangle_count, HEADER_LEN, TRIANGLE_RECORD_LEN,
};
pub use errors::EncodeError;
pub use options::EncodeOptions;
pub use reader::{read_binary_stl, StlDocument};
pub use triangulate::relief_triangles;

pub use relief_types::{Heightmap, Triangle, Vertex};

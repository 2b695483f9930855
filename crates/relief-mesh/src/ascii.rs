use std::fmt::Write;

use relief_types::Heightmap;
use tracing::{debug, instrument};

use crate::binary::validated_triangle_count;
use crate::errors::EncodeError;
use crate::options::EncodeOptions;
use crate::triangulate::relief_triangles;

/// Encode a heightmap as an ASCII STL string.
///
/// Triangle order and validation match [`crate::encode_relief`]. The solid
/// name is the sanitized header, cut at the first line break.
#[instrument(skip(heightmap, options), fields(width = heightmap.width(), height = heightmap.height()))]
pub fn encode_relief_ascii(heightmap: &Heightmap, options: &EncodeOptions) -> Result<String, EncodeError> {
    let tri_count = validated_triangle_count(heightmap, options)? as usize;

    let header = options.header_text();
    let name = header.lines().next().unwrap_or_default().trim();

    let mut out = String::new();
    out.try_reserve(tri_count.saturating_mul(200))
        .map_err(|_| EncodeError::AllocationFailure {
            bytes: tri_count.saturating_mul(200),
        })?;

    // fmt::Write into a String cannot fail.
    let _ = writeln!(out, "solid {name}");
    for tri in relief_triangles(heightmap, options.depth_scale, options.grid_scale) {
        let [nx, ny, nz] = tri.normal.to_array();
        let _ = writeln!(out, "  facet normal {nx} {ny} {nz}");
        out.push_str("    outer loop\n");
        for v in &tri.vertices {
            let _ = writeln!(out, "      vertex {} {} {}", v.x, v.y, v.z);
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }
    let _ = writeln!(out, "endsolid {name}");

    debug!(triangles = tri_count, bytes = out.len(), "encoded ASCII STL");
    Ok(out)
}

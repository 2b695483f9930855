use relief_types::{Heightmap, Triangle};
use tracing::{debug, instrument};

use crate::errors::EncodeError;
use crate::options::EncodeOptions;
use crate::triangulate::relief_triangles;

/// Size of the free-text header.
pub const HEADER_LEN: usize = 80;
/// Size of one facet record: normal, three vertices, attribute count.
pub const TRIANGLE_RECORD_LEN: usize = 50;

/// Exact binary STL size for a `width × height` grid, `84 + 50 * triangles`.
///
/// Returns `None` for grids with no cells or when the size overflows `usize`.
pub fn expected_stl_len(width: usize, height: usize) -> Option<usize> {
    let cells = width
        .checked_sub(1)
        .filter(|&c| c > 0)?
        .checked_mul(height.checked_sub(1).filter(|&c| c > 0)?)?;
    cells
        .checked_mul(2 * TRIANGLE_RECORD_LEN)?
        .checked_add(HEADER_LEN + 4)
}

/// Encode a heightmap as a binary STL relief surface.
///
/// Binary STL layout (little-endian):
/// - 80 bytes: header, NUL padded
/// - 4 bytes: u32 triangle count
/// - Per triangle (50 bytes each):
///   - 12 bytes: normal (always 0, 0, 0)
///   - 36 bytes: 3 vertices (3 × 3 × f32)
///   - 2 bytes: attribute byte count (0u16)
///
/// Triangles are written directly from [`relief_triangles`]; the returned
/// buffer is exactly [`expected_stl_len`] bytes. On error no buffer escapes.
#[instrument(skip(heightmap, options), fields(width = heightmap.width(), height = heightmap.height()))]
pub fn encode_relief(heightmap: &Heightmap, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    let tri_count = validated_triangle_count(heightmap, options)?;
    let mut buf = allocate_stl_buffer(heightmap.width(), heightmap.height())?;

    let header = options.header_text();
    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(HEADER_LEN)]);
    buf.resize(HEADER_LEN, 0u8);

    buf.extend_from_slice(&tri_count.to_le_bytes());

    for tri in relief_triangles(heightmap, options.depth_scale, options.grid_scale) {
        write_triangle(&mut buf, &tri);
    }

    debug_assert_eq!(Some(buf.len()), expected_stl_len(heightmap.width(), heightmap.height()));
    debug!(triangles = tri_count, bytes = buf.len(), "encoded binary STL");
    Ok(buf)
}

/// Triangle count field (bytes 80..84) of a binary STL buffer.
pub fn stl_triangle_count(bytes: &[u8]) -> Option<u32> {
    let field = bytes.get(HEADER_LEN..HEADER_LEN + 4)?;
    Some(u32::from_le_bytes([field[0], field[1], field[2], field[3]]))
}

/// Empty buffer with room for exactly [`expected_stl_len`] bytes.
pub(crate) fn allocate_stl_buffer(width: usize, height: usize) -> Result<Vec<u8>, EncodeError> {
    let size = expected_stl_len(width, height)
        .ok_or(EncodeError::AllocationFailure { bytes: usize::MAX })?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(size)
        .map_err(|_| EncodeError::AllocationFailure { bytes: size })?;
    Ok(buf)
}

/// Shared validation for the binary and ASCII writers.
pub(crate) fn validated_triangle_count(
    heightmap: &Heightmap,
    options: &EncodeOptions,
) -> Result<u32, EncodeError> {
    if heightmap.width() < 2 || heightmap.height() < 2 {
        return Err(EncodeError::ZeroGrid {
            width: heightmap.width(),
            height: heightmap.height(),
        });
    }
    heightmap.check().map_err(|e| EncodeError::InvalidHeightmap {
        reason: e.to_string(),
    })?;
    options.validate()?;

    let count = heightmap.cell_count() * 2;
    u32::try_from(count).map_err(|_| EncodeError::TooManyTriangles { count })
}

fn write_triangle(buf: &mut Vec<u8>, tri: &Triangle) {
    for c in tri.normal.to_array() {
        buf.extend_from_slice(&c.to_le_bytes());
    }
    for v in &tri.vertices {
        for c in v.to_array() {
            buf.extend_from_slice(&c.to_le_bytes());
        }
    }
    // Attribute byte count
    buf.extend_from_slice(&0u16.to_le_bytes());
}

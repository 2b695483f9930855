use height_sampler::{heightmap_to_png, sample_heightmap};
use relief_mesh::{encode_relief, encode_relief_ascii};
use relief_types::{Heightmap, RasterView};
use tracing::{info, instrument};

use crate::errors::ExportError;
use crate::request::ExportRequest;

/// Reduce the source raster to the request's heightmap grid.
pub fn sample_request(source: RasterView<'_>, request: &ExportRequest) -> Result<Heightmap, ExportError> {
    Ok(sample_heightmap(source, request.grid, request.channel_mode)?)
}

/// Sample `source` and encode the result as a binary STL relief.
///
/// Scale factors are checked before sampling so a bad request fails fast.
#[instrument(skip(source, request), fields(grid = ?request.grid))]
pub fn export_relief(source: RasterView<'_>, request: &ExportRequest) -> Result<Vec<u8>, ExportError> {
    let options = request.encode_options();
    options.validate()?;
    let heightmap = sample_request(source, request)?;
    let stl = encode_relief(&heightmap, &options)?;
    info!(bytes = stl.len(), "relief export complete");
    Ok(stl)
}

/// Same as [`export_relief`] but producing ASCII STL text.
#[instrument(skip(source, request), fields(grid = ?request.grid))]
pub fn export_relief_ascii(source: RasterView<'_>, request: &ExportRequest) -> Result<String, ExportError> {
    let options = request.encode_options();
    options.validate()?;
    let heightmap = sample_request(source, request)?;
    Ok(encode_relief_ascii(&heightmap, &options)?)
}

/// Sample `source` and render the heightmap as a grayscale PNG.
#[instrument(skip(source, request), fields(grid = ?request.grid))]
pub fn export_depth_map(source: RasterView<'_>, request: &ExportRequest) -> Result<Vec<u8>, ExportError> {
    let heightmap = sample_request(source, request)?;
    let png = heightmap_to_png(&heightmap)?;
    info!(bytes = png.len(), "depth map export complete");
    Ok(png)
}

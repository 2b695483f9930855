use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use relief_types::{Heightmap, RasterImage};
use tracing::{debug, instrument};

use crate::errors::SampleError;

/// Decode an encoded image (PNG, JPEG, GIF, WebP, BMP) into an RGBA8 buffer.
#[instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_raster(bytes: &[u8]) -> Result<RasterImage, SampleError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| SampleError::SourceDecodeFailure(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    debug!(width, height, "decoded source raster");
    Ok(RasterImage::new(
        rgba.into_raw(),
        width as usize,
        height as usize,
        4,
    ))
}

/// Render a heightmap as an 8-bit grayscale PNG, `round(v * 255)` per sample.
pub fn heightmap_to_png(heightmap: &Heightmap) -> Result<Vec<u8>, SampleError> {
    let width = u32::try_from(heightmap.width())
        .map_err(|_| SampleError::DepthMapEncode("width exceeds u32".to_string()))?;
    let height = u32::try_from(heightmap.height())
        .map_err(|_| SampleError::DepthMapEncode("height exceeds u32".to_string()))?;

    let gray: Vec<u8> = heightmap
        .samples()
        .iter()
        .map(|&v| (v * 255.0).round() as u8)
        .collect();

    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(&gray, width, height, ExtendedColorType::L8)
        .map_err(|e| SampleError::DepthMapEncode(e.to_string()))?;
    Ok(out)
}

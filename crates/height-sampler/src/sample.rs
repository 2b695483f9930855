use relief_types::{ChannelMode, GridSize, Heightmap, RasterView};
use tracing::{debug, instrument};

use crate::errors::SampleError;

/// Downsample `source` to a `grid.width × grid.height` heightmap.
///
/// Target cell `(x, y)` reads source pixel
/// `(floor(x * src_w / W), floor(y * src_h / H))` and reduces it with `mode`.
/// The source is only read; the result owns its samples.
#[instrument(skip(source), fields(src_w = source.width, src_h = source.height))]
pub fn sample_heightmap(
    source: RasterView<'_>,
    grid: GridSize,
    mode: ChannelMode,
) -> Result<Heightmap, SampleError> {
    if grid.width < 2 || grid.height < 2 {
        return Err(SampleError::InvalidResolution {
            width: grid.width,
            height: grid.height,
        });
    }
    let too_large = SampleError::GridTooLarge {
        width: grid.width,
        height: grid.height,
    };
    let cells = grid.width.checked_mul(grid.height).ok_or(too_large.clone())?;
    let bytes = cells
        .checked_mul(std::mem::size_of::<f32>())
        .ok_or(too_large)?;
    validate_source(&source)?;

    let mut samples = Vec::new();
    samples
        .try_reserve_exact(cells)
        .map_err(|_| SampleError::AllocationFailure { bytes })?;
    for y in 0..grid.height {
        let sy = scale_index(y, source.height, grid.height);
        for x in 0..grid.width {
            let sx = scale_index(x, source.width, grid.width);
            samples.push(mode.reduce(source.pixel(sx, sy)));
        }
    }
    debug!(samples = samples.len(), ?mode, "sampled heightmap");

    Ok(Heightmap::from_samples(grid.width, grid.height, samples)?)
}

/// `floor(i * src / dst)` without intermediate overflow.
fn scale_index(i: usize, src: usize, dst: usize) -> usize {
    (i as u128 * src as u128 / dst as u128) as usize
}

fn validate_source(source: &RasterView<'_>) -> Result<(), SampleError> {
    if source.stride < 3 {
        return Err(SampleError::InvalidStride {
            stride: source.stride,
        });
    }
    let expected = source.expected_len().unwrap_or(usize::MAX);
    if source.width == 0 || source.height == 0 || source.pixels.len() != expected {
        return Err(SampleError::EmptySource {
            expected,
            actual: source.pixels.len(),
        });
    }
    Ok(())
}

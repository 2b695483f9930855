/// Errors while turning a source raster into a heightmap.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SampleError {
    #[error("grid resolution {width}x{height} is too small (need at least 2x2)")]
    InvalidResolution { width: usize, height: usize },

    #[error("grid resolution {width}x{height} is too large")]
    GridTooLarge { width: usize, height: usize },

    #[error("could not allocate {bytes} bytes for the heightmap")]
    AllocationFailure { bytes: usize },

    #[error("source buffer holds {actual} bytes but its dimensions require {expected}")]
    EmptySource { expected: usize, actual: usize },

    #[error("pixel stride {stride} is too small (need at least 3 bytes per pixel)")]
    InvalidStride { stride: usize },

    #[error("failed to decode source image: {0}")]
    SourceDecodeFailure(String),

    #[error(transparent)]
    Heightmap(#[from] relief_types::HeightmapError),

    #[error("failed to encode depth map: {0}")]
    DepthMapEncode(String),
}

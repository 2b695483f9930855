/// Errors while encoding a heightmap as an STL mesh (or reading one back).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodeError {
    #[error("heightmap {width}x{height} has no cells to triangulate")]
    ZeroGrid { width: usize, height: usize },

    #[error("heightmap is inconsistent: {reason}")]
    InvalidHeightmap { reason: String },

    #[error("{name} must be a positive finite number, got {value}")]
    InvalidScale { name: &'static str, value: f32 },

    #[error("{count} triangles exceed the STL u32 triangle count")]
    TooManyTriangles { count: usize },

    #[error("could not allocate {bytes} bytes for the mesh buffer")]
    AllocationFailure { bytes: usize },

    #[error("malformed STL: {reason}")]
    Malformed { reason: String },
}

use height_sampler::SampleError;
use relief_mesh::EncodeError;

/// Errors surfaced by an export call. All are terminal for that call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("invalid export request: {0}")]
    InvalidRequest(String),

    #[error("invalid base64 payload: {0}")]
    Payload(String),
}

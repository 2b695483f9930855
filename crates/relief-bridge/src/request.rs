use relief_mesh::EncodeOptions;
use relief_types::{ChannelMode, GridSize};
use serde::{Deserialize, Serialize};

use crate::errors::ExportError;

/// Parameters of one export. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportRequest {
    /// Heightmap resolution the source raster is reduced to.
    pub grid: GridSize,
    pub channel_mode: ChannelMode,
    /// Maximum carve depth in model units (mm by convention).
    pub depth_scale: f32,
    /// Spacing between grid samples in model units.
    pub grid_scale: f32,
    pub header: Option<String>,
}

impl Default for ExportRequest {
    fn default() -> Self {
        let encode = EncodeOptions::default();
        Self {
            grid: GridSize::default(),
            channel_mode: ChannelMode::default(),
            depth_scale: encode.depth_scale,
            grid_scale: encode.grid_scale,
            header: encode.header,
        }
    }
}

impl ExportRequest {
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            depth_scale: self.depth_scale,
            grid_scale: self.grid_scale,
            header: self.header.clone(),
        }
    }

    /// Check the request before any sampling work is done.
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.grid.width < 2 || self.grid.height < 2 {
            return Err(ExportError::InvalidRequest(format!(
                "grid {}x{} must be at least 2x2",
                self.grid.width, self.grid.height
            )));
        }
        self.encode_options()
            .validate()
            .map_err(|e| ExportError::InvalidRequest(e.to_string()))
    }
}

/// Parse and validate an export request from JSON.
pub fn load_request(json: &str) -> Result<ExportRequest, ExportError> {
    let request: ExportRequest =
        serde_json::from_str(json).map_err(|e| ExportError::InvalidRequest(e.to_string()))?;
    request.validate()?;
    Ok(request)
}

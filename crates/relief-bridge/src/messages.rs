use serde::{Deserialize, Serialize};

use crate::request::ExportRequest;

/// Messages from the host (UI thread, CLI, service) to the export engine.
/// Binary payloads are base64 encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostToEngine {
    /// Decode an image, sample it, and encode a relief STL.
    ExportStl {
        image_base64: String,
        #[serde(default)]
        params: ExportRequest,
        /// Emit ASCII STL text instead of binary.
        #[serde(default)]
        ascii: bool,
    },
    /// Decode an image, sample it, and render the heightmap as PNG.
    ExportDepthMap {
        image_base64: String,
        #[serde(default)]
        params: ExportRequest,
    },
    /// Parse a binary STL and report its header and size.
    InspectStl { stl_base64: String },
}

/// Messages from the export engine back to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineToHost {
    /// Binary STL is ready.
    StlReady {
        stl_base64: String,
        triangle_count: u32,
        byte_len: usize,
    },
    /// ASCII STL is ready.
    AsciiStlReady { stl_text: String, triangle_count: u32 },
    /// Depth-map PNG is ready.
    DepthMapReady {
        png_base64: String,
        width: usize,
        height: usize,
    },
    /// Result of an `InspectStl` request.
    StlInspected { header: String, triangle_count: usize },
    /// The request failed; nothing was produced.
    Error { message: String },
}

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use height_sampler::decode_raster;
use relief_mesh::{read_binary_stl, stl_triangle_count, EncodeError};
use tracing::warn;

use crate::errors::ExportError;
use crate::messages::{EngineToHost, HostToEngine};
use crate::pipeline::{export_depth_map, export_relief, export_relief_ascii};

/// Handle one host message and return the response.
///
/// Failures become [`EngineToHost::Error`]; no partial output is returned.
pub fn dispatch(msg: HostToEngine) -> EngineToHost {
    match handle_message(msg) {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "export request failed");
            EngineToHost::Error {
                message: e.to_string(),
            }
        }
    }
}

/// Parse a JSON `HostToEngine`, dispatch it, and serialize the `EngineToHost` reply.
pub fn process_message(json_input: &str) -> String {
    let response = match serde_json::from_str::<HostToEngine>(json_input) {
        Ok(msg) => dispatch(msg),
        Err(e) => EngineToHost::Error {
            message: format!("Failed to parse message: {}", e),
        },
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(
            r#"{{"type":"Error","message":"Serialization failed: {}"}}"#,
            e
        )
    })
}

fn handle_message(msg: HostToEngine) -> Result<EngineToHost, ExportError> {
    match msg {
        HostToEngine::ExportStl {
            image_base64,
            params,
            ascii,
        } => {
            params.validate()?;
            let raster = decode_raster(&decode_payload(&image_base64)?)?;
            if ascii {
                let stl_text = export_relief_ascii(raster.view(), &params)?;
                let facets = stl_text.matches("endfacet").count();
                Ok(EngineToHost::AsciiStlReady {
                    triangle_count: u32::try_from(facets).unwrap_or(u32::MAX),
                    stl_text,
                })
            } else {
                let stl = export_relief(raster.view(), &params)?;
                let triangle_count = stl_triangle_count(&stl).ok_or(EncodeError::Malformed {
                    reason: "encoded buffer has no triangle count".to_string(),
                })?;
                Ok(EngineToHost::StlReady {
                    byte_len: stl.len(),
                    stl_base64: STANDARD.encode(&stl),
                    triangle_count,
                })
            }
        }

        HostToEngine::ExportDepthMap {
            image_base64,
            params,
        } => {
            params.validate()?;
            let raster = decode_raster(&decode_payload(&image_base64)?)?;
            let png = export_depth_map(raster.view(), &params)?;
            Ok(EngineToHost::DepthMapReady {
                png_base64: STANDARD.encode(&png),
                width: params.grid.width,
                height: params.grid.height,
            })
        }

        HostToEngine::InspectStl { stl_base64 } => {
            let doc = read_binary_stl(&decode_payload(&stl_base64)?)?;
            Ok(EngineToHost::StlInspected {
                header: doc.header_text(),
                triangle_count: doc.triangle_count(),
            })
        }
    }
}

fn decode_payload(data: &str) -> Result<Vec<u8>, ExportError> {
    STANDARD
        .decode(data.trim())
        .map_err(|e| ExportError::Payload(e.to_string()))
}

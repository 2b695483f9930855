//! Request-scoped relief export: raster in, STL or depth-map bytes out.
//!
//! Everything a call needs travels in an [`ExportRequest`]; nothing is kept
//! between calls. [`dispatch`] exposes the same pipeline as JSON messages for
//! a web worker or any other host that speaks JSON.

pub mod dispatch;
pub mod errors;
pub mod messages;
pub mod pipeline;
pub mod request;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use dispatch::{dispatch, process_message};
pub use errors::ExportError;
pub use messages::{HostToEngine, EngineToHost};
pub use pipeline::{export_depth_map, export_relief, export_relief_ascii, sample_request};
pub use request::{load_request, ExportRequest};

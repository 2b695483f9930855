//! WASM entry points for a browser web worker.
//!
//! Only compiled for the `wasm32` target. Each call is independent; no
//! engine state lives between calls.

use wasm_bindgen::prelude::*;

use crate::pipeline::export_relief;
use crate::request::ExportRequest;

/// Install the panic hook. Safe to call more than once.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Process a JSON `HostToEngine` message and return a JSON `EngineToHost` reply.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    crate::dispatch::process_message(json_input)
}

/// Export raw RGBA pixels straight to binary STL bytes.
///
/// `params_json` is an `ExportRequest`; an empty string uses the defaults.
/// Returns a `Uint8Array` on success, throws the error message otherwise.
#[wasm_bindgen]
pub fn export_stl(
    rgba: &[u8],
    width: usize,
    height: usize,
    params_json: &str,
) -> Result<Vec<u8>, JsValue> {
    let request = if params_json.trim().is_empty() {
        ExportRequest::default()
    } else {
        crate::request::load_request(params_json).map_err(|e| JsValue::from_str(&e.to_string()))?
    };
    let view = relief_types::RasterView::new(rgba, width, height, 4);
    export_relief(view, &request).map_err(|e| JsValue::from_str(&e.to_string()))
}

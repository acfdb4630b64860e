//! Browser entry points.
//!
//! Parameters cross the boundary as plain JS objects with the wire names of
//! [`Parameters`]; the geometry comes back the same way, so a renderer can
//! read `geometry.points.B_start` or `geometry.rotations.total` directly.

use crate::errors::GeometryError;
use crate::geometry::Geometry;
use crate::params::Parameters;
use serde::Serialize;
use serde_wasm_bindgen::{Serializer, from_value};
use wasm_bindgen::prelude::*;

pub mod geometry_js;
pub mod point_js;

// Optional: better panic messages in the browser console.
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

pub(crate) fn error_to_js(error: GeometryError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize to JS: {e}")))
}

pub(crate) fn params_from_js(params: JsValue) -> Result<Parameters, JsValue> {
    from_value(params).map_err(|e| {
        error_to_js(GeometryError::MalformedParameters(e.to_string()))
    })
}

/// The reference bicycle as a JS object, a starting point for UI state.
#[wasm_bindgen(js_name = defaultParameters)]
pub fn default_parameters() -> Result<JsValue, JsValue> {
    to_js(&Parameters::default())
}

/// Solves `params` and returns the whole geometry record as a JS object.
///
/// Rejects with the error message when the parameters are malformed or the
/// frame cannot be built.
#[wasm_bindgen(js_name = computeGeometry)]
pub fn compute_geometry(params: JsValue) -> Result<JsValue, JsValue> {
    let params = params_from_js(params)?;
    let geometry = Geometry::compute(&params).map_err(error_to_js)?;
    to_js(&geometry)
}

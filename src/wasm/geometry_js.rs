//! A solved geometry kept on the Rust side, for renderers that query a few
//! points per frame instead of copying the whole record.

use crate::geometry::{Geometry, Wheel};
use crate::points::PointId;
use crate::wasm::{error_to_js, params_from_js, point_js::NamedPointJs, to_js};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct GeometryJs {
    pub(crate) inner: Geometry,
}

#[wasm_bindgen]
impl GeometryJs {
    #[wasm_bindgen(constructor)]
    pub fn new(params: JsValue) -> Result<GeometryJs, JsValue> {
        let params = params_from_js(params)?;
        let inner = Geometry::compute(&params).map_err(error_to_js)?;
        Ok(GeometryJs { inner })
    }

    /// Point by wire name, `undefined` when the name is unknown or the
    /// point was not produced (e.g. bar ends when disabled).
    pub fn point(&self, name: &str) -> Option<NamedPointJs> {
        let id = PointId::from_wire(name)?;
        let position = self.inner.points.get(id)?;
        Some(NamedPointJs::new(id, *position))
    }

    #[wasm_bindgen(js_name = totalRotation)]
    pub fn total_rotation(&self) -> f64 {
        self.inner.rotations.total as f64
    }

    #[wasm_bindgen(js_name = bbHeight)]
    pub fn bb_height(&self) -> f64 {
        self.inner.sizes.bb_height as f64
    }

    /// Spoke pattern already turned and moved onto its axle.
    #[wasm_bindgen(js_name = placedSpokes)]
    pub fn placed_spokes(&self, front: bool) -> Result<JsValue, JsValue> {
        let wheel = if front { Wheel::Front } else { Wheel::Rear };
        let pattern = self.inner.placed_spoke_pattern(wheel).map_err(error_to_js)?;
        to_js(&pattern)
    }

    #[wasm_bindgen(js_name = toObject)]
    pub fn to_object(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner)
    }
}

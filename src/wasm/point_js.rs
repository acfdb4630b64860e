//! Named points handed to JavaScript.

use crate::float_types::Real;
use crate::points::PointId;
use nalgebra::Point3;
use wasm_bindgen::prelude::*;

/// A solved point together with its wire name. Read-only on the JS side.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct NamedPointJs {
    id: PointId,
    position: Point3<Real>,
}

impl NamedPointJs {
    pub(crate) const fn new(id: PointId, position: Point3<Real>) -> Self {
        NamedPointJs { id, position }
    }
}

#[wasm_bindgen]
impl NamedPointJs {
    /// Wire name, e.g. `"B_start"`.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.id.as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.position.x as f64
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.position.y as f64
    }

    #[wasm_bindgen(getter)]
    pub fn z(&self) -> f64 {
        self.position.z as f64
    }

    /// `[x, y, z]`, the layout three.js `Vector3.fromArray` takes.
    #[wasm_bindgen(js_name = toArray)]
    pub fn to_array(&self) -> Vec<f64> {
        vec![self.x(), self.y(), self.z()]
    }

    #[wasm_bindgen(js_name = distanceTo)]
    pub fn distance_to(&self, other: &NamedPointJs) -> f64 {
        nalgebra::distance(&self.position, &other.position) as f64
    }
}

/// Every point name the solver can produce, in a stable order.
#[wasm_bindgen(js_name = pointNames)]
pub fn point_names() -> Vec<String> {
    PointId::ALL.iter().map(|id| id.as_str().to_string()).collect()
}

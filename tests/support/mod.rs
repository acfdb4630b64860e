//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use bikegeo::{Geometry, Parameters, PointId, float_types::Real};
use nalgebra::Point3;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// The worked frame: 20/22 seat/top tube, 70° seat tube, 50° steering axis,
/// 13 + 1.1 wheels front and rear, both lengths unconstrained.
pub fn scenario_params() -> Parameters {
    Parameters {
        b_length: 20.0,
        a_length: 22.0,
        b_angle: 70.0,
        b_drop: 2.0,
        d_angle: 50.0,
        f_length: 3.0,
        h_length: 8.0,
        s_length: 17.0,
        t_length: 0.0,
        r1_size: 13.0,
        t1_size: 1.1,
        r2_size: 13.0,
        t2_size: 1.1,
        f_mode: false,
        s_mode: false,
        ..Parameters::default()
    }
}

pub fn solve(params: &Parameters) -> Geometry {
    Geometry::compute(params).expect("parameters should solve")
}

pub fn point(geometry: &Geometry, id: PointId) -> Point3<Real> {
    geometry
        .points
        .require(id)
        .unwrap_or_else(|e| panic!("{id} missing: {e}"))
}

/// Returns the bounding box `[min_x, min_y, min_z, max_x, max_y, max_z]`
/// of every solved point.
pub fn bounding_box(geometry: &Geometry) -> [Real; 6] {
    let mut bounds = [Real::MAX, Real::MAX, Real::MAX, Real::MIN, Real::MIN, Real::MIN];
    for (_, p) in geometry.points.iter() {
        for axis in 0..3 {
            bounds[axis] = bounds[axis].min(p[axis]);
            bounds[axis + 3] = bounds[axis + 3].max(p[axis]);
        }
    }
    bounds
}

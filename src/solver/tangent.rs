//! External tangents between two circles in the XY plane.
//!
//! Used for the chain/belt line between sprocket and driver and for the
//! ground line touching both wheels.

use crate::errors::GeometryError;
use crate::float_types::{EPSILON, FRAC_PI_2, Real};
use crate::traits::Transform;
use nalgebra::{Matrix4, Point3, Vector2, Vector3};
use serde::Serialize;

/// A segment between the contact points on the first and second circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TangentLine {
    pub start: Point3<Real>,
    pub end: Point3<Real>,
}

impl TangentLine {
    pub fn midpoint(&self) -> Point3<Real> {
        nalgebra::center(&self.start, &self.end)
    }

    /// Direction of `start → end` in the XY plane.
    pub fn angle(&self) -> Real {
        let d = self.end - self.start;
        d.y.atan2(d.x)
    }
}

impl Transform for TangentLine {
    fn transform(&self, matrix: &Matrix4<Real>) -> Self {
        TangentLine {
            start: matrix.transform_point(&self.start),
            end: matrix.transform_point(&self.end),
        }
    }
}

/// Both external tangents of a circle pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExternalTangents {
    /// Contact normal turned counter-clockwise from the center line.
    pub side1: TangentLine,
    /// Contact normal turned clockwise from the center line.
    pub side2: TangentLine,
}

impl ExternalTangents {
    /// The side whose midpoint has the smaller Y.
    pub fn lower(&self) -> TangentLine {
        if self.side2.midpoint().y <= self.side1.midpoint().y {
            self.side2
        } else {
            self.side1
        }
    }
}

/// **Mathematical Foundation: External Tangent of Two Circles**
///
/// With `d = |c₂ − c₁|`, `φ = atan2(Δy, Δx)` and
/// ```text
/// α = asin((r₁ − r₂) / d)
/// ```
/// the outward contact normal is `m = (cos ψ, sin ψ)` with
/// `ψ = φ ± (π/2 − α)`, and the contact points are `cᵢ + rᵢ·m`.
///
/// Only X and Y of the centers are used; results lie in `z = 0`.
/// Fails with [`GeometryError::TangentDomain`] when the centers coincide or
/// `d < |r₁ − r₂|` (one circle swallows the other).
pub fn external_tangents(
    c1: &Point3<Real>,
    r1: Real,
    c2: &Point3<Real>,
    r2: Real,
) -> Result<ExternalTangents, GeometryError> {
    let delta = Vector2::new(c2.x - c1.x, c2.y - c1.y);
    let distance = delta.norm();
    let radius_difference = r1 - r2;

    if !distance.is_finite() || distance < EPSILON || distance < radius_difference.abs() {
        tracing::warn!(distance, radius_difference, "circles admit no external tangent");
        return Err(GeometryError::TangentDomain {
            distance,
            radius_difference: radius_difference.abs(),
        });
    }

    let phi = delta.y.atan2(delta.x);
    let alpha = (radius_difference / distance).clamp(-1.0, 1.0).asin();
    let sweep = FRAC_PI_2 - alpha;

    let planar_1 = Point3::new(c1.x, c1.y, 0.0);
    let planar_2 = Point3::new(c2.x, c2.y, 0.0);
    let line = |psi: Real| {
        let m = Vector3::new(psi.cos(), psi.sin(), 0.0);
        TangentLine {
            start: planar_1 + m * r1,
            end: planar_2 + m * r2,
        }
    };

    Ok(ExternalTangents {
        side1: line(phi + sweep),
        side2: line(phi - sweep),
    })
}

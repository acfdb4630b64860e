//! Checked scalar and vector helpers shared by the solver stages.
//!
//! Every `acos` in the solver goes through [`acos_checked`] so that an
//! incompatible parameter combination surfaces as
//! [`GeometryError::InvalidConfiguration`] instead of a NaN point. The one
//! `asin` (external tangents) is guarded by its own distance check.

use crate::errors::GeometryError;
use crate::float_types::{EPSILON, Real};
use nalgebra::{Point3, Vector3};

/// Allowed overshoot of an inverse-trig argument past ±1 caused by rounding.
const DOMAIN_SLACK: Real = 1e-9;

/// Unit-free direction "along angle `angle`" scaled by `length`:
/// ```text
/// (−sin a, cos a, 0)·length
/// ```
#[inline]
pub fn polar(angle: Real, length: Real) -> Vector3<Real> {
    Vector3::new(-length * angle.sin(), length * angle.cos(), 0.0)
}

/// Linear interpolation between two points, `t = 0` gives `a`.
#[inline]
pub fn lerp(a: &Point3<Real>, b: &Point3<Real>, t: Real) -> Point3<Real> {
    a + (b - a) * t
}

/// Same point with its Z replaced.
#[inline]
pub fn with_z(p: &Point3<Real>, z: Real) -> Point3<Real> {
    Point3::new(p.x, p.y, z)
}

/// Normalizes `v`, failing when it is too short to carry a direction.
pub fn normalize_checked(
    v: &Vector3<Real>,
    fields: &[&'static str],
    what: &str,
) -> Result<Vector3<Real>, GeometryError> {
    let norm = v.norm();
    if !norm.is_finite() || norm < EPSILON {
        return Err(GeometryError::invalid_configuration(
            fields,
            format!("{what} has no direction (length {norm})"),
        ));
    }
    Ok(v / norm)
}

fn check_unit_domain(x: Real, fields: &[&'static str], what: &str) -> Result<Real, GeometryError> {
    if !x.is_finite() || x.abs() > 1.0 + DOMAIN_SLACK {
        return Err(GeometryError::invalid_configuration(
            fields,
            format!("{what}: ratio {x} is outside [-1, 1]"),
        ));
    }
    Ok(x.clamp(-1.0, 1.0))
}

/// `acos` that rejects arguments outside [-1, 1] instead of returning NaN.
pub fn acos_checked(x: Real, fields: &[&'static str], what: &str) -> Result<Real, GeometryError> {
    check_unit_domain(x, fields, what).map(Real::acos)
}

/// Divides, failing when the denominator is numerically zero.
pub fn div_checked(
    numerator: Real,
    denominator: Real,
    fields: &[&'static str],
    what: &str,
) -> Result<Real, GeometryError> {
    if !denominator.is_finite() || denominator.abs() < EPSILON {
        return Err(GeometryError::invalid_configuration(
            fields,
            format!("{what} is degenerate (denominator {denominator})"),
        ));
    }
    Ok(numerator / denominator)
}

use crate::float_types::Real;
use nalgebra::{Matrix4, Point3, Rotation3, Translation3, Vector3};

/// Rigid transformations over anything that carries solved 3D points.
///
/// Implementors only supply [`Transform::transform`]; the leveling, mirroring
/// and placement helpers are all expressed through it so every point of a
/// collection receives exactly the same matrix.
pub trait Transform: Sized {
    fn transform(&self, matrix: &Matrix4<Real>) -> Self;

    /// Returns a new Self translated by vector.
    fn translate_vector(&self, vector: Vector3<Real>) -> Self {
        self.transform(&Translation3::from(vector).to_homogeneous())
    }

    /// Returns a new Self translated by x, y, and z.
    fn translate(&self, x: Real, y: Real, z: Real) -> Self {
        self.translate_vector(Vector3::new(x, y, z))
    }

    /// Moves every point vertically by `dy`.
    fn shift_y(&self, dy: Real) -> Self {
        self.translate(0.0, dy, 0.0)
    }

    /// Rotates in the XY plane about `pivot` by `angle` radians; Z passes through.
    ///
    /// ```text
    /// p' = q + R(θ)·(p − q)
    /// ```
    fn rotate_about_z(&self, pivot: &Point3<Real>, angle: Real) -> Self {
        let to_origin = Translation3::from(-pivot.coords).to_homogeneous();
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), angle).to_homogeneous();
        let back = Translation3::from(pivot.coords).to_homogeneous();
        self.transform(&(back * rotation * to_origin))
    }

    /// Mirrors across the bike's central (XY) plane by negating Z.
    fn mirror_z(&self) -> Self {
        self.transform(&Matrix4::new_nonuniform_scaling(&Vector3::new(1.0, 1.0, -1.0)))
    }
}

impl Transform for Point3<Real> {
    fn transform(&self, matrix: &Matrix4<Real>) -> Self {
        matrix.transform_point(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::{FRAC_PI_2, PI};
    use approx::assert_relative_eq;

    #[test]
    fn rotate_about_pivot_keeps_z() {
        let p = Point3::new(2.0, 1.0, 5.0);
        let q = Point3::new(1.0, 1.0, -3.0);
        let r = p.rotate_about_z(&q, FRAC_PI_2);
        assert_relative_eq!(r, Point3::new(1.0, 2.0, 5.0), epsilon = 1e-12);
    }

    #[test]
    fn half_turn_twice_is_identity() {
        let p = Point3::new(-6.7, 2.0, 1.5);
        let q = Point3::new(0.0, 2.0, 0.0);
        let r = p.rotate_about_z(&q, PI).rotate_about_z(&q, PI);
        assert_relative_eq!(r, p, epsilon = 1e-12);
    }

    #[test]
    fn mirror_negates_only_z() {
        let p = Point3::new(1.0, -2.0, 3.0);
        assert_eq!(p.mirror_z(), Point3::new(1.0, -2.0, -3.0));
        assert_eq!(p.shift_y(2.0), Point3::new(1.0, 0.0, 3.0));
    }
}

//! Stem, built in a local frame with the steerer along +Y and aligned to the
//! leveled head tube.

use super::LeveledSkeleton;
use crate::errors::GeometryError;
use crate::float_types::{FRAC_PI_2, Real};
use crate::math::normalize_checked;
use crate::params::Parameters;
use crate::points::{PointId, PointSet};
use crate::traits::Transform;
use nalgebra::{Point3, Vector3};

/// Angle that turns local −Y onto `reference`.
pub fn alignment_angle(reference: &Vector3<Real>) -> Real {
    reference.y.atan2(reference.x) + FRAC_PI_2
}

#[derive(Debug, Clone, PartialEq)]
pub struct StemPoints {
    pub(crate) points: PointSet,
    /// Rotation shared with the handlebar so both follow the head tube.
    pub(crate) alignment: Real,
}

impl StemPoints {
    /// Takes the leveled skeleton so the stem follows the head tube as it
    /// sits on the ground.
    pub fn solve(leveled: &LeveledSkeleton, params: &Parameters) -> Result<Self, GeometryError> {
        let f_end = leveled.points.require(PointId::FEnd)?;
        let p_end = leveled.points.require(PointId::PEnd)?;

        let reference = normalize_checked(&(f_end - p_end), &["H_length", "P_length"], "steerer")?;
        let alignment = alignment_angle(&reference);

        let clamp = params.stem_clamp_height;
        let rise = params.r_angle.to_radians();
        let clamp_center = Point3::new(0.0, -clamp / 2.0, 0.0);
        let reach = Vector3::new(-params.r_length * rise.cos(), params.r_length * rise.sin(), 0.0);

        let local = PointSet::from_iter([
            (PointId::StemTop, Point3::origin()),
            (PointId::StemBase, Point3::new(0.0, -clamp, 0.0)),
            (PointId::StemClamp, clamp_center),
            (PointId::StemEnd, clamp_center + reach),
        ]);
        let points = local
            .rotate_about_z(&Point3::origin(), alignment)
            .translate_vector(p_end.coords);

        Ok(StemPoints { points, alignment })
    }

    pub const fn points(&self) -> &PointSet {
        &self.points
    }

    pub const fn alignment(&self) -> Real {
        self.alignment
    }
}

//! Chainstay neck, elbow and dropout on both sides of the rear wheel.

use super::LeveledSkeleton;
use crate::errors::GeometryError;
use crate::math::{normalize_checked, with_z};
use crate::params::Parameters;
use crate::points::{PointId, PointSet};
use crate::traits::Transform;

pub fn chainstay_points(
    leveled: &LeveledSkeleton,
    params: &Parameters,
) -> Result<PointSet, GeometryError> {
    let b_start = leveled.points.require(PointId::BStart)?;
    let s_end = leveled.points.require(PointId::SEnd)?;

    let dir = normalize_checked(&(s_end - b_start), &["S_length"], "chainstay")?;
    let neck = b_start + dir * params.chainstay_neck_length;
    let elbow = (neck + dir * params.chainstay_elbow_length)
        .rotate_about_z(&neck, params.chainstay_pitch.to_radians());

    let mut points = PointSet::new();
    for (sign, neck_id, elbow_id, end_id) in [
        (
            1.0,
            PointId::ChainstayNeckRight,
            PointId::ChainstayElbowRight,
            PointId::ChainstayEndRight,
        ),
        (
            -1.0,
            PointId::ChainstayNeckLeft,
            PointId::ChainstayElbowLeft,
            PointId::ChainstayEndLeft,
        ),
    ] {
        points = points
            .with(neck_id, with_z(&neck, sign * params.mid_axle_z))
            .with(elbow_id, with_z(&elbow, sign * params.rear_axle_z))
            .with(end_id, with_z(&s_end, sign * params.rear_axle_z));
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Geometry;
    use approx::assert_relative_eq;

    #[test]
    fn pitch_bends_about_the_neck() {
        let flat = Geometry::compute(&Parameters::default()).unwrap();
        let pitched = Geometry::compute(&Parameters {
            chainstay_pitch: 12.0,
            ..Parameters::default()
        })
        .unwrap();

        let neck = flat.points.require(PointId::ChainstayNeckRight).unwrap();
        let a = flat.points.require(PointId::ChainstayElbowRight).unwrap();
        let b = pitched.points.require(PointId::ChainstayElbowRight).unwrap();
        assert_relative_eq!((a - neck).xy().norm(), (b - neck).xy().norm(), epsilon = 1e-9);
        assert!((a - b).norm() > 1e-3);
        assert_eq!(
            flat.points.require(PointId::ChainstayEndLeft).unwrap(),
            pitched.points.require(PointId::ChainstayEndLeft).unwrap()
        );
    }

    #[test]
    fn ends_on_the_rear_axle() {
        let params = Parameters::default();
        let g = Geometry::compute(&params).unwrap();
        let s_end = g.points.require(PointId::SEnd).unwrap();
        let end = g.points.require(PointId::ChainstayEndRight).unwrap();
        assert_eq!((end.x, end.y, end.z), (s_end.x, s_end.y, params.rear_axle_z));
    }
}

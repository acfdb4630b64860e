//! Fork crown, elbows and dropouts, walked down the leveled steering axis.

use super::LeveledSkeleton;
use crate::errors::GeometryError;
use crate::math::{lerp, normalize_checked, with_z};
use crate::params::Parameters;
use crate::points::{PointId, PointSet};
use nalgebra::Vector3;

pub fn fork_points(leveled: &LeveledSkeleton, params: &Parameters) -> Result<PointSet, GeometryError> {
    let f_end = leveled.points.require(PointId::FEnd)?;
    let t_end = leveled.points.require(PointId::TEnd)?;

    let axis = normalize_checked(&(t_end - f_end), &["F_length", "T_length"], "fork")?;
    // axis turned a quarter clockwise: the side the fork bows toward
    let forward = Vector3::new(axis.y, -axis.x, 0.0);

    let crown = f_end + axis * params.fork_crown_length;
    let half = params.front_axle_z;

    let mut points = PointSet::new().with(PointId::ForkCrown, crown);
    for (z, crown_id, elbow_id, base_id) in [
        (half, PointId::ForkCrownRight, PointId::ForkElbowRight, PointId::ForkBaseRight),
        (-half, PointId::ForkCrownLeft, PointId::ForkElbowLeft, PointId::ForkBaseLeft),
    ] {
        let top = with_z(&crown, z);
        let base = with_z(&t_end, z);
        let elbow = lerp(&top, &base, params.fork_elbow_ratio) + forward * params.fork_elbow_offset;
        points = points
            .with(crown_id, top)
            .with(elbow_id, elbow)
            .with(base_id, base);
    }
    Ok(points)
}

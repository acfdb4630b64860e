use super::LeveledSkeleton;
use crate::errors::GeometryError;
use crate::params::Parameters;
use crate::points::{PointId, PointSet};
use nalgebra::Vector3;

/// Saddle nose and tail around the seat post top, tilted by `Z_angle`.
///
/// Runs on leveled points so a zero tilt is parallel to the ground.
pub fn seat_points(leveled: &LeveledSkeleton, params: &Parameters) -> Result<PointSet, GeometryError> {
    let z_end = leveled.points.require(PointId::ZEnd)?;
    let tilt = params.z_angle.to_radians();
    let half = Vector3::new(tilt.cos(), -tilt.sin(), 0.0) * (params.seat_length / 2.0);

    Ok(PointSet::from_iter([
        (PointId::SeatFront, z_end - half),
        (PointId::SeatRear, z_end + half),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Geometry;
    use approx::assert_relative_eq;

    #[test]
    fn level_saddle_is_ground_parallel() {
        let params = Parameters {
            r1_size: 11.0,
            ..Parameters::default()
        };
        let g = Geometry::compute(&params).unwrap();
        let front = g.points.require(PointId::SeatFront).unwrap();
        let rear = g.points.require(PointId::SeatRear).unwrap();
        assert_relative_eq!(front.y, rear.y, epsilon = 1e-9);
        assert_relative_eq!((rear - front).norm(), params.seat_length, epsilon = 1e-9);
        assert!(front.x < rear.x);
    }

    #[test]
    fn positive_tilt_raises_the_nose() {
        let params = Parameters {
            z_angle: 8.0,
            ..Parameters::default()
        };
        let g = Geometry::compute(&params).unwrap();
        let front = g.points.require(PointId::SeatFront).unwrap();
        let rear = g.points.require(PointId::SeatRear).unwrap();
        assert!(front.y > rear.y);
    }
}

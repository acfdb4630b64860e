//! Axle centers: the planar skeleton points pushed out along +Z.

use super::{PrimarySkeleton, Sizes};
use crate::errors::GeometryError;
use crate::math::with_z;
use crate::params::Parameters;
use crate::points::{PointId, PointSet};

#[derive(Debug, Clone, PartialEq)]
pub struct AxleSkeleton {
    pub(crate) points: PointSet,
    pub(crate) sizes: Sizes,
}

impl AxleSkeleton {
    pub const fn points(&self) -> &PointSet {
        &self.points
    }

    pub const fn sizes(&self) -> Sizes {
        self.sizes
    }

    /// `T_end`, `B_start` and `S_end` copied with their Z set to the
    /// configured axle half widths. X and Y are unchanged.
    pub fn derive(primary: &PrimarySkeleton, params: &Parameters) -> Result<Self, GeometryError> {
        let p = &primary.points;
        let points = p
            .with(
                PointId::FrontAxle,
                with_z(&p.require(PointId::TEnd)?, params.front_axle_z),
            )
            .with(
                PointId::MidAxle,
                with_z(&p.require(PointId::BStart)?, params.mid_axle_z),
            )
            .with(
                PointId::RearAxle,
                with_z(&p.require(PointId::SEnd)?, params.rear_axle_z),
            );

        Ok(AxleSkeleton {
            points,
            sizes: primary.sizes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axles_only_gain_z() {
        let params = Parameters::default();
        let primary = PrimarySkeleton::solve(&params).unwrap();
        let axles = AxleSkeleton::derive(&primary, &params).unwrap();
        for (planar, axle, z) in [
            (PointId::TEnd, PointId::FrontAxle, params.front_axle_z),
            (PointId::BStart, PointId::MidAxle, params.mid_axle_z),
            (PointId::SEnd, PointId::RearAxle, params.rear_axle_z),
        ] {
            let a = axles.points.require(planar).unwrap();
            let b = axles.points.require(axle).unwrap();
            assert_eq!((a.x, a.y), (b.x, b.y));
            assert_eq!(b.z, z);
        }
    }
}

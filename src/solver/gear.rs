//! Chain/belt line between the sprocket and the driver.

use super::tangent::{TangentLine, external_tangents};
use super::{DrivetrainSkeleton, Sizes};
use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::math::with_z;
use crate::points::{PointId, PointSet};
use nalgebra::Point3;

/// Both runs of the chain, each from the sprocket contact to the driver contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearTangent {
    pub side1: TangentLine,
    pub side2: TangentLine,
}

impl GearTangent {
    /// Tangents between the sprocket and driver circles.
    ///
    /// Contact points are lifted back to the Z of their own gear so the
    /// chain runs in the gears' planes.
    pub fn new(
        spkt_center: &Point3<Real>,
        spkt_radius: Real,
        drv_center: &Point3<Real>,
        drv_radius: Real,
    ) -> Result<Self, GeometryError> {
        let tangents = external_tangents(spkt_center, spkt_radius, drv_center, drv_radius)
            .map_err(|e| e.attribute_to(&["D2_count", "D1_count", "D_width"]))?;
        let lift = |line: TangentLine| TangentLine {
            start: with_z(&line.start, spkt_center.z),
            end: with_z(&line.end, drv_center.z),
        };
        Ok(GearTangent {
            side1: lift(tangents.side1),
            side2: lift(tangents.side2),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GearedSkeleton {
    pub(crate) points: PointSet,
    pub(crate) sizes: Sizes,
}

impl GearedSkeleton {
    pub const fn points(&self) -> &PointSet {
        &self.points
    }

    pub const fn sizes(&self) -> Sizes {
        self.sizes
    }

    pub fn solve(drivetrain: &DrivetrainSkeleton) -> Result<Self, GeometryError> {
        let sizes = drivetrain.sizes;
        let p = &drivetrain.points;
        let gear = GearTangent::new(
            &p.require(PointId::SpktCenter)?,
            sizes.d2,
            &p.require(PointId::DrvCenter)?,
            sizes.d1,
        )?;

        let points = p
            .with(PointId::TangentPointS1, gear.side1.start)
            .with(PointId::TangentPointD1, gear.side1.end)
            .with(PointId::TangentPointS2, gear.side2.start)
            .with(PointId::TangentPointD2, gear.side2.end);

        Ok(GearedSkeleton { points, sizes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_larger_than_gap_is_a_domain_error() {
        let err = GearTangent::new(&Point3::origin(), 3.5, &Point3::new(1.0, 0.0, 0.0), 0.5)
            .unwrap_err();
        match err {
            GeometryError::InvalidConfiguration { fields, .. } => {
                assert!(fields.contains(&"D1_count"));
                assert!(fields.contains(&"D2_count"));
            },
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn contacts_keep_gear_planes() {
        let gear = GearTangent::new(
            &Point3::new(0.0, 2.0, 2.05),
            3.5,
            &Point3::new(16.9, 0.0, 4.45),
            1.43,
        )
        .unwrap();
        assert_eq!(gear.side1.start.z, 2.05);
        assert_eq!(gear.side2.end.z, 4.45);
    }
}

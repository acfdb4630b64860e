//! Bottom-bracket stack, cranks and driver.
//!
//! The drive side is built at the origin along +Z (headset, spacers,
//! sprocket, crank) and then moved onto the mid axle; the non-drive side is
//! the same stack along −Z without a sprocket. Stance and right-hand-drive
//! are applied last as whole-set transforms.

use super::{AxleSkeleton, Sizes};
use crate::errors::GeometryError;
use crate::float_types::{PI, Real};
use crate::params::Parameters;
use crate::points::{PointId, PointSet};
use crate::traits::Transform;
use nalgebra::{Point3, Vector3};

/// Every point the right-hand-drive mirror moves.
pub const DRIVETRAIN_POINTS: &[PointId] = &[
    PointId::BbHsStart,
    PointId::BbHsEnd,
    PointId::BbSpacerEnd,
    PointId::SpktCenter,
    PointId::CrankCenter,
    PointId::CrankEnd,
    PointId::NdsHsStart,
    PointId::NdsHsEnd,
    PointId::NdsSpacerEnd,
    PointId::NdsCrankCenter,
    PointId::NdsCrankEnd,
    PointId::DrvCenter,
];

/// The two points the stance rotation swaps.
pub const CRANK_ENDS: &[PointId] = &[PointId::CrankEnd, PointId::NdsCrankEnd];

/// Which pedal sits forward once the drivetrain may have been mirrored.
///
/// Right-hand-drive inverts the requested stance.
// TODO: check the RHD inversion against a physically mirrored build.
pub const fn effective_stance(is_rhd: bool, left_foot_forward: bool) -> bool {
    if is_rhd {
        !left_foot_forward
    } else {
        left_foot_forward
    }
}

/// Rotates both crank ends half a turn about the bottom bracket.
pub fn rotate_stance(points: &PointSet, bottom_bracket: &Point3<Real>) -> PointSet {
    points.map_only(CRANK_ENDS, |p| p.rotate_about_z(bottom_bracket, PI))
}

/// Negates Z of every drivetrain point.
pub fn mirror_drive_side(points: &PointSet) -> PointSet {
    points.map_only(DRIVETRAIN_POINTS, |p| p.mirror_z())
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrivetrainSkeleton {
    pub(crate) points: PointSet,
    pub(crate) sizes: Sizes,
}

impl DrivetrainSkeleton {
    pub const fn points(&self) -> &PointSet {
        &self.points
    }

    pub const fn sizes(&self) -> Sizes {
        self.sizes
    }

    pub fn solve(axles: &AxleSkeleton, params: &Parameters) -> Result<Self, GeometryError> {
        let mid = axles.points.require(PointId::MidAxle)?;
        let rear = axles.points.require(PointId::RearAxle)?;
        let bottom_bracket = axles.points.require(PointId::BStart)?;

        let z = Vector3::z();
        let spacer_stack = params.bb_spacer_width * params.bb_spacer_count;

        let hs_start = Point3::origin();
        let hs_end = hs_start + z * params.bb_base_height;
        let spacer_end = hs_end + z * spacer_stack;
        let spkt_center = spacer_end + z * params.spkt_attach_distance;
        let crank_center = spkt_center + z * params.crank_attach_distance;
        let crank_end = crank_center + Vector3::new(-params.crank_length, 0.0, params.crank_offset);

        let drive_side = PointSet::from_iter([
            (PointId::BbHsStart, hs_start),
            (PointId::BbHsEnd, hs_end),
            (PointId::BbSpacerEnd, spacer_end),
            (PointId::SpktCenter, spkt_center),
            (PointId::CrankCenter, crank_center),
            (PointId::CrankEnd, crank_end),
        ])
        .translate_vector(mid.coords);

        // mirrored stack, the crank sits where the drive crank would
        let nds_hs_end = hs_start - z * params.bb_base_height;
        let nds_spacer_end = nds_hs_end - z * spacer_stack;
        let nds_crank_center =
            nds_spacer_end - z * (params.spkt_attach_distance + params.crank_attach_distance);
        let nds_crank_end =
            nds_crank_center + Vector3::new(params.crank_length, 0.0, -params.crank_offset);

        let non_drive_side = PointSet::from_iter([
            (PointId::NdsHsStart, hs_start),
            (PointId::NdsHsEnd, nds_hs_end),
            (PointId::NdsSpacerEnd, nds_spacer_end),
            (PointId::NdsCrankCenter, nds_crank_center),
            (PointId::NdsCrankEnd, nds_crank_end),
        ])
        .translate(mid.x, mid.y, -mid.z);

        let drv_center = rear + z * params.drv_attach_distance;

        let points = axles
            .points
            .merged(&drive_side)
            .merged(&non_drive_side)
            .with(PointId::DrvCenter, drv_center);

        let stance = effective_stance(params.is_rhd, params.left_foot_forward);
        let points = if stance {
            points
        } else {
            rotate_stance(&points, &bottom_bracket)
        };
        let points = if params.is_rhd {
            mirror_drive_side(&points)
        } else {
            points
        };

        tracing::debug!(is_rhd = params.is_rhd, stance, "drivetrain solved");

        Ok(DrivetrainSkeleton {
            points,
            sizes: axles.sizes,
        })
    }
}

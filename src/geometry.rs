//! The solved bicycle: every named point, derived sizes, the leveling
//! rotations, resolved frame members and both spoke patterns.
//!
//! [`Geometry::compute`] is the only entry point. It is a pure function of
//! [`Parameters`]; a failed solve returns an error and no partial geometry.

use crate::constants::NIPPLE_INSET;
use crate::errors::GeometryError;
use crate::float_types::TOLERANCE;
use crate::frame::FrameMembers;
use crate::params::Parameters;
use crate::points::{PointId, PointSet};
use crate::solver::chainstay::chainstay_points;
use crate::solver::fork::fork_points;
use crate::solver::handlebar::handlebar_points;
use crate::solver::seat::seat_points;
use crate::solver::spokes::{Flange, HubDimensions, SpokePattern};
use crate::solver::{
    AxleSkeleton, DrivetrainSkeleton, GearedSkeleton, LeveledSkeleton, PrimarySkeleton, StemPoints,
    TangentLine,
};
use crate::traits::Transform;
use nalgebra::Point3;
use serde::Serialize;

pub use crate::solver::leveling::ground_tangent;
pub use crate::solver::{Rotations, Sizes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wheel {
    Front,
    Rear,
}

/// Spoke patterns in wheel-local coordinates.
///
/// Renderers place them with [`Geometry::placed_spoke_pattern`] or by
/// applying `rotations.total` themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpokePatterns {
    pub front: SpokePattern,
    pub rear: SpokePattern,
}

impl SpokePatterns {
    pub fn generate(params: &Parameters) -> Result<Self, GeometryError> {
        let hub = HubDimensions::from_params(params);
        for (field, rim) in [("R1_size", params.r1_size), ("R2_size", params.r2_size)] {
            if rim - NIPPLE_INSET <= hub.flange_radius {
                tracing::warn!(field, rim, flange = hub.flange_radius, "rim inside hub flange");
                return Err(GeometryError::invalid_configuration(
                    &[field, "HubFlangeRadius"],
                    format!("rim radius {rim} leaves no room for spokes around the hub"),
                ));
            }
        }

        // the dished flange follows the drivetrain after the RHD mirror
        let drive_side = if params.is_rhd { Flange::Left } else { Flange::Right };
        Ok(SpokePatterns {
            front: SpokePattern::generate(params.r1_size, &hub, None, params.spoke_cross),
            rear: SpokePattern::generate(params.r2_size, &hub, Some(drive_side), params.spoke_cross),
        })
    }

    pub fn get(&self, wheel: Wheel) -> &SpokePattern {
        match wheel {
            Wheel::Front => &self.front,
            Wheel::Rear => &self.rear,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    pub points: PointSet,
    pub sizes: Sizes,
    pub rotations: Rotations,
    pub frame_members: FrameMembers,
    pub spoke_patterns: SpokePatterns,
    pub params: Parameters,
}

impl Geometry {
    /// Runs the full pipeline.
    ///
    /// ```
    /// use bikegeo::{Geometry, Parameters, PointId};
    ///
    /// let geometry = Geometry::compute(&Parameters::default()).unwrap();
    /// let ground = geometry.ground_tangent().unwrap();
    /// assert!(ground.start.y.abs() < 1e-9);
    /// assert!(geometry.points.contains(PointId::TangentPointS1));
    /// ```
    pub fn compute(params: &Parameters) -> Result<Self, GeometryError> {
        params.validate()?;

        let primary = PrimarySkeleton::solve(params)?;
        let axles = AxleSkeleton::derive(&primary, params)?;
        let drivetrain = DrivetrainSkeleton::solve(&axles, params)?;
        let geared = GearedSkeleton::solve(&drivetrain)?;
        let leveled = LeveledSkeleton::level(&geared)?;
        let stem = StemPoints::solve(&leveled, params)?;

        let points = leveled
            .points
            .merged(&fork_points(&leveled, params)?)
            .merged(&chainstay_points(&leveled, params)?)
            .merged(&seat_points(&leveled, params)?)
            .merged(&stem.points)
            .merged(&handlebar_points(&stem, params)?);

        let geometry = Geometry {
            frame_members: FrameMembers::resolve_all(&points)?,
            spoke_patterns: SpokePatterns::generate(params)?,
            points,
            sizes: leveled.sizes,
            rotations: leveled.rotations,
            params: params.clone(),
        };
        geometry.ensure_finite()?;
        if !geometry.is_grounded()? {
            tracing::warn!(
                wheel_tangent = geometry.rotations.wheel_tangent,
                "ground line is off y = 0 beyond tolerance"
            );
        }

        tracing::debug!(
            points = geometry.points.len(),
            members = geometry.frame_members.len(),
            total_rotation = geometry.rotations.total,
            "geometry solved"
        );
        Ok(geometry)
    }

    /// Post-hoc scan of everything a renderer reads.
    pub fn ensure_finite(&self) -> Result<(), GeometryError> {
        self.points.ensure_finite()?;
        self.sizes.ensure_finite()?;
        let rotations = [
            ("rotations.wheelbase", self.rotations.wheelbase),
            ("rotations.wheelTangent", self.rotations.wheel_tangent),
            ("rotations.total", self.rotations.total),
        ];
        if let Some((name, _)) = rotations.iter().find(|(_, v)| !v.is_finite()) {
            return Err(GeometryError::NonFiniteValue((*name).to_string()));
        }
        self.spoke_patterns.front.ensure_finite("front")?;
        self.spoke_patterns.rear.ensure_finite("rear")
    }

    /// Recomputes the wheels' ground line from the solved axles.
    pub fn ground_tangent(&self) -> Result<TangentLine, GeometryError> {
        ground_tangent(
            &self.points.require(PointId::TEnd)?,
            self.sizes.w1,
            &self.points.require(PointId::SEnd)?,
            self.sizes.w2,
        )
    }

    /// Whether both wheels touch `y = 0` within [`TOLERANCE`].
    pub fn is_grounded(&self) -> Result<bool, GeometryError> {
        let ground = self.ground_tangent()?;
        Ok(ground.start.y.abs() <= TOLERANCE && ground.end.y.abs() <= TOLERANCE)
    }

    /// A wheel's spoke pattern turned by `rotations.total` and moved onto its
    /// axle. The hub stays centred on the bike plane.
    pub fn placed_spoke_pattern(&self, wheel: Wheel) -> Result<SpokePattern, GeometryError> {
        let axle = match wheel {
            Wheel::Front => self.points.require(PointId::TEnd)?,
            Wheel::Rear => self.points.require(PointId::SEnd)?,
        };
        Ok(self
            .spoke_patterns
            .get(wheel)
            .rotate_about_z(&Point3::origin(), self.rotations.total)
            .translate(axle.x, axle.y, 0.0))
    }
}

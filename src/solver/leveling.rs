//! The two global rotations that put the bicycle on the ground.
//!
//! 1. **Wheelbase leveling**: rotate about the rear axle until the front
//!    axle lies straight ahead of it.
//! 2. **Wheel-tangent leveling**: rotate about the midpoint of the wheels'
//!    common ground tangent until that tangent is horizontal, then drop
//!    everything so the tangent sits on `y = 0`.
//!
//! Both act on the whole point set of the incoming stage. Anything attached
//! to a wheel (hubs, spokes, sprocket teeth) must turn by
//! [`Rotations::total`] rather than deriving its own angle.

use super::tangent::{TangentLine, external_tangents};
use super::{GearedSkeleton, Sizes};
use crate::errors::GeometryError;
use crate::float_types::{PI, Real};
use crate::points::{PointId, PointSet};
use crate::traits::Transform;
use nalgebra::Point3;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rotations {
    pub wheelbase: Real,
    pub wheel_tangent: Real,
    /// `wheelbase + wheel_tangent`; the one angle wheel-attached hardware uses.
    pub total: Real,
}

impl Rotations {
    pub const fn new(wheelbase: Real, wheel_tangent: Real) -> Self {
        Rotations {
            wheelbase,
            wheel_tangent,
            total: wheelbase + wheel_tangent,
        }
    }
}

/// Angle that turns the rear→front axle line to point along −X.
pub fn wheelbase_angle(front_axle: &Point3<Real>, rear_axle: &Point3<Real>) -> Real {
    -(front_axle.y - rear_axle.y).atan2(front_axle.x - rear_axle.x) + PI
}

/// Lower external tangent between the front and rear wheel circles.
pub fn ground_tangent(
    front_axle: &Point3<Real>,
    front_radius: Real,
    rear_axle: &Point3<Real>,
    rear_radius: Real,
) -> Result<TangentLine, GeometryError> {
    external_tangents(front_axle, front_radius, rear_axle, rear_radius)
        .map(|tangents| tangents.lower())
        .map_err(|e| e.attribute_to(&["R1_size", "T1_size", "R2_size", "T2_size"]))
}

/// The skeleton standing on `y = 0`.
///
/// Only [`LeveledSkeleton::level`] builds one, so a value of this type always
/// holds leveled points:
///
/// ```compile_fail,E0451
/// use bikegeo::Parameters;
/// use bikegeo::points::PointId;
/// use bikegeo::solver::{LeveledSkeleton, PrimarySkeleton, Rotations, TangentLine};
///
/// let primary = PrimarySkeleton::solve(&Parameters::default()).unwrap();
/// let p = primary.points();
/// let forged = LeveledSkeleton {
///     points: p.clone(),
///     sizes: primary.sizes(),
///     rotations: Rotations::new(0.0, 0.0),
///     ground: TangentLine {
///         start: p.require(PointId::TEnd).unwrap(),
///         end: p.require(PointId::SEnd).unwrap(),
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LeveledSkeleton {
    pub(crate) points: PointSet,
    pub(crate) sizes: Sizes,
    pub(crate) rotations: Rotations,
    /// The ground line after leveling; both ends at `y = 0`.
    pub(crate) ground: TangentLine,
}

impl LeveledSkeleton {
    pub fn level(geared: &GearedSkeleton) -> Result<Self, GeometryError> {
        let sizes = geared.sizes;

        let rear = geared.points.require(PointId::SEnd)?;
        let front = geared.points.require(PointId::TEnd)?;
        let wheelbase = wheelbase_angle(&front, &rear);
        let points = geared.points.rotate_about_z(&rear, wheelbase);

        let ground = ground_tangent(
            &points.require(PointId::TEnd)?,
            sizes.w1,
            &points.require(PointId::SEnd)?,
            sizes.w2,
        )?;
        let pivot = ground.midpoint();
        let wheel_tangent = -ground.angle();
        let drop = -pivot.rotate_about_z(&pivot, wheel_tangent).y;

        let points = points.rotate_about_z(&pivot, wheel_tangent).shift_y(drop);
        let ground = ground.rotate_about_z(&pivot, wheel_tangent).shift_y(drop);
        let points = points
            .with(PointId::GroundTangentFront, ground.start)
            .with(PointId::GroundTangentRear, ground.end);

        let rotations = Rotations::new(wheelbase, wheel_tangent);
        let sizes = Sizes {
            bb_height: points.require(PointId::BStart)?.y,
            ..sizes
        };

        tracing::debug!(
            wheelbase = rotations.wheelbase,
            wheel_tangent = rotations.wheel_tangent,
            bb_height = sizes.bb_height,
            "skeleton leveled"
        );

        Ok(LeveledSkeleton {
            points,
            sizes,
            rotations,
            ground,
        })
    }

    pub const fn points(&self) -> &PointSet {
        &self.points
    }

    pub const fn sizes(&self) -> Sizes {
        self.sizes
    }

    pub const fn rotations(&self) -> Rotations {
        self.rotations
    }

    /// The ground line after leveling; both ends at `y = 0`.
    pub const fn ground(&self) -> TangentLine {
        self.ground
    }
}

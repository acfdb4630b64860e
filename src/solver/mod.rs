//! The staged solver pipeline.
//!
//! Each stage is its own type and is only constructible from the stage
//! before it:
//!
//! ```text
//! PrimarySkeleton → AxleSkeleton → DrivetrainSkeleton → GearedSkeleton → LeveledSkeleton
//!                                                                          ├─ fork / chainstay / seat
//!                                                                          └─ StemPoints → handlebar
//! ```
//!
//! so nothing downstream of leveling can be fed pre-leveled points.

pub mod axle;
pub mod chainstay;
pub mod drivetrain;
pub mod fork;
pub mod gear;
pub mod handlebar;
pub mod leveling;
pub mod primary;
pub mod seat;
pub mod spokes;
pub mod stem;
pub mod tangent;

pub use axle::AxleSkeleton;
pub use drivetrain::DrivetrainSkeleton;
pub use gear::{GearTangent, GearedSkeleton};
pub use leveling::{LeveledSkeleton, Rotations};
pub use primary::{EffectiveLengths, PrimarySkeleton};
pub use stem::StemPoints;
pub use tangent::{ExternalTangents, TangentLine};

use crate::errors::GeometryError;
use crate::float_types::{Real, TAU};
use crate::params::Parameters;
use crate::points::PointSet;
use serde::Serialize;

/// Derived scalars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sizes {
    /// Front wheel outer radius (rim + tire).
    #[serde(rename = "W1_size")]
    pub w1: Real,
    /// Rear wheel outer radius (rim + tire).
    #[serde(rename = "W2_size")]
    pub w2: Real,
    /// Driver pitch radius.
    #[serde(rename = "D1_size")]
    pub d1: Real,
    /// Sprocket pitch radius.
    #[serde(rename = "D2_size")]
    pub d2: Real,
    /// `B_start.y` in the current stage's frame; ground clearance once leveled.
    #[serde(rename = "bbHeight")]
    pub bb_height: Real,
}

impl Sizes {
    pub fn from_params(params: &Parameters) -> Self {
        Sizes {
            w1: params.r1_size + params.t1_size,
            w2: params.r2_size + params.t2_size,
            d1: pitch_radius(params.d_width, params.d1_count),
            d2: pitch_radius(params.d_width, params.d2_count),
            bb_height: params.b_drop,
        }
    }

    pub fn ensure_finite(&self) -> Result<(), GeometryError> {
        let named = [
            ("W1_size", self.w1),
            ("W2_size", self.w2),
            ("D1_size", self.d1),
            ("D2_size", self.d2),
            ("bbHeight", self.bb_height),
        ];
        match named.iter().find(|(_, v)| !v.is_finite()) {
            Some((name, _)) => Err(GeometryError::NonFiniteValue((*name).to_string())),
            None => Ok(()),
        }
    }
}

/// Pitch radius of a gear with `teeth` teeth on a chain or belt of `pitch`:
/// ```text
/// r = pitch·teeth / 2π
/// ```
#[inline]
pub fn pitch_radius(pitch: Real, teeth: Real) -> Real {
    pitch * teeth / TAU
}

/// Pipeline checkpoints whose point sets can be inspected on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Primary,
    Axles,
    Drivetrain,
    Gears,
    Leveled,
}

/// Runs the pipeline up to and including `stage` and returns that stage's points.
pub fn stage_points(params: &Parameters, stage: Stage) -> Result<PointSet, GeometryError> {
    params.validate()?;
    let primary = PrimarySkeleton::solve(params)?;
    if stage == Stage::Primary {
        return Ok(primary.points);
    }
    let axles = AxleSkeleton::derive(&primary, params)?;
    if stage == Stage::Axles {
        return Ok(axles.points);
    }
    let drivetrain = DrivetrainSkeleton::solve(&axles, params)?;
    if stage == Stage::Drivetrain {
        return Ok(drivetrain.points);
    }
    let geared = GearedSkeleton::solve(&drivetrain)?;
    if stage == Stage::Gears {
        return Ok(geared.points);
    }
    Ok(LeveledSkeleton::level(&geared)?.points)
}

//! Main frame skeleton from tube lengths and angles.
//!
//! Works in the unleveled frame: the axle line is `y = 0`, the bottom
//! bracket sits at `(0, B_drop)`, +X runs toward the rear wheel.

use super::Sizes;
use crate::constants::{F_CONST, S_CONST};
use crate::errors::GeometryError;
use crate::float_types::{PI, Real};
use crate::frame::FrameMembers;
use crate::math::{acos_checked, div_checked, normalize_checked, polar};
use crate::params::Parameters;
use crate::points::{PointId, PointSet};
use nalgebra::Point3;

/// Fork and chainstay lengths after `F_mode`/`S_mode` are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveLengths {
    pub fork: Real,
    pub chainstay: Real,
}

impl EffectiveLengths {
    /// In constrained mode the wheel size plus a clearance drives the length.
    pub fn from_params(params: &Parameters, sizes: &Sizes) -> Self {
        EffectiveLengths {
            fork: if params.f_mode {
                sizes.w1 + F_CONST
            } else {
                params.f_length
            },
            chainstay: if params.s_mode {
                sizes.w2 + S_CONST
            } else {
                params.s_length
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrimarySkeleton {
    pub(crate) points: PointSet,
    pub(crate) sizes: Sizes,
    pub(crate) lengths: EffectiveLengths,
    /// Members resolved against this (unleveled) stage. Renderers use the
    /// final resolution on [`crate::Geometry`] instead.
    pub(crate) frame_members: FrameMembers,
}

impl PrimarySkeleton {
    pub fn solve(params: &Parameters) -> Result<Self, GeometryError> {
        let sizes = Sizes::from_params(params);
        let lengths = EffectiveLengths::from_params(params, &sizes);

        // constrained lengths derive from the wheel and its mode flag
        let fork_fields: &[&'static str] = if params.f_mode {
            &["F_mode", "R1_size", "T1_size"]
        } else {
            &["F_length"]
        };
        let chainstay_fields: &[&'static str] = if params.s_mode {
            &["S_mode", "R2_size", "T2_size"]
        } else {
            &["S_length"]
        };

        let b_angle = params.b_angle.to_radians();
        let d_angle = params.d_angle.to_radians();

        // vertical reach of fork + head tube along the steering axis
        let c = lengths.fork + params.h_length;
        let a_end_y = c * d_angle.cos();

        let b_start = Point3::new(0.0, params.b_drop, 0.0);
        let b_end = Point3::new(
            params.b_length * b_angle.sin(),
            params.b_length * b_angle.cos() + params.b_drop,
            0.0,
        );

        let s_fields = [chainstay_fields, &["B_drop"][..]].concat();
        let s_ratio = div_checked(b_start.y, lengths.chainstay, &s_fields, "chainstay")?;
        let s_angle = acos_checked(s_ratio, &s_fields, "chainstay too short for the bottom-bracket drop")?;
        let s_end = Point3::new(b_start.x + lengths.chainstay * s_angle.sin(), 0.0, 0.0);

        let a_fields = [&["A_length", "H_length"][..], fork_fields].concat();
        let a_ratio = div_checked(a_end_y - b_end.y, params.a_length, &a_fields, "top tube")?;
        let a_angle = acos_checked(a_ratio, &a_fields, "top tube cannot reach the head tube height")?;
        let a_end = Point3::new(b_end.x - params.a_length * a_angle.sin(), a_end_y, 0.0);

        // steering axis meets the axle line
        let provisional = a_end + polar(d_angle, 1.0);
        let t = div_checked(
            -a_end.y,
            provisional.y - a_end.y,
            &["D_angle"],
            "steering axis parallel to the axle line",
        )?;
        let d_end = a_end + (provisional - a_end) * t;
        let d_end = Point3::new(d_end.x, 0.0, 0.0);

        let f_end = d_end + polar(d_angle, lengths.fork);
        let t_end = d_end + polar(d_angle + PI, params.t_length);

        let seat_dir = normalize_checked(&(b_end - b_start), &["B_length"], "seat tube")?;
        let z_end = b_end + seat_dir * params.z_length;

        let steer_dir = normalize_checked(&(a_end - f_end), &["H_length"], "head tube")?;
        let p_end = a_end + steer_dir * params.p_length;

        let points = PointSet::from_iter([
            (PointId::BStart, b_start),
            (PointId::BEnd, b_end),
            (PointId::SEnd, s_end),
            (PointId::AEnd, a_end),
            (PointId::DEnd, d_end),
            (PointId::FEnd, f_end),
            (PointId::TEnd, t_end),
            (PointId::ZEnd, z_end),
            (PointId::PEnd, p_end),
        ]);
        let frame_members = FrameMembers::resolve_available(&points);

        tracing::debug!(
            w1 = sizes.w1,
            w2 = sizes.w2,
            fork = lengths.fork,
            chainstay = lengths.chainstay,
            "primary skeleton solved"
        );

        Ok(PrimarySkeleton {
            points,
            sizes,
            lengths,
            frame_members,
        })
    }

    pub const fn points(&self) -> &PointSet {
        &self.points
    }

    pub const fn sizes(&self) -> Sizes {
        self.sizes
    }

    pub const fn lengths(&self) -> EffectiveLengths {
        self.lengths
    }

    pub const fn frame_members(&self) -> &FrameMembers {
        &self.frame_members
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::MemberName;
    use approx::assert_relative_eq;

    #[test]
    fn reference_frame_points() {
        let skeleton = PrimarySkeleton::solve(&Parameters::default()).unwrap();
        let p = &skeleton.points;

        assert_eq!(p.require(PointId::BStart).unwrap(), Point3::new(0.0, 2.0, 0.0));
        let s_end = p.require(PointId::SEnd).unwrap();
        assert_relative_eq!(s_end.x, (17.0f64 * 17.0 - 4.0).sqrt() as Real, epsilon = 1e-9);

        let a_end = p.require(PointId::AEnd).unwrap();
        assert_relative_eq!(a_end.y, 11.0 * (50.0 as Real).to_radians().cos(), epsilon = 1e-9);

        // F_end and T_end lie on the steering axis through A_end and D_end
        let d_end = p.require(PointId::DEnd).unwrap();
        let f_end = p.require(PointId::FEnd).unwrap();
        assert_eq!(d_end.y, 0.0);
        assert_relative_eq!((f_end - d_end).norm(), 3.0, epsilon = 1e-9);
        assert_relative_eq!((a_end - d_end).norm(), 11.0, epsilon = 1e-9);
        assert_relative_eq!(p.require(PointId::TEnd).unwrap(), d_end, epsilon = 1e-12);
    }

    #[test]
    fn constrained_modes_follow_wheel_size() {
        let params = Parameters {
            f_mode: true,
            s_mode: true,
            ..Parameters::default()
        };
        let skeleton = PrimarySkeleton::solve(&params).unwrap();
        assert_relative_eq!(skeleton.lengths.fork, 14.1 + F_CONST, epsilon = 1e-12);
        assert_relative_eq!(skeleton.lengths.chainstay, 14.1 + S_CONST, epsilon = 1e-12);
    }

    #[test]
    fn short_chainstay_names_conflicting_fields() {
        let params = Parameters {
            s_length: 1.0,
            b_drop: 2.0,
            ..Parameters::default()
        };
        match PrimarySkeleton::solve(&params) {
            Err(GeometryError::InvalidConfiguration { fields, .. }) => {
                assert_eq!(fields, vec!["S_length", "B_drop"]);
            },
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn constrained_chainstay_names_the_wheel() {
        let params = Parameters {
            s_mode: true,
            b_drop: 40.0,
            ..Parameters::default()
        };
        match PrimarySkeleton::solve(&params) {
            Err(GeometryError::InvalidConfiguration { fields, .. }) => {
                assert_eq!(fields, vec!["S_mode", "R2_size", "T2_size", "B_drop"]);
            },
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn short_top_tube_is_rejected() {
        let params = Parameters {
            a_length: 0.5,
            ..Parameters::default()
        };
        assert!(matches!(
            PrimarySkeleton::solve(&params),
            Err(GeometryError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn horizontal_steering_axis_is_rejected() {
        let params = Parameters {
            d_angle: 90.0,
            ..Parameters::default()
        };
        assert!(PrimarySkeleton::solve(&params).is_err());
    }

    #[test]
    fn drivetrain_members_wait_for_later_stages() {
        let skeleton = PrimarySkeleton::solve(&Parameters::default()).unwrap();
        assert!(skeleton.frame_members.get(MemberName::TopTube).is_some());
        assert!(skeleton.frame_members.get(MemberName::BottomBracket).is_none());
    }
}

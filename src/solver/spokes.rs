//! Hub and rim rings of a wheel and the lacing that joins them.
//!
//! Patterns are generated in wheel-local coordinates: hub center at the
//! origin, wheel plane XY, right flange toward +Z. Placing a pattern on the
//! bicycle must use the geometry's `rotations.total` so spokes turn with the
//! rest of the wheel.

use crate::constants::{
    EVEN_RIM_INDICES, HALF_SECTION_ANGLE, NIPPLE_INSET, ODD_RIM_INDICES, RIM_SPOKE_OFFSET,
    SECTION_ANGLE, SPOKE_COLOR_OFFSET, SPOKES_PER_FLANGE,
};
use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::params::Parameters;
use crate::traits::Transform;
use nalgebra::{Matrix4, Point3};
use serde::Serialize;

/// Spokes sharing a lacing direction on one flange.
const LACING_GROUP: usize = SPOKES_PER_FLANGE / 2;

/// Highest crossing count a flange of this size can lace.
pub const MAX_SPOKE_CROSS: u32 = (LACING_GROUP - 1) as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpokeColor {
    /// Even hole index.
    Red,
    /// Odd hole index.
    Yellow,
}

impl SpokeColor {
    pub const fn of_index(index: usize) -> Self {
        if index % 2 == 0 { SpokeColor::Red } else { SpokeColor::Yellow }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flange {
    Right,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingPoint {
    pub position: Point3<Real>,
    pub color: SpokeColor,
}

/// The four rings of one wheel, [`SPOKES_PER_FLANGE`] holes each.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpokePoints {
    pub hub_points_right: Vec<RingPoint>,
    pub hub_points_left: Vec<RingPoint>,
    pub rim_points_right: Vec<RingPoint>,
    pub rim_points_left: Vec<RingPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Spoke {
    pub flange: Flange,
    pub hub_index: usize,
    pub rim_index: usize,
    pub hub: Point3<Real>,
    pub rim: Point3<Real>,
}

impl Spoke {
    pub fn length(&self) -> Real {
        (self.rim - self.hub).norm()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpokeSets {
    pub red: Vec<Spoke>,
    pub yellow: Vec<Spoke>,
}

impl SpokeSets {
    pub fn len(&self) -> usize {
        self.red.len() + self.yellow.len()
    }

    pub fn is_empty(&self) -> bool {
        self.red.is_empty() && self.yellow.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpokePattern {
    pub points: SpokePoints,
    pub spokes: SpokeSets,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HubDimensions {
    pub flange_radius: Real,
    pub flange_separation: Real,
    /// How far the dished flange sits inboard of the symmetric position.
    pub dish: Real,
}

impl HubDimensions {
    pub fn from_params(params: &Parameters) -> Self {
        HubDimensions {
            flange_radius: params.hub_flange_radius,
            flange_separation: params.hub_flange_separation,
            dish: params.hub_dish,
        }
    }
}

fn ring(radius: Real, phase: Real, z: impl Fn(SpokeColor) -> Real) -> Vec<RingPoint> {
    (0..SPOKES_PER_FLANGE)
        .map(|i| {
            let angle = i as Real * SECTION_ANGLE + phase;
            let color = SpokeColor::of_index(i);
            RingPoint {
                position: Point3::new(radius * angle.cos(), radius * angle.sin(), z(color)),
                color,
            }
        })
        .collect()
}

/// Rim hole reached from hub hole `hub_index` on `flange`.
///
/// The right flange advances red spokes by `cross` and yellow spokes by
/// `9 − cross`; the left flange swaps the two so the weave mirrors.
pub fn rim_index(flange: Flange, hub_index: usize, cross: u32) -> usize {
    let cross = cross as usize % LACING_GROUP;
    let count = hub_index / 2;
    let (red_offset, yellow_offset) = match flange {
        Flange::Right => (cross, LACING_GROUP - cross),
        Flange::Left => (LACING_GROUP - cross, cross),
    };
    match SpokeColor::of_index(hub_index) {
        SpokeColor::Red => EVEN_RIM_INDICES[(count + red_offset) % LACING_GROUP],
        SpokeColor::Yellow => ODD_RIM_INDICES[(count + yellow_offset) % LACING_GROUP],
    }
}

impl SpokePattern {
    /// Builds the rings and laces them.
    ///
    /// `drive_side` names the flange pulled inboard by the hub dish; `None`
    /// gives a symmetric (front) hub.
    pub fn generate(
        rim_radius: Real,
        hub: &HubDimensions,
        drive_side: Option<Flange>,
        cross: u32,
    ) -> Self {
        let half = hub.flange_separation / 2.0;
        let right_z = match drive_side {
            Some(Flange::Right) => half - hub.dish,
            _ => half,
        };
        let left_z = match drive_side {
            Some(Flange::Left) => -half + hub.dish,
            _ => -half,
        };
        let nudge = |color: SpokeColor| match color {
            SpokeColor::Red => SPOKE_COLOR_OFFSET,
            SpokeColor::Yellow => -SPOKE_COLOR_OFFSET,
        };

        let rim = rim_radius - NIPPLE_INSET;
        let points = SpokePoints {
            hub_points_right: ring(hub.flange_radius, 0.0, |c| right_z + nudge(c)),
            hub_points_left: ring(hub.flange_radius, HALF_SECTION_ANGLE, |c| left_z - nudge(c)),
            rim_points_right: ring(rim, 0.0, |_| RIM_SPOKE_OFFSET),
            rim_points_left: ring(rim, HALF_SECTION_ANGLE, |_| -RIM_SPOKE_OFFSET),
        };

        let mut spokes = SpokeSets::default();
        for (flange, hubs, rims) in [
            (Flange::Right, &points.hub_points_right, &points.rim_points_right),
            (Flange::Left, &points.hub_points_left, &points.rim_points_left),
        ] {
            for (hub_index, hub_point) in hubs.iter().enumerate() {
                let rim_index = rim_index(flange, hub_index, cross);
                let spoke = Spoke {
                    flange,
                    hub_index,
                    rim_index,
                    hub: hub_point.position,
                    rim: rims[rim_index].position,
                };
                match hub_point.color {
                    SpokeColor::Red => spokes.red.push(spoke),
                    SpokeColor::Yellow => spokes.yellow.push(spoke),
                }
            }
        }

        SpokePattern { points, spokes }
    }

    /// Fails when any ring or spoke holds a NaN or infinite coordinate.
    pub fn ensure_finite(&self, wheel: &str) -> Result<(), GeometryError> {
        let p = &self.points;
        let finite = |q: &Point3<Real>| q.coords.iter().all(|c| c.is_finite());
        let rings_ok = [
            &p.hub_points_right,
            &p.hub_points_left,
            &p.rim_points_right,
            &p.rim_points_left,
        ]
        .iter()
        .all(|ring| ring.iter().all(|r| finite(&r.position)));
        let spokes_ok = self
            .spokes
            .red
            .iter()
            .chain(&self.spokes.yellow)
            .all(|s| finite(&s.hub) && finite(&s.rim));
        if rings_ok && spokes_ok {
            Ok(())
        } else {
            Err(GeometryError::NonFiniteValue(format!("spokePatterns.{wheel}")))
        }
    }
}

fn transform_ring(ring: &[RingPoint], matrix: &Matrix4<Real>) -> Vec<RingPoint> {
    ring.iter()
        .map(|r| RingPoint {
            position: matrix.transform_point(&r.position),
            color: r.color,
        })
        .collect()
}

fn transform_spokes(spokes: &[Spoke], matrix: &Matrix4<Real>) -> Vec<Spoke> {
    spokes
        .iter()
        .map(|s| Spoke {
            hub: matrix.transform_point(&s.hub),
            rim: matrix.transform_point(&s.rim),
            ..*s
        })
        .collect()
}

impl Transform for SpokePattern {
    fn transform(&self, matrix: &Matrix4<Real>) -> Self {
        let p = &self.points;
        SpokePattern {
            points: SpokePoints {
                hub_points_right: transform_ring(&p.hub_points_right, matrix),
                hub_points_left: transform_ring(&p.hub_points_left, matrix),
                rim_points_right: transform_ring(&p.rim_points_right, matrix),
                rim_points_left: transform_ring(&p.rim_points_left, matrix),
            },
            spokes: SpokeSets {
                red: transform_spokes(&self.spokes.red, matrix),
                yellow: transform_spokes(&self.spokes.yellow, matrix),
            },
        }
    }
}

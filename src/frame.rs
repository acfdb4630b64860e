//! Structural frame members resolved against a point set.

use crate::constants::FRAME_MEMBERS;
use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::points::{PointId, PointSet};
use nalgebra::Point3;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MemberName {
    TopTube,
    DownTube,
    SeatTube,
    HeadTube,
    BottomBracket,
    SeatPost,
    Steerer,
}

/// Static shape parameters of a member.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberParams {
    pub diameter: Real,
    /// How far the tube runs past its start point.
    pub start_extension: Real,
    /// How far the tube runs past its end point.
    pub end_extension: Real,
}

/// One row of the frame-member table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMemberDef {
    pub name: MemberName,
    pub start: PointId,
    pub end: PointId,
    pub params: MemberParams,
}

/// A member with its point references substituted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameMember {
    pub start_ref: PointId,
    pub end_ref: PointId,
    pub start: Point3<Real>,
    pub end: Point3<Real>,
    pub params: MemberParams,
}

impl FrameMember {
    pub fn length(&self) -> Real {
        (self.end - self.start).norm()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrameMembers {
    members: BTreeMap<MemberName, FrameMember>,
}

impl FrameMembers {
    /// Resolves every member whose endpoints already exist in `points`.
    ///
    /// Used for the pre-leveling skeleton, where drivetrain points are not
    /// known yet.
    pub fn resolve_available(points: &PointSet) -> Self {
        let members = FRAME_MEMBERS
            .iter()
            .filter_map(|def| {
                let start = points.get(def.start)?;
                let end = points.get(def.end)?;
                Some((def.name, resolved(def, *start, *end)))
            })
            .collect();
        FrameMembers { members }
    }

    /// Resolves the whole table; any missing endpoint is an error.
    pub fn resolve_all(points: &PointSet) -> Result<Self, GeometryError> {
        let members = FRAME_MEMBERS
            .iter()
            .map(|def| {
                let start = points.require(def.start)?;
                let end = points.require(def.end)?;
                Ok((def.name, resolved(def, start, end)))
            })
            .collect::<Result<_, GeometryError>>()?;
        Ok(FrameMembers { members })
    }

    pub fn get(&self, name: MemberName) -> Option<&FrameMember> {
        self.members.get(&name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MemberName, &FrameMember)> {
        self.members.iter().map(|(k, v)| (*k, v))
    }
}

fn resolved(def: &FrameMemberDef, start: Point3<Real>, end: Point3<Real>) -> FrameMember {
    FrameMember {
        start_ref: def.start,
        end_ref: def.end,
        start,
        end,
        params: def.params,
    }
}

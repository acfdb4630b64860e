//! Named skeleton locations and the immutable point map every stage passes on.

use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::traits::Transform;
use nalgebra::{Matrix4, Point3};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

macro_rules! point_ids {
    ($($(#[$doc:meta])* $variant:ident => $wire:literal,)+) => {
        /// Every named location the solver can produce.
        ///
        /// Serialized with the wire name renderers look up, e.g. `B_start`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum PointId {
            $(
                $(#[$doc])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl PointId {
            /// All identifiers in declaration order.
            pub const ALL: &'static [PointId] = &[$(PointId::$variant),+];

            /// The wire name of this point.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(PointId::$variant => $wire,)+
                }
            }
        }
    };
}

point_ids! {
    /// Bottom-bracket center (seat tube bottom).
    BStart => "B_start",
    /// Seat tube top.
    BEnd => "B_end",
    /// Rear axle center.
    SEnd => "S_end",
    /// Head tube top.
    AEnd => "A_end",
    /// Steering axis meets the axle line.
    DEnd => "D_end",
    /// Head tube bottom / fork crown seat.
    FEnd => "F_end",
    /// Front axle center.
    TEnd => "T_end",
    /// Seat post top.
    ZEnd => "Z_end",
    /// Steerer top.
    PEnd => "P_end",

    FrontAxle => "frontAxel",
    MidAxle => "midAxel",
    RearAxle => "rearAxel",

    BbHsStart => "BB_Hs_Start",
    BbHsEnd => "BB_Hs_End",
    BbSpacerEnd => "BB_Spacer_End",
    SpktCenter => "Spkt_Center",
    CrankCenter => "Crank_Center",
    CrankEnd => "Crank_End",
    NdsHsStart => "NDS_Hs_Start",
    NdsHsEnd => "NDS_Hs_End",
    NdsSpacerEnd => "NDS_Spacer_End",
    NdsCrankCenter => "NDS_Crank_Center",
    NdsCrankEnd => "NDS_Crank_End",
    DrvCenter => "Drv_Center",

    TangentPointS1 => "tangentPointS1",
    TangentPointD1 => "tangentPointD1",
    TangentPointS2 => "tangentPointS2",
    TangentPointD2 => "tangentPointD2",

    GroundTangentFront => "groundTangentFront",
    GroundTangentRear => "groundTangentRear",

    ForkCrown => "Fork_Crown",
    ForkCrownRight => "Fork_Crown_Right",
    ForkCrownLeft => "Fork_Crown_Left",
    ForkElbowRight => "Fork_Elbow_Right",
    ForkElbowLeft => "Fork_Elbow_Left",
    ForkBaseRight => "Fork_Base_Right",
    ForkBaseLeft => "Fork_Base_Left",

    ChainstayNeckRight => "Chainstay_Neck_Right",
    ChainstayNeckLeft => "Chainstay_Neck_Left",
    ChainstayElbowRight => "Chainstay_Elbow_Right",
    ChainstayElbowLeft => "Chainstay_Elbow_Left",
    ChainstayEndRight => "Chainstay_End_Right",
    ChainstayEndLeft => "Chainstay_End_Left",

    StemTop => "Stem_Top",
    StemBase => "Stem_Base",
    StemClamp => "Stem_Clamp",
    StemEnd => "Stem_End",

    HandlebarCenter => "Handlebar_Center",
    HandlebarBendRight => "Handlebar_Bend_Right",
    HandlebarBendLeft => "Handlebar_Bend_Left",
    HandlebarEndRight => "Handlebar_End_Right",
    HandlebarEndLeft => "Handlebar_End_Left",
    CrossbarRight => "Crossbar_Right",
    CrossbarLeft => "Crossbar_Left",
    BarEndRight => "BarEnd_Right",
    BarEndLeft => "BarEnd_Left",

    SeatFront => "Seat_Front",
    SeatRear => "Seat_Rear",
}

impl PointId {
    /// Looks a point up by its wire name.
    pub fn from_wire(name: &str) -> Option<Self> {
        PointId::ALL.iter().copied().find(|id| id.as_str() == name)
    }
}

impl Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable, ordered map from [`PointId`] to position.
///
/// Stages never edit a set in place: inserting or transforming returns a new
/// set, so a point cannot be leveled twice or skipped by a later stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointSet {
    points: BTreeMap<PointId, Point3<Real>>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new set with `id` set to `point`.
    #[must_use]
    pub fn with(&self, id: PointId, point: Point3<Real>) -> Self {
        let mut points = self.points.clone();
        points.insert(id, point);
        PointSet { points }
    }

    /// Returns a new set containing both; `other` wins on collisions.
    #[must_use]
    pub fn merged(&self, other: &PointSet) -> Self {
        let mut points = self.points.clone();
        points.extend(other.points.iter().map(|(k, v)| (*k, *v)));
        PointSet { points }
    }

    pub fn get(&self, id: PointId) -> Option<&Point3<Real>> {
        self.points.get(&id)
    }

    /// Like [`PointSet::get`], but a missing point is an error.
    pub fn require(&self, id: PointId) -> Result<Point3<Real>, GeometryError> {
        self.points
            .get(&id)
            .copied()
            .ok_or(GeometryError::MissingPoint(id))
    }

    pub fn contains(&self, id: PointId) -> bool {
        self.points.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PointId, &Point3<Real>)> {
        self.points.iter().map(|(k, v)| (*k, v))
    }

    /// Returns a new set with `f` applied to the listed points only.
    #[must_use]
    pub fn map_only(&self, ids: &[PointId], f: impl Fn(&Point3<Real>) -> Point3<Real>) -> Self {
        let points = self
            .points
            .iter()
            .map(|(k, v)| (*k, if ids.contains(k) { f(v) } else { *v }))
            .collect();
        PointSet { points }
    }

    /// Fails on the first point holding a NaN or infinite coordinate.
    pub fn ensure_finite(&self) -> Result<(), GeometryError> {
        match self
            .points
            .iter()
            .find(|(_, p)| p.coords.iter().any(|c| !c.is_finite()))
        {
            Some((id, _)) => Err(GeometryError::NonFinitePoint(*id)),
            None => Ok(()),
        }
    }
}

impl Transform for PointSet {
    fn transform(&self, matrix: &Matrix4<Real>) -> Self {
        let points = self
            .points
            .iter()
            .map(|(k, v)| (*k, matrix.transform_point(v)))
            .collect();
        PointSet { points }
    }
}

impl FromIterator<(PointId, Point3<Real>)> for PointSet {
    fn from_iter<I: IntoIterator<Item = (PointId, Point3<Real>)>>(iter: I) -> Self {
        PointSet {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_unique() {
        let mut names: Vec<_> = PointId::ALL.iter().map(|p| p.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PointId::ALL.len());
    }

    #[test]
    fn wire_name_lookup() {
        assert_eq!(PointId::from_wire("frontAxel"), Some(PointId::FrontAxle));
        assert_eq!(PointId::from_wire("front_axle"), None);
    }

    #[test]
    fn with_does_not_touch_the_original() {
        let a = PointSet::new().with(PointId::BStart, Point3::new(0.0, 2.0, 0.0));
        let b = a.with(PointId::BEnd, Point3::new(1.0, 1.0, 0.0));
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);
        assert!(matches!(
            a.require(PointId::BEnd),
            Err(GeometryError::MissingPoint(PointId::BEnd))
        ));
    }

    #[test]
    fn nan_is_reported_by_name() {
        let set = PointSet::new()
            .with(PointId::BStart, Point3::origin())
            .with(PointId::AEnd, Point3::new(Real::NAN, 0.0, 0.0));
        assert_eq!(
            set.ensure_finite(),
            Err(GeometryError::NonFinitePoint(PointId::AEnd))
        );
    }

    #[test]
    fn serializes_with_wire_names() {
        let set = PointSet::new().with(PointId::BStart, Point3::new(0.0, 2.0, 0.0));
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.starts_with(r#"{"B_start":"#));
    }
}

//! Fixed design constants.

use crate::float_types::{PI, Real};
use crate::frame::{FrameMemberDef, MemberName, MemberParams};
use crate::points::PointId;

/// Tire-to-crown clearance added to the front wheel radius when `F_mode` derives the fork length.
pub const F_CONST: Real = 1.5;

/// Tire-to-bottom-bracket clearance added to the rear wheel radius when `S_mode` derives the chainstay length.
pub const S_CONST: Real = 0.75;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Wheels
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

/// Spoke holes per hub flange (and rim holes per side).
pub const SPOKES_PER_FLANGE: usize = 18;

/// Angular pitch between holes of one ring.
pub const SECTION_ANGLE: Real = 2.0 * PI / SPOKES_PER_FLANGE as Real;

/// Phase shift of the left rings against the right rings (π/18).
pub const HALF_SECTION_ANGLE: Real = PI / SPOKES_PER_FLANGE as Real;

/// Axial nudge separating red (outbound) and yellow (inbound) spoke heads on a flange.
pub const SPOKE_COLOR_OFFSET: Real = 0.05;

/// Axial offset of the rim's left and right hole rows from the rim centerline.
pub const RIM_SPOKE_OFFSET: Real = 0.1;

/// Radial inset from the rim radius to where the nipple seats.
pub const NIPPLE_INSET: Real = 0.4;

/// Lacing convention data: rim holes reached by even-indexed hub holes.
///
/// These are a fixed wheel-building convention, indexed by
/// `(spoke count + cross offset) % 9`, not something derived at run time.
pub const EVEN_RIM_INDICES: [usize; 9] = [9, 11, 13, 15, 17, 1, 3, 5, 7];

/// Lacing convention data: rim holes reached by odd-indexed hub holes.
pub const ODD_RIM_INDICES: [usize; 9] = [10, 12, 14, 16, 0, 2, 4, 6, 8];

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Frame members
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

const fn member(
    name: MemberName,
    start: PointId,
    end: PointId,
    diameter: Real,
    start_extension: Real,
    end_extension: Real,
) -> FrameMemberDef {
    FrameMemberDef {
        name,
        start,
        end,
        params: MemberParams {
            diameter,
            start_extension,
            end_extension,
        },
    }
}

/// Structural members and the skeleton points they span.
pub const FRAME_MEMBERS: &[FrameMemberDef] = &[
    member(MemberName::TopTube, PointId::BEnd, PointId::AEnd, 1.25, 0.0, 0.0),
    member(MemberName::DownTube, PointId::BStart, PointId::FEnd, 1.5, 0.0, 0.0),
    member(MemberName::SeatTube, PointId::BStart, PointId::BEnd, 1.25, 0.0, 0.5),
    member(MemberName::HeadTube, PointId::FEnd, PointId::AEnd, 1.5, 0.25, 0.25),
    member(MemberName::BottomBracket, PointId::BbHsStart, PointId::NdsHsStart, 1.6, 0.0, 0.0),
    member(MemberName::SeatPost, PointId::BEnd, PointId::ZEnd, 1.0, 0.5, 0.0),
    member(MemberName::Steerer, PointId::AEnd, PointId::PEnd, 1.1, 0.0, 0.0),
];

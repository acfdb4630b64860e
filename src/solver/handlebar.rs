//! Handlebar, built around the stem clamp with the bar along Z.
//!
//! Each half starts at its clamp bend (`±BarClampWidth/2`) and runs outward.
//! The outward run is tilted by upsweep about X first and backsweep about Y
//! second, so backsweep is measured in the already-swept plane. The whole
//! bar is then rolled by `B_rotation` about the clamp axis, turned by the
//! stem's alignment and moved onto `Stem_End`.

use super::StemPoints;
use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::math::lerp;
use crate::params::Parameters;
use crate::points::{PointId, PointSet};
use crate::traits::Transform;
use nalgebra::{Point3, Rotation3, Vector3};

struct Side {
    sign: Real,
    bend: PointId,
    end: PointId,
    crossbar: PointId,
    bar_end: PointId,
}

const SIDES: [Side; 2] = [
    Side {
        sign: 1.0,
        bend: PointId::HandlebarBendRight,
        end: PointId::HandlebarEndRight,
        crossbar: PointId::CrossbarRight,
        bar_end: PointId::BarEndRight,
    },
    Side {
        sign: -1.0,
        bend: PointId::HandlebarBendLeft,
        end: PointId::HandlebarEndLeft,
        crossbar: PointId::CrossbarLeft,
        bar_end: PointId::BarEndLeft,
    },
];

/// Upsweep then backsweep for one half of the bar.
fn sweep(sign: Real, upsweep: Real, backsweep: Real) -> Rotation3<Real> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), sign * backsweep)
        * Rotation3::from_axis_angle(&Vector3::x_axis(), -sign * upsweep)
}

pub fn handlebar_points(stem: &StemPoints, params: &Parameters) -> Result<PointSet, GeometryError> {
    let stem_end = stem.points.require(PointId::StemEnd)?;

    let half_clamp = params.bar_clamp_width / 2.0;
    let arm = params.l_length / 2.0 - half_clamp;
    if arm < 0.0 {
        tracing::warn!(
            width = params.l_length,
            clamp = params.bar_clamp_width,
            "handlebar narrower than its clamp"
        );
        return Err(GeometryError::invalid_configuration(
            &["L_length", "BarClampWidth"],
            format!("handlebar width {} is below the clamp width {}", params.l_length, params.bar_clamp_width),
        ));
    }

    let upsweep = params.upsweep.to_radians();
    let backsweep = params.backsweep.to_radians();

    let mut local = PointSet::new().with(PointId::HandlebarCenter, Point3::origin());
    for side in &SIDES {
        let rotation = sweep(side.sign, upsweep, backsweep);
        let bend = Point3::new(0.0, 0.0, side.sign * half_clamp);
        let end = bend + rotation * Vector3::new(0.0, 0.0, side.sign * arm);
        local = local
            .with(side.bend, bend)
            .with(side.end, end)
            .with(side.crossbar, lerp(&bend, &end, params.crossbar_position));
        if params.bar_end_enabled {
            let bar_end = end + rotation * Vector3::new(-params.bar_end_length, 0.0, 0.0);
            local = local.with(side.bar_end, bar_end);
        }
    }

    let points = local
        .rotate_about_z(&Point3::origin(), params.b_rotation.to_radians())
        .rotate_about_z(&Point3::origin(), stem.alignment)
        .translate_vector(stem_end.coords);
    Ok(points)
}

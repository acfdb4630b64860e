//! The input record of a solve.
//!
//! Lengths share one caller-chosen unit, angles are in degrees and converted
//! by the stages that use them. Wire names (`B_length`, `frontAxel_Z`, ...)
//! are the names renderers and saved configurations use.

use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::solver::spokes::MAX_SPOKE_CROSS;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete, flat parameter set for one bicycle.
///
/// Every field is required when deserializing; [`Parameters::default`] is a
/// complete reference bicycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    // ---------------------------------------------------------------- frame
    #[serde(rename = "B_length")]
    pub b_length: Real,
    #[serde(rename = "A_length")]
    pub a_length: Real,
    #[serde(rename = "B_angle")]
    pub b_angle: Real,
    #[serde(rename = "B_drop")]
    pub b_drop: Real,
    #[serde(rename = "D_angle")]
    pub d_angle: Real,
    #[serde(rename = "F_length")]
    pub f_length: Real,
    /// Derive the fork length from the front wheel instead of `F_length`.
    #[serde(rename = "F_mode")]
    pub f_mode: bool,
    #[serde(rename = "H_length")]
    pub h_length: Real,
    #[serde(rename = "S_length")]
    pub s_length: Real,
    /// Derive the chainstay length from the rear wheel instead of `S_length`.
    #[serde(rename = "S_mode")]
    pub s_mode: bool,
    #[serde(rename = "T_length")]
    pub t_length: Real,
    #[serde(rename = "Z_length")]
    pub z_length: Real,
    #[serde(rename = "Z_angle")]
    pub z_angle: Real,
    #[serde(rename = "P_length")]
    pub p_length: Real,
    #[serde(rename = "R_length")]
    pub r_length: Real,
    #[serde(rename = "R_angle")]
    pub r_angle: Real,
    #[serde(rename = "L_length")]
    pub l_length: Real,

    // --------------------------------------------------------------- wheels
    #[serde(rename = "R1_size")]
    pub r1_size: Real,
    #[serde(rename = "T1_size")]
    pub t1_size: Real,
    #[serde(rename = "R2_size")]
    pub r2_size: Real,
    #[serde(rename = "T2_size")]
    pub t2_size: Real,

    // ---------------------------------------------------------------- axles
    #[serde(rename = "frontAxel_Z")]
    pub front_axle_z: Real,
    #[serde(rename = "midAxel_Z")]
    pub mid_axle_z: Real,
    #[serde(rename = "rearAxel_Z")]
    pub rear_axle_z: Real,

    // ----------------------------------------------------------- drivetrain
    #[serde(rename = "BB_BaseHeight")]
    pub bb_base_height: Real,
    #[serde(rename = "BB_SpacerWidth")]
    pub bb_spacer_width: Real,
    #[serde(rename = "BB_SpacerCount")]
    pub bb_spacer_count: Real,
    #[serde(rename = "SpktAttachDistance")]
    pub spkt_attach_distance: Real,
    #[serde(rename = "CrankAttachDistance")]
    pub crank_attach_distance: Real,
    #[serde(rename = "CrankLength")]
    pub crank_length: Real,
    #[serde(rename = "CrankOffset")]
    pub crank_offset: Real,
    #[serde(rename = "DrvAttachDistance")]
    pub drv_attach_distance: Real,
    /// Chain or belt pitch.
    #[serde(rename = "D_width")]
    pub d_width: Real,
    /// Driver (rear) tooth count.
    #[serde(rename = "D1_count")]
    pub d1_count: Real,
    /// Sprocket (front) tooth count.
    #[serde(rename = "D2_count")]
    pub d2_count: Real,
    #[serde(rename = "isRHD")]
    pub is_rhd: bool,
    #[serde(rename = "leftFootForward")]
    pub left_foot_forward: bool,
    #[serde(rename = "chainFullEnabled")]
    pub chain_full_enabled: bool,

    // ----------------------------------------------------------------- fork
    #[serde(rename = "ForkCrownLength")]
    pub fork_crown_length: Real,
    #[serde(rename = "ForkElbowRatio")]
    pub fork_elbow_ratio: Real,
    #[serde(rename = "ForkElbowOffset")]
    pub fork_elbow_offset: Real,

    // ------------------------------------------------------------ chainstay
    #[serde(rename = "ChainstayNeckLength")]
    pub chainstay_neck_length: Real,
    #[serde(rename = "ChainstayElbowLength")]
    pub chainstay_elbow_length: Real,
    #[serde(rename = "ChainstayPitch")]
    pub chainstay_pitch: Real,

    // ------------------------------------------------------ stem/handlebar
    #[serde(rename = "StemClampHeight")]
    pub stem_clamp_height: Real,
    #[serde(rename = "B_rotation")]
    pub b_rotation: Real,
    #[serde(rename = "upsweep")]
    pub upsweep: Real,
    #[serde(rename = "backsweep")]
    pub backsweep: Real,
    #[serde(rename = "BarClampWidth")]
    pub bar_clamp_width: Real,
    #[serde(rename = "CrossbarPosition")]
    pub crossbar_position: Real,
    #[serde(rename = "barEndEnabled")]
    pub bar_end_enabled: bool,
    #[serde(rename = "BarEndLength")]
    pub bar_end_length: Real,

    // ----------------------------------------------------------------- seat
    #[serde(rename = "SeatLength")]
    pub seat_length: Real,

    // ---------------------------------------------------------- hub/spokes
    #[serde(rename = "HubFlangeRadius")]
    pub hub_flange_radius: Real,
    #[serde(rename = "HubFlangeSeparation")]
    pub hub_flange_separation: Real,
    #[serde(rename = "HubDish")]
    pub hub_dish: Real,
    #[serde(rename = "SpokeCross")]
    pub spoke_cross: u32,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            b_length: 20.0,
            a_length: 22.0,
            b_angle: 70.0,
            b_drop: 2.0,
            d_angle: 50.0,
            f_length: 3.0,
            f_mode: false,
            h_length: 8.0,
            s_length: 17.0,
            s_mode: false,
            t_length: 0.0,
            z_length: 6.0,
            z_angle: 0.0,
            p_length: 2.0,
            r_length: 4.0,
            r_angle: 10.0,
            l_length: 28.0,

            r1_size: 13.0,
            t1_size: 1.1,
            r2_size: 13.0,
            t2_size: 1.1,

            front_axle_z: 2.0,
            mid_axle_z: 1.35,
            rear_axle_z: 2.65,

            bb_base_height: 0.2,
            bb_spacer_width: 0.1,
            bb_spacer_count: 2.0,
            spkt_attach_distance: 0.3,
            crank_attach_distance: 0.4,
            crank_length: 6.7,
            crank_offset: 0.5,
            drv_attach_distance: 1.8,
            d_width: 0.5,
            d1_count: 18.0,
            d2_count: 44.0,
            is_rhd: false,
            left_foot_forward: true,
            chain_full_enabled: true,

            fork_crown_length: 1.0,
            fork_elbow_ratio: 0.6,
            fork_elbow_offset: 0.4,

            chainstay_neck_length: 3.0,
            chainstay_elbow_length: 6.0,
            chainstay_pitch: 0.0,

            stem_clamp_height: 1.6,
            b_rotation: 0.0,
            upsweep: 5.0,
            backsweep: 9.0,
            bar_clamp_width: 4.0,
            crossbar_position: 0.5,
            bar_end_enabled: false,
            bar_end_length: 4.0,

            seat_length: 10.5,

            hub_flange_radius: 1.1,
            hub_flange_separation: 2.2,
            hub_dish: 0.35,
            spoke_cross: 3,
        }
    }
}

/// How a numeric field is checked before solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// Only needs to be finite (angles, signed offsets).
    Finite,
    /// Finite and >= 0 (lengths, distances, counts).
    NonNegative,
    /// Finite and within [0, 1].
    UnitInterval,
}

impl Parameters {
    /// Decodes a JSON parameter record. Every field is required.
    pub fn from_json_str(json: &str) -> Result<Self, GeometryError> {
        serde_json::from_str(json).map_err(|e| GeometryError::MalformedParameters(e.to_string()))
    }

    /// Reads and decodes a JSON parameter file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GeometryError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            GeometryError::MalformedParameters(format!("{}: {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Serializes with the wire field names.
    pub fn to_json_string(&self) -> Result<String, GeometryError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GeometryError::MalformedParameters(e.to_string()))
    }

    fn numeric_fields(&self) -> Vec<(&'static str, Real, Rule)> {
        use Rule::*;
        vec![
            ("B_length", self.b_length, NonNegative),
            ("A_length", self.a_length, NonNegative),
            ("B_angle", self.b_angle, Finite),
            ("B_drop", self.b_drop, Finite),
            ("D_angle", self.d_angle, Finite),
            ("F_length", self.f_length, NonNegative),
            ("H_length", self.h_length, NonNegative),
            ("S_length", self.s_length, NonNegative),
            ("T_length", self.t_length, NonNegative),
            ("Z_length", self.z_length, NonNegative),
            ("Z_angle", self.z_angle, Finite),
            ("P_length", self.p_length, NonNegative),
            ("R_length", self.r_length, NonNegative),
            ("R_angle", self.r_angle, Finite),
            ("L_length", self.l_length, NonNegative),
            ("R1_size", self.r1_size, NonNegative),
            ("T1_size", self.t1_size, NonNegative),
            ("R2_size", self.r2_size, NonNegative),
            ("T2_size", self.t2_size, NonNegative),
            ("frontAxel_Z", self.front_axle_z, NonNegative),
            ("midAxel_Z", self.mid_axle_z, NonNegative),
            ("rearAxel_Z", self.rear_axle_z, NonNegative),
            ("BB_BaseHeight", self.bb_base_height, NonNegative),
            ("BB_SpacerWidth", self.bb_spacer_width, NonNegative),
            ("BB_SpacerCount", self.bb_spacer_count, NonNegative),
            ("SpktAttachDistance", self.spkt_attach_distance, NonNegative),
            ("CrankAttachDistance", self.crank_attach_distance, NonNegative),
            ("CrankLength", self.crank_length, NonNegative),
            ("CrankOffset", self.crank_offset, Finite),
            ("DrvAttachDistance", self.drv_attach_distance, NonNegative),
            ("D_width", self.d_width, NonNegative),
            ("D1_count", self.d1_count, NonNegative),
            ("D2_count", self.d2_count, NonNegative),
            ("ForkCrownLength", self.fork_crown_length, NonNegative),
            ("ForkElbowRatio", self.fork_elbow_ratio, UnitInterval),
            ("ForkElbowOffset", self.fork_elbow_offset, Finite),
            ("ChainstayNeckLength", self.chainstay_neck_length, NonNegative),
            ("ChainstayElbowLength", self.chainstay_elbow_length, NonNegative),
            ("ChainstayPitch", self.chainstay_pitch, Finite),
            ("StemClampHeight", self.stem_clamp_height, NonNegative),
            ("B_rotation", self.b_rotation, Finite),
            ("upsweep", self.upsweep, Finite),
            ("backsweep", self.backsweep, Finite),
            ("BarClampWidth", self.bar_clamp_width, NonNegative),
            ("CrossbarPosition", self.crossbar_position, UnitInterval),
            ("BarEndLength", self.bar_end_length, NonNegative),
            ("SeatLength", self.seat_length, NonNegative),
            ("HubFlangeRadius", self.hub_flange_radius, NonNegative),
            ("HubFlangeSeparation", self.hub_flange_separation, NonNegative),
            ("HubDish", self.hub_dish, Finite),
        ]
    }

    /// Rejects NaN/infinite values, negative lengths and out-of-range ratios.
    ///
    /// Runs before any geometry is computed so a bad field is reported by
    /// name instead of surfacing later as a NaN point.
    pub fn validate(&self) -> Result<(), GeometryError> {
        for (field, value, rule) in self.numeric_fields() {
            if !value.is_finite() {
                tracing::warn!(field, value, "rejecting non-finite parameter");
                return Err(GeometryError::NonFiniteParameter { field, value });
            }
            match rule {
                Rule::Finite => {},
                Rule::NonNegative if value < 0.0 => {
                    tracing::warn!(field, value, "rejecting negative parameter");
                    return Err(GeometryError::NegativeParameter { field, value });
                },
                Rule::UnitInterval if !(0.0..=1.0).contains(&value) => {
                    return Err(GeometryError::ParameterOutOfRange {
                        field,
                        value,
                        min: 0.0,
                        max: 1.0,
                    });
                },
                _ => {},
            }
        }
        if self.spoke_cross > MAX_SPOKE_CROSS {
            tracing::warn!(spoke_cross = self.spoke_cross, "rejecting spoke crossing count");
            return Err(GeometryError::ParameterOutOfRange {
                field: "SpokeCross",
                value: self.spoke_cross as Real,
                min: 0.0,
                max: MAX_SPOKE_CROSS as Real,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Parameters::default().validate().is_ok());
    }

    #[test]
    fn nan_is_rejected_by_name() {
        let params = Parameters {
            d_angle: Real::NAN,
            ..Parameters::default()
        };
        match params.validate() {
            Err(GeometryError::NonFiniteParameter { field, .. }) => assert_eq!(field, "D_angle"),
            other => panic!("expected NonFiniteParameter, got {other:?}"),
        }
    }

    #[test]
    fn crossbar_position_is_bounded() {
        let params = Parameters {
            crossbar_position: 1.5,
            ..Parameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(GeometryError::ParameterOutOfRange { field: "CrossbarPosition", .. })
        ));
    }

    #[test]
    fn spoke_cross_past_the_lacing_group_is_rejected() {
        let params = Parameters {
            spoke_cross: 8,
            ..Parameters::default()
        };
        assert!(params.validate().is_ok());
        let params = Parameters {
            spoke_cross: 9,
            ..Parameters::default()
        };
        match params.validate() {
            Err(GeometryError::ParameterOutOfRange { field, value, max, .. }) => {
                assert_eq!(field, "SpokeCross");
                assert_eq!(value, 9.0);
                assert_eq!(max, 8.0);
            },
            other => panic!("expected ParameterOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn json_uses_wire_names() {
        let json = Parameters::default().to_json_string().unwrap();
        assert!(json.contains("\"B_length\""));
        assert!(json.contains("\"frontAxel_Z\""));
        assert!(json.contains("\"isRHD\""));
        let back = Parameters::from_json_str(&json).unwrap();
        assert_eq!(back.b_length, 20.0);
        assert_eq!(back.spoke_cross, 3);
        assert!(!back.is_rhd);
    }
}

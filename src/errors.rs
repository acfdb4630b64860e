//! Solver errors

use crate::float_types::Real;
use crate::points::PointId;

/// Everything that can stop a geometry solve.
///
/// The solver never recovers on its own: a failed solve means "no geometry
/// available" and the caller decides whether to keep the last good result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A trig or intersection domain failure caused by mutually incompatible parameters.
    #[error("(InvalidConfiguration) [{}] {reason}", .fields.join(", "))]
    InvalidConfiguration {
        fields: Vec<&'static str>,
        reason: String,
    },
    /// Two circles admit no external tangent (or share a center).
    #[error("(TangentDomain) no external tangent: center distance {distance} vs radius difference {radius_difference}")]
    TangentDomain {
        distance: Real,
        radius_difference: Real,
    },
    /// Parameters could not be decoded, e.g. a required field is missing.
    #[error("(MalformedParameters) {0}")]
    MalformedParameters(String),
    /// A parameter is NaN or infinite.
    #[error("(NonFiniteParameter) {field} = {value}")]
    NonFiniteParameter { field: &'static str, value: Real },
    /// A length, distance or count is negative.
    #[error("(NegativeParameter) {field} must be non-negative, got {value}")]
    NegativeParameter { field: &'static str, value: Real },
    /// A bounded parameter falls outside its range.
    #[error("(ParameterOutOfRange) {field} = {value} is outside [{min}, {max}]")]
    ParameterOutOfRange {
        field: &'static str,
        value: Real,
        min: Real,
        max: Real,
    },
    /// A stage asked for a point no earlier stage produced.
    #[error("(MissingPoint) {0} has not been computed")]
    MissingPoint(PointId),
    /// A solved point contains NaN or an infinite coordinate.
    #[error("(NonFinitePoint) {0} has a NaN or infinite coordinate")]
    NonFinitePoint(PointId),
    /// A solved scalar or spoke ring coordinate is NaN or infinite.
    #[error("(NonFiniteValue) {0} is NaN or infinite")]
    NonFiniteValue(String),
}

impl GeometryError {
    /// Creates an invalid configuration error naming the conflicting fields.
    #[must_use]
    pub fn invalid_configuration(fields: &[&'static str], reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            fields: fields.to_vec(),
            reason: reason.into(),
        }
    }

    /// Re-labels a raw [`GeometryError::TangentDomain`] with the parameters that produced it.
    /// Other variants pass through untouched.
    #[must_use]
    pub fn attribute_to(self, fields: &[&'static str]) -> Self {
        match self {
            GeometryError::TangentDomain {
                distance,
                radius_difference,
            } => GeometryError::invalid_configuration(
                fields,
                format!(
                    "circles {distance} apart cannot carry an external tangent with radius difference {radius_difference}"
                ),
            ),
            other => other,
        }
    }
}

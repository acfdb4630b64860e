// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// How far a leveled wheel may sit off `y = 0` and still count as grounded.
#[cfg(feature = "f32")]
pub const TOLERANCE: Real = 1e-4;
/// How far a leveled wheel may sit off `y = 0` and still count as grounded.
#[cfg(feature = "f64")]
pub const TOLERANCE: Real = 1e-9;

/// Smallest magnitude treated as non-zero by denominators and normalizations.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-6;
/// Smallest magnitude treated as non-zero by denominators and normalizations.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-12;

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

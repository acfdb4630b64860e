//! A **parametric bicycle geometry** solver.
//!
//! Turns a flat record of frame lengths, angles, wheel sizes and drivetrain
//! settings ([`Parameters`]) into a leveled 3D skeleton of named points
//! ([`Geometry`]): frame tubes, axles, bottom bracket stack, cranks, chain
//! line, fork, chainstays, stem, handlebar, saddle and a laced spoke pattern
//! for each wheel.
//!
//! The solve runs as a chain of stage types in [`solver`], each built only
//! from the one before it, and finishes by rotating the whole skeleton so
//! both wheels stand on `y = 0`.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **cli**: the `bikegeo` binary (clap, anyhow, tracing-subscriber)
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **wasm**: `wasm-bindgen` entry points for browser renderers

#![forbid(unsafe_code)]
#![warn(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod constants;
pub mod errors;
pub mod float_types;
pub mod frame;
pub mod geometry;
pub mod math;
pub mod params;
pub mod points;
pub mod solver;
pub mod traits;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::GeometryError;
pub use geometry::{Geometry, SpokePatterns, Wheel};
pub use params::Parameters;
pub use points::{PointId, PointSet};
pub use traits::Transform;

#[cfg(feature = "wasm")]
pub mod wasm;

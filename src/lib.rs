//! Small **2D polar projections** on top of [`geo`] points and line strings.
//!
//! A point is moved a distance along an angle (radians, clockwise from +y),
//! and the line shapes here are all built from that one move:
//! - [`project`](projection::project): the projected point
//! - [`extend_point`](projection::extend_point): a two-vertex line from a point to its projection
//! - [`centerline`](projection::centerline): a three-vertex line centered on a point
//! - [`extend_line`](extend::extend_line): an existing line lengthened at both ends
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod extend;
pub mod float_types;
pub mod projection;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::GeometryError;
pub use extend::{Extension, VertexAngle, angle_at_vertex, extend_line};
pub use projection::{Project, centerline, extend_point, project};

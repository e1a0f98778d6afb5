#![forbid(unsafe_code)]

//! Geometric primitives for the dragline alignment engine.
//!
//! This crate holds the pure data layer: pixel rectangles, container
//! clamping, padding specifications, and the derived positional features
//! (edges and centers) that the snap engine compares. Everything here is
//! plain value types; the scoring and session machinery lives in
//! `dragline-snap`.

pub mod error;
pub mod geometry;
pub mod position;

pub use error::GeometryError;
pub use geometry::{Padding, Rect};
pub use position::{Anchor, Axis, PositionData};

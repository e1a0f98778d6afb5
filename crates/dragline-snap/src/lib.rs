#![forbid(unsafe_code)]

//! Snap-to-alignment engine.
//!
//! As an element is dragged or resized inside a container, its edges and
//! centers are compared against sibling elements, the container bounds, and
//! optional padding guides. Within a threshold the moving coordinate is
//! adjusted to align exactly, and guide lines are produced for rendering.
//!
//! The engine is pure geometry: it consumes resolved rectangles from the
//! input layer and returns adjusted coordinates plus guide lines. Pointer
//! capture, hit-testing, and rendering are the caller's concern.
//!
//! # Layers
//!
//! - [`score_axis`] — every (moving-anchor × comparison-anchor) distance for
//!   one rectangle pair on one axis.
//! - [`aggregate_axis`] — the nearest alignment group across a whole
//!   comparison set, yielding the snapped coordinate and its guide lines.
//! - [`line_extent`] — the rendered length and origin of a guide line.
//! - [`SnapEngine`] / [`DragSession`] / [`ResizeSession`] — per-gesture
//!   orchestration over a start-of-gesture snapshot.
//! - [`SnapController`] — a stateful Idle/Dragging/Resizing surface that
//!   owns the node list and the current guide lines.

pub mod aggregate;
pub mod config;
pub mod controller;
pub mod error;
pub mod guide;
pub mod handle;
pub mod node;
pub mod score;
pub mod session;

pub use aggregate::{AxisSnap, aggregate_axis};
pub use config::SnapConfig;
pub use controller::{Gesture, GuideLineSet, SnapController};
pub use dragline_core::{Anchor, Axis, GeometryError, Padding, PositionData, Rect};
pub use error::SnapError;
pub use guide::{GuideLine, LineExtent, line_extent};
pub use handle::ResizeHandle;
pub use node::{Node, map_node_props};
pub use score::{Candidate, score_axis};
pub use session::{DragSession, DragTick, ResizeSession, ResizeTick, SnapEngine};

#![forbid(unsafe_code)]

//! Errors surfaced by the gesture controller.

use dragline_core::GeometryError;
use thiserror::Error;

/// Failures when driving the snap controller.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SnapError {
    /// A supplied rectangle failed validation.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// A node index beyond the current node list.
    #[error("node index {index} out of bounds (len {len})")]
    UnknownNode { index: usize, len: usize },

    /// The node is marked disabled and cannot start a gesture.
    #[error("node {index} is disabled")]
    NodeDisabled { index: usize },

    /// A tick arrived while no gesture was active.
    #[error("no active gesture")]
    NoActiveGesture,

    /// A gesture start arrived while another gesture was active.
    #[error("a gesture is already in progress")]
    GestureInProgress,
}

#![forbid(unsafe_code)]

//! Resize handles and the anchors they drag.

use dragline_core::Anchor;
use serde::{Deserialize, Serialize};

/// The handle an active resize gesture grabs.
///
/// Each handle implies which anchors move: dragging the right edge only
/// tests the `Right` anchor on the x axis and nothing on the y axis, while
/// a corner drags one anchor per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeHandle {
    Top,
    Right,
    Bottom,
    Left,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeHandle {
    /// Moving anchors on the x axis, empty for top/bottom edges.
    #[must_use]
    pub const fn x_anchors(self) -> &'static [Anchor] {
        match self {
            ResizeHandle::Left | ResizeHandle::TopLeft | ResizeHandle::BottomLeft => {
                &[Anchor::Left]
            }
            ResizeHandle::Right | ResizeHandle::TopRight | ResizeHandle::BottomRight => {
                &[Anchor::Right]
            }
            ResizeHandle::Top | ResizeHandle::Bottom => &[],
        }
    }

    /// Moving anchors on the y axis, empty for left/right edges.
    #[must_use]
    pub const fn y_anchors(self) -> &'static [Anchor] {
        match self {
            ResizeHandle::Top | ResizeHandle::TopLeft | ResizeHandle::TopRight => &[Anchor::Top],
            ResizeHandle::Bottom | ResizeHandle::BottomLeft | ResizeHandle::BottomRight => {
                &[Anchor::Bottom]
            }
            ResizeHandle::Left | ResizeHandle::Right => &[],
        }
    }
}

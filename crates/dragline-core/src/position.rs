#![forbid(unsafe_code)]

//! Derived positional features for alignment comparison.
//!
//! A raw [`Rect`] is expanded once into a [`PositionData`]: the six named
//! projections (left, right, top, bottom and the two midpoints) that the
//! snap engine compares. Projections are computed at construction from the
//! source rectangle and never mutated independently, so they cannot drift.
//!
//! # Invariants
//!
//! 1. Anchors are partitioned by axis: `{Left, Right, CenterX}` belong to
//!    [`Axis::X`], `{Top, Bottom, CenterY}` to [`Axis::Y`]. The partition is
//!    fixed and the two sets are never mixed in one scoring pass.
//! 2. `index` is `Some` only for sibling snapshots; synthetic rectangles
//!    (container, padding guides) carry `None`.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// One of the two independent alignment dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Horizontal: compares left/right edges and the horizontal center.
    X,
    /// Vertical: compares top/bottom edges and the vertical center.
    Y,
}

impl Axis {
    /// The full anchor set for this axis.
    #[must_use]
    pub const fn anchors(self) -> &'static [Anchor; 3] {
        match self {
            Axis::X => &[Anchor::Left, Anchor::Right, Anchor::CenterX],
            Axis::Y => &[Anchor::Top, Anchor::Bottom, Anchor::CenterY],
        }
    }
}

/// A named projection of a rectangle onto one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Left,
    Right,
    CenterX,
    Top,
    Bottom,
    CenterY,
}

impl Anchor {
    /// The axis this anchor projects onto.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Anchor::Left | Anchor::Right | Anchor::CenterX => Axis::X,
            Anchor::Top | Anchor::Bottom | Anchor::CenterY => Axis::Y,
        }
    }
}

/// A rectangle plus its six derived projections.
///
/// Created fresh at gesture start for every sibling (and cached for the
/// gesture), and recomputed on demand for the moving rectangle each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionData {
    index: Option<usize>,
    rect: Rect,
    l: f64,
    r: f64,
    t: f64,
    b: f64,
    lr: f64,
    tb: f64,
}

impl PositionData {
    /// Derive features for a synthetic rectangle (container, padding guide).
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            index: None,
            rect,
            l: rect.x,
            r: rect.x + rect.w,
            t: rect.y,
            b: rect.y + rect.h,
            lr: rect.x + rect.w / 2.0,
            tb: rect.y + rect.h / 2.0,
        }
    }

    /// Derive features for the sibling at `index`.
    #[must_use]
    pub fn with_index(rect: Rect, index: usize) -> Self {
        Self {
            index: Some(index),
            ..Self::new(rect)
        }
    }

    /// The sibling index, if this represents a sibling element.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    /// The source rectangle.
    #[inline]
    #[must_use]
    pub const fn rect(&self) -> &Rect {
        &self.rect
    }

    /// The projection value for the given anchor.
    #[must_use]
    pub const fn anchor(&self, anchor: Anchor) -> f64 {
        match anchor {
            Anchor::Left => self.l,
            Anchor::Right => self.r,
            Anchor::CenterX => self.lr,
            Anchor::Top => self.t,
            Anchor::Bottom => self.b,
            Anchor::CenterY => self.tb,
        }
    }

    /// The origin coordinate on the given axis (`x` or `y`).
    #[inline]
    #[must_use]
    pub const fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.rect.x,
            Axis::Y => self.rect.y,
        }
    }
}

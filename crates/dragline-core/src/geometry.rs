#![forbid(unsafe_code)]

//! Pixel rectangles and padding specifications.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// An axis-aligned rectangle in container-local pixels.
///
/// Origin is the container's top-left corner. The drag/resize layer produces
/// one of these per movement tick; the engine treats it as immutable for the
/// duration of that tick.
///
/// Invariant: `w >= 0`, `h >= 0`, all fields finite. [`Rect::validate`]
/// checks this; the session entry points reject violating rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in pixels.
    pub w: f64,
    /// Height in pixels.
    pub h: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    #[must_use]
    pub const fn from_size(w: f64, h: f64) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    /// Right edge (`x + w`).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge (`y + h`).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Check that all fields are finite and sizes are non-negative.
    pub fn validate(&self) -> Result<(), GeometryError> {
        for (field, value) in [("x", self.x), ("y", self.y), ("w", self.w), ("h", self.h)] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { field, value });
            }
        }
        if self.w < 0.0 {
            return Err(GeometryError::NegativeSize {
                dimension: "width",
                value: self.w,
            });
        }
        if self.h < 0.0 {
            return Err(GeometryError::NegativeSize {
                dimension: "height",
                value: self.h,
            });
        }
        Ok(())
    }

    /// Clamp this rectangle so it stays inside a container of the given size.
    ///
    /// The container's origin is at `(0, 0)`. A rectangle wider or taller
    /// than the container pins to the origin on that axis.
    #[must_use]
    pub fn clamp_to(&self, container: &Rect) -> Rect {
        let max_left = container.w - self.w;
        let max_top = container.h - self.h;

        Rect {
            x: self.x.min(max_left).max(0.0),
            y: self.y.min(max_top).max(0.0),
            w: self.w,
            h: self.h,
        }
    }

    /// Shrink by the given padding on each side.
    ///
    /// Sizes floor at zero when the padding exceeds the rectangle.
    #[must_use]
    pub fn inner(&self, padding: Padding) -> Rect {
        Rect {
            x: self.x + padding.left,
            y: self.y + padding.top,
            w: (self.w - padding.left - padding.right).max(0.0),
            h: (self.h - padding.top - padding.bottom).max(0.0),
        }
    }
}

/// Four-sided padding in pixels.
///
/// Accepts the shorthand forms the container API exposes: a single number
/// applies to all sides, a pair is `(vertical, horizontal)`, and a
/// four-element array is `[top, right, bottom, left]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    /// Equal padding on all sides.
    #[must_use]
    pub const fn all(val: f64) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Padding with specific values per side.
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    #[must_use]
    pub fn horizontal_sum(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    #[must_use]
    pub fn vertical_sum(&self) -> f64 {
        self.top + self.bottom
    }
}

impl From<f64> for Padding {
    fn from(val: f64) -> Self {
        Self::all(val)
    }
}

impl From<(f64, f64)> for Padding {
    fn from((vertical, horizontal): (f64, f64)) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl From<(f64, f64, f64, f64)> for Padding {
    fn from((top, right, bottom, left): (f64, f64, f64, f64)) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl From<[f64; 4]> for Padding {
    fn from([top, right, bottom, left]: [f64; 4]) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

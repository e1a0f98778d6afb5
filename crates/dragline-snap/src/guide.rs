#![forbid(unsafe_code)]

//! Guide lines and their rendered extents.

use dragline_core::{Axis, PositionData};
use serde::{Deserialize, Serialize};

/// Rendered length and starting offset of a guide line along its own axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineExtent {
    /// Distance from the nearest to the farthest of the four cross-axis
    /// projection points of the two compared rectangles.
    pub length: f64,
    /// The nearest of those points: where the line starts.
    pub origin: f64,
}

/// A visual alignment line produced by a snap.
///
/// Guide lines exist only for the duration of an active gesture and are
/// cleared when it ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    /// Index of the sibling this line aligns with, `None` for the container
    /// or a padding guide.
    pub index: Option<usize>,
    /// Coordinate at which the line is drawn (perpendicular offset).
    pub value: f64,
    /// Rendered extent along the line's own axis.
    pub length: f64,
    /// Starting offset along the line's own axis.
    pub origin: f64,
}

/// Compute the rendered extent of a guide line between two rectangles.
///
/// For axis `X` the line is vertical, so the extent is measured vertically
/// over `{compare.top, compare.bottom, moving.y, moving.y + moving.h}`; for
/// axis `Y` the horizontal counterparts. The line spans from the
/// topmost/leftmost edge among the two rectangles to the bottommost/
/// rightmost, so it visibly connects both shapes regardless of their
/// relative offset.
#[must_use]
pub fn line_extent(moving: &PositionData, compare: &PositionData, axis: Axis) -> LineExtent {
    let m = moving.rect();
    let values = match axis {
        Axis::X => [compare.rect().y, compare.rect().bottom(), m.y, m.bottom()],
        Axis::Y => [compare.rect().x, compare.rect().right(), m.x, m.right()],
    };

    let mut min = values[0];
    let mut max = values[0];
    for &v in &values[1..] {
        min = min.min(v);
        max = max.max(v);
    }

    LineExtent {
        length: max - min,
        origin: min,
    }
}

#[cfg(test)]
mod tests {
    use super::line_extent;
    use dragline_core::{Axis, PositionData, Rect};

    #[test]
    fn vertical_line_spans_both_rects() {
        let moving = PositionData::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        let compare = PositionData::new(Rect::new(0.0, 20.0, 10.0, 10.0));

        let extent = line_extent(&moving, &compare, Axis::X);
        assert_eq!(extent.length, 30.0);
        assert_eq!(extent.origin, 0.0);
    }

    #[test]
    fn horizontal_line_spans_both_rects() {
        let moving = PositionData::new(Rect::new(5.0, 0.0, 10.0, 10.0));
        let compare = PositionData::new(Rect::new(40.0, 0.0, 20.0, 10.0));

        let extent = line_extent(&moving, &compare, Axis::Y);
        assert_eq!(extent.length, 55.0);
        assert_eq!(extent.origin, 5.0);
    }

    #[test]
    fn overlapping_rects_use_outer_edges() {
        let moving = PositionData::new(Rect::new(0.0, 10.0, 10.0, 30.0));
        let compare = PositionData::new(Rect::new(0.0, 15.0, 10.0, 10.0));

        let extent = line_extent(&moving, &compare, Axis::X);
        assert_eq!(extent.length, 30.0);
        assert_eq!(extent.origin, 10.0);
    }

    #[test]
    fn extent_is_symmetric_in_arguments() {
        let a = PositionData::new(Rect::new(3.0, 2.0, 7.0, 9.0));
        let b = PositionData::new(Rect::new(11.0, 30.0, 4.0, 5.0));

        assert_eq!(line_extent(&a, &b, Axis::X), line_extent(&b, &a, Axis::X));
        assert_eq!(line_extent(&a, &b, Axis::Y), line_extent(&b, &a, Axis::Y));
    }
}

#![forbid(unsafe_code)]

//! Per-pair candidate scoring on one axis.

use dragline_core::{Anchor, Axis, PositionData};
use serde::{Deserialize, Serialize};

use crate::guide::line_extent;

/// One potential alignment between a moving anchor and a comparison anchor.
///
/// Transient: produced per scoring call, never persisted beyond one
/// alignment pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Sibling index of the comparison rectangle, `None` for synthetics.
    pub index: Option<usize>,
    /// Whether `|dist|` is within the snap threshold.
    pub near: bool,
    /// Signed distance `moving[anchor] - compare[anchor]`.
    pub dist: f64,
    /// The coordinate the moving element would align to.
    pub value: f64,
    /// Guide-line length, carried redundantly for near and non-near entries.
    pub length: f64,
    /// Guide-line starting offset.
    pub origin: f64,
}

/// Score every (moving-anchor × comparison-anchor) pair on one axis.
///
/// `anchors` restricts the moving side (a resize handle only tests the
/// anchors it drags); the comparison side always uses the axis's full set,
/// so the result holds `anchors.len() * 3` candidates. A candidate is near
/// when `|dist| < threshold`, strict less-than on the padded gap.
#[must_use]
pub fn score_axis(
    moving: &PositionData,
    compare: &PositionData,
    axis: Axis,
    anchors: &[Anchor],
    threshold: f64,
) -> Vec<Candidate> {
    debug_assert!(
        anchors.iter().all(|a| a.axis() == axis),
        "moving anchors must belong to the scored axis"
    );

    let compare_anchors = axis.anchors();
    let extent = line_extent(moving, compare, axis);

    let mut results = Vec::with_capacity(anchors.len() * compare_anchors.len());
    for &moving_anchor in anchors {
        for &compare_anchor in compare_anchors {
            let dist = moving.anchor(moving_anchor) - compare.anchor(compare_anchor);
            results.push(Candidate {
                index: compare.index(),
                near: dist.abs() < threshold,
                dist,
                value: compare.anchor(compare_anchor),
                length: extent.length,
                origin: extent.origin,
            });
        }
    }

    results
}

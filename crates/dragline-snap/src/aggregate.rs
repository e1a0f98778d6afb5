#![forbid(unsafe_code)]

//! Nearest-group aggregation across a comparison set.

use dragline_core::{Anchor, Axis, PositionData};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::guide::GuideLine;
use crate::score::{Candidate, score_axis};

/// The snap result for one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnap {
    /// The moving rectangle's new coordinate on this axis. Unmodified when
    /// nothing is near.
    pub value: f64,
    /// The winning signed distance, `0` when nothing is near.
    pub dist: f64,
    /// One guide line per comparison rectangle sharing the winning distance.
    pub lines: Vec<GuideLine>,
    /// Sibling indices referenced by those lines, in encounter order.
    pub indices: Vec<usize>,
    /// Positions in the comparison list, parallel to `lines`.
    #[serde(skip)]
    pub(crate) slots: Vec<usize>,
}

impl AxisSnap {
    fn passthrough(moving: &PositionData, axis: Axis) -> Self {
        Self {
            value: moving.coord(axis),
            dist: 0.0,
            lines: Vec::new(),
            indices: Vec::new(),
            slots: Vec::new(),
        }
    }
}

/// Aggregate all near candidates on one axis and pick the best alignment.
///
/// Candidates are grouped by exact signed distance — candidates with
/// identical distance are the same alignment, so a moving edge that lines up
/// with two siblings at once yields one group holding both. The group with
/// the smallest absolute distance wins; ties keep encounter order (the sort
/// is stable). When nothing is near, the original coordinate passes through
/// with empty lines and indices.
///
/// The two axes are aggregated independently and never mixed: an element can
/// snap horizontally and vertically to different rectangles in one tick.
#[must_use]
pub fn aggregate_axis(
    moving: &PositionData,
    compares: &[PositionData],
    axis: Axis,
    anchors: &[Anchor],
    threshold: f64,
) -> AxisSnap {
    // Ordered (distance, group) pairs: no keying by stringified floats.
    let mut groups: Vec<(f64, Vec<(usize, Candidate)>)> = Vec::new();

    for (slot, compare) in compares.iter().enumerate() {
        for candidate in score_axis(moving, compare, axis, anchors, threshold) {
            if !candidate.near {
                continue;
            }
            match groups
                .iter_mut()
                .find(|(dist, _)| dist.total_cmp(&candidate.dist).is_eq())
            {
                Some((_, group)) => group.push((slot, candidate)),
                None => groups.push((candidate.dist, vec![(slot, candidate)])),
            }
        }
    }

    if groups.is_empty() {
        return AxisSnap::passthrough(moving, axis);
    }

    groups.sort_by(|(a, _), (b, _)| a.abs().total_cmp(&b.abs()));
    let (dist, group) = &groups[0];

    let mut lines = Vec::with_capacity(group.len());
    let mut slots = Vec::with_capacity(group.len());
    let mut indices = Vec::new();
    let mut seen = FxHashSet::default();

    for (slot, candidate) in group {
        lines.push(GuideLine {
            index: candidate.index,
            value: candidate.value,
            length: candidate.length,
            origin: candidate.origin,
        });
        slots.push(*slot);
        if let Some(index) = candidate.index
            && seen.insert(index)
        {
            indices.push(index);
        }
    }

    AxisSnap {
        value: moving.coord(axis) - dist,
        dist: *dist,
        lines,
        indices,
        slots,
    }
}

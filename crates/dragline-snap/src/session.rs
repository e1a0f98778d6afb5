#![forbid(unsafe_code)]

//! Per-gesture alignment sessions.
//!
//! [`SnapEngine`] holds the configuration and opens one session per gesture.
//! A session snapshots the comparison set once at gesture start — every
//! sibling except the mover, the container bounds, and the padding guides —
//! and each tick is then a pure function of (snapshot, current rectangle).
//! Nothing persists across gestures; dropping the session discards all of it.
//!
//! # Invariants
//!
//! 1. The snapshot is immutable for the session's lifetime; ticks never
//!    mutate it.
//! 2. The x and y axes are aggregated independently: one tick can snap
//!    horizontally to one sibling and vertically to another.
//! 3. Guide-line extents are refreshed against the snapshot only when both
//!    axes produced lines. Single-axis micro-movements otherwise make the
//!    combined lines oscillate; the partial refresh is the accepted
//!    mitigation, not a fix.
//!
//! # Failure Modes
//!
//! - No container measurement: container and padding comparisons are simply
//!   absent for the whole gesture; sibling alignment proceeds (fail-open).
//! - Malformed rectangles are rejected up front with a [`GeometryError`].

use dragline_core::{Axis, GeometryError, Padding, PositionData, Rect};
use rustc_hash::FxHashSet;

use crate::aggregate::{AxisSnap, aggregate_axis};
use crate::config::SnapConfig;
use crate::error::SnapError;
use crate::guide::{GuideLine, line_extent};
use crate::handle::ResizeHandle;
use crate::score::score_axis;

/// Opens alignment sessions from a shared configuration.
#[derive(Debug, Clone, Default)]
pub struct SnapEngine {
    config: SnapConfig,
}

impl SnapEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: SnapConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Begin a drag gesture for the sibling at `moving`.
    ///
    /// `rects` is the current geometry of every sibling, indexed by list
    /// position. `container` is the measured container box when available;
    /// pass `None` before the container is mounted and alignment against it
    /// is skipped for the gesture.
    pub fn begin_drag(
        &self,
        rects: &[Rect],
        moving: usize,
        container: Option<Rect>,
    ) -> Result<DragSession, SnapError> {
        let compares = self.comparisons(rects, moving, container.as_ref())?;
        tracing::debug!(moving, compares = compares.len(), "drag session started");

        Ok(DragSession {
            config: self.config,
            container,
            compares,
        })
    }

    /// Begin a resize gesture for the sibling at `moving` on `handle`.
    ///
    /// Snap target sizes are resolved here, once: resizable-edge snapping
    /// intercepts the size at drag time instead of adjusting it per tick,
    /// so every guide-line candidate is converted into the width/height at
    /// which the dragged edge would align.
    pub fn begin_resize(
        &self,
        rects: &[Rect],
        moving: usize,
        container: Option<Rect>,
        handle: ResizeHandle,
    ) -> Result<ResizeSession, SnapError> {
        let rect = *rects.get(moving).ok_or(SnapError::UnknownNode {
            index: moving,
            len: rects.len(),
        })?;
        let compares = self.comparisons(rects, moving, container.as_ref())?;

        let start = PositionData::with_index(rect, moving);
        let threshold = self.config.threshold();

        let mut snap_widths = Vec::new();
        let mut snap_heights = Vec::new();
        for compare in &compares {
            for candidate in score_axis(&start, compare, Axis::X, handle.x_anchors(), threshold) {
                snap_widths.push(rect.w - (candidate.value - rect.x));
            }
            for candidate in score_axis(&start, compare, Axis::Y, handle.y_anchors(), threshold) {
                snap_heights.push(rect.h - (candidate.value - rect.y));
            }
        }

        tracing::debug!(
            moving,
            ?handle,
            widths = snap_widths.len(),
            heights = snap_heights.len(),
            "resize session started"
        );

        Ok(ResizeSession {
            config: self.config,
            compares,
            handle,
            snap_widths,
            snap_heights,
        })
    }

    /// Build the gesture-start snapshot: siblings except the mover, then the
    /// container synthetic, then the padding guides.
    ///
    /// Padding is split into two synthetics so the targets stay full-bleed
    /// on their cross axis: left/right padding yields a full-height inner
    /// box, top/bottom padding a full-width one. A single padded box would
    /// present corner targets that align wrongly on one axis.
    fn comparisons(
        &self,
        rects: &[Rect],
        moving: usize,
        container: Option<&Rect>,
    ) -> Result<Vec<PositionData>, SnapError> {
        let mut compares = Vec::with_capacity(rects.len() + 2);
        for (index, rect) in rects.iter().enumerate() {
            rect.validate()?;
            if index != moving {
                compares.push(PositionData::with_index(*rect, index));
            }
        }

        if let Some(container) = container {
            container.validate()?;
            let bounds = Rect::from_size(container.w, container.h);
            compares.push(PositionData::new(bounds));

            if let Some(padding) = self.config.padding {
                compares.push(PositionData::new(
                    bounds.inner(Padding::new(0.0, padding.right, 0.0, padding.left)),
                ));
                compares.push(PositionData::new(
                    bounds.inner(Padding::new(padding.top, 0.0, padding.bottom, 0.0)),
                ));
            }
        }

        Ok(compares)
    }
}

/// Output of one drag tick.
#[derive(Debug, Clone, PartialEq)]
pub struct DragTick {
    /// Snapped (or clamped-only) x coordinate.
    pub x: f64,
    /// Snapped (or clamped-only) y coordinate.
    pub y: f64,
    /// Vertical guide lines from the x axis.
    pub v_lines: Vec<GuideLine>,
    /// Horizontal guide lines from the y axis.
    pub h_lines: Vec<GuideLine>,
    /// Deduplicated union of the sibling indices hit on either axis.
    pub indices: Vec<usize>,
}

/// An active drag gesture.
#[derive(Debug, Clone)]
pub struct DragSession {
    config: SnapConfig,
    container: Option<Rect>,
    compares: Vec<PositionData>,
}

impl DragSession {
    /// Run one alignment pass for the moving rectangle.
    ///
    /// The rectangle is clamped inside the container first, then both axes
    /// are aggregated against the gesture-start snapshot.
    pub fn tick(&self, rect: Rect) -> Result<DragTick, GeometryError> {
        rect.validate()?;
        let bounded = match &self.container {
            Some(container) => rect.clamp_to(container),
            None => rect,
        };
        let moving = PositionData::new(bounded);

        let threshold = self.config.threshold();
        let mut x_snap = aggregate_axis(
            &moving,
            &self.compares,
            Axis::X,
            Axis::X.anchors(),
            threshold,
        );
        let mut y_snap = aggregate_axis(
            &moving,
            &self.compares,
            Axis::Y,
            Axis::Y.anchors(),
            threshold,
        );

        let indices = merge_indices(&moving, &self.compares, &mut x_snap, &mut y_snap);

        Ok(DragTick {
            x: x_snap.value,
            y: y_snap.value,
            v_lines: x_snap.lines,
            h_lines: y_snap.lines,
            indices,
        })
    }

    /// The gesture-start comparison snapshot.
    #[must_use]
    pub fn compares(&self) -> &[PositionData] {
        &self.compares
    }
}

/// Output of one resize tick. Purely visual: size snapping was resolved at
/// gesture start via [`ResizeSession::snap_widths`] / [`snap_heights`].
///
/// [`snap_heights`]: ResizeSession::snap_heights
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeTick {
    /// Vertical guide lines from the x axis.
    pub v_lines: Vec<GuideLine>,
    /// Horizontal guide lines from the y axis.
    pub h_lines: Vec<GuideLine>,
    /// Deduplicated union of the sibling indices hit on either axis.
    pub indices: Vec<usize>,
}

/// An active resize gesture.
#[derive(Debug, Clone)]
pub struct ResizeSession {
    config: SnapConfig,
    compares: Vec<PositionData>,
    handle: ResizeHandle,
    snap_widths: Vec<f64>,
    snap_heights: Vec<f64>,
}

impl ResizeSession {
    /// Widths at which the dragged edge aligns with a candidate.
    #[must_use]
    pub fn snap_widths(&self) -> &[f64] {
        &self.snap_widths
    }

    /// Heights at which the dragged edge aligns with a candidate.
    #[must_use]
    pub fn snap_heights(&self) -> &[f64] {
        &self.snap_heights
    }

    /// The handle this gesture drags.
    #[must_use]
    pub fn handle(&self) -> ResizeHandle {
        self.handle
    }

    /// Recompute guide lines for the current geometry, display only.
    pub fn tick(&self, rect: Rect) -> Result<ResizeTick, GeometryError> {
        rect.validate()?;
        let moving = PositionData::new(rect);

        let threshold = self.config.threshold();
        let mut x_snap = aggregate_axis(
            &moving,
            &self.compares,
            Axis::X,
            self.handle.x_anchors(),
            threshold,
        );
        let mut y_snap = aggregate_axis(
            &moving,
            &self.compares,
            Axis::Y,
            self.handle.y_anchors(),
            threshold,
        );

        let indices = merge_indices(&moving, &self.compares, &mut x_snap, &mut y_snap);

        Ok(ResizeTick {
            v_lines: x_snap.lines,
            h_lines: y_snap.lines,
            indices,
        })
    }
}

/// Refresh line extents when both axes produced lines, then merge the hit
/// indices of both axes into one deduplicated list in encounter order.
fn merge_indices(
    moving: &PositionData,
    compares: &[PositionData],
    x_snap: &mut AxisSnap,
    y_snap: &mut AxisSnap,
) -> Vec<usize> {
    if !x_snap.lines.is_empty() && !y_snap.lines.is_empty() {
        refresh_extents(moving, compares, x_snap, Axis::X);
        refresh_extents(moving, compares, y_snap, Axis::Y);
    }

    let mut seen = FxHashSet::default();
    let mut indices = Vec::with_capacity(x_snap.indices.len() + y_snap.indices.len());
    for &index in x_snap.indices.iter().chain(&y_snap.indices) {
        if seen.insert(index) {
            indices.push(index);
        }
    }
    indices
}

fn refresh_extents(
    moving: &PositionData,
    compares: &[PositionData],
    snap: &mut AxisSnap,
    axis: Axis,
) {
    for (line, &slot) in snap.lines.iter_mut().zip(&snap.slots) {
        let extent = line_extent(moving, &compares[slot], axis);
        line.length = extent.length;
        line.origin = extent.origin;
    }
}

#[cfg(test)]
mod tests {
    use super::SnapEngine;
    use crate::config::SnapConfig;
    use crate::handle::ResizeHandle;
    use dragline_core::{Padding, Rect};

    fn engine() -> SnapEngine {
        SnapEngine::new(SnapConfig::default())
    }

    #[test]
    fn snapshot_excludes_the_mover() {
        let rects = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(30.0, 0.0, 10.0, 10.0),
            Rect::new(60.0, 0.0, 10.0, 10.0),
        ];
        let session = engine().begin_drag(&rects, 1, None).unwrap();

        let indices: Vec<_> = session.compares().iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![Some(0), Some(2)]);
    }

    #[test]
    fn container_adds_a_synthetic_compare() {
        let rects = [Rect::new(0.0, 0.0, 10.0, 10.0)];
        let session = engine()
            .begin_drag(&rects, 0, Some(Rect::from_size(200.0, 100.0)))
            .unwrap();

        assert_eq!(session.compares().len(), 1);
        let container = &session.compares()[0];
        assert_eq!(container.index(), None);
        assert_eq!(*container.rect(), Rect::from_size(200.0, 100.0));
    }

    #[test]
    fn padding_splits_into_two_full_bleed_guides() {
        let config = SnapConfig {
            padding: Some(Padding::new(10.0, 20.0, 30.0, 40.0)),
            ..Default::default()
        };
        let session = SnapEngine::new(config)
            .begin_drag(&[], 0, Some(Rect::from_size(200.0, 100.0)))
            .unwrap();

        // Container plus the two padding synthetics.
        assert_eq!(session.compares().len(), 3);
        // Left/right padding keeps full height.
        assert_eq!(
            *session.compares()[1].rect(),
            Rect::new(40.0, 0.0, 140.0, 100.0)
        );
        // Top/bottom padding keeps full width.
        assert_eq!(
            *session.compares()[2].rect(),
            Rect::new(0.0, 10.0, 200.0, 60.0)
        );
    }

    #[test]
    fn padding_without_container_is_skipped() {
        let config = SnapConfig {
            padding: Some(Padding::all(10.0)),
            ..Default::default()
        };
        let session = SnapEngine::new(config).begin_drag(&[], 0, None).unwrap();
        assert!(session.compares().is_empty());
    }

    #[test]
    fn drag_tick_snaps_to_sibling_edge() {
        let rects = [
            Rect::new(10.0, 200.0, 50.0, 50.0),
            Rect::new(0.0, 0.0, 5.0, 50.0),
        ];
        let session = engine().begin_drag(&rects, 0, None).unwrap();

        let tick = session.tick(Rect::new(10.0, 200.0, 50.0, 50.0)).unwrap();
        assert_eq!(tick.x, 5.0);
        assert_eq!(tick.y, 200.0);
        assert_eq!(tick.indices, vec![1]);
        assert_eq!(tick.v_lines.len(), 1);
        assert!(tick.h_lines.is_empty());
    }

    #[test]
    fn drag_tick_clamps_before_snapping() {
        let rects = [Rect::new(0.0, 0.0, 50.0, 50.0)];
        let session = engine()
            .begin_drag(&rects, 0, Some(Rect::from_size(100.0, 100.0)))
            .unwrap();

        let tick = session.tick(Rect::new(-30.0, 120.0, 50.0, 50.0)).unwrap();
        // Clamped to [0, 50] on both axes; both ends also snap to the
        // container edges exactly, so the coordinates stay put.
        assert_eq!(tick.x, 0.0);
        assert_eq!(tick.y, 50.0);
    }

    #[test]
    fn axes_snap_to_different_siblings_independently() {
        let rects = [
            Rect::new(100.0, 100.0, 40.0, 40.0),
            Rect::new(103.0, 300.0, 40.0, 40.0), // x candidate only
            Rect::new(300.0, 97.0, 40.0, 40.0),  // y candidate only
        ];
        let session = engine().begin_drag(&rects, 0, None).unwrap();

        let tick = session.tick(rects[0]).unwrap();
        assert_eq!(tick.x, 103.0);
        assert_eq!(tick.y, 97.0);
        assert_eq!(tick.indices, vec![1, 2]);
        assert!(!tick.v_lines.is_empty());
        assert!(!tick.h_lines.is_empty());
    }

    #[test]
    fn drag_tick_rejects_malformed_rect() {
        let session = engine().begin_drag(&[], 0, None).unwrap();
        assert!(session.tick(Rect::new(f64::NAN, 0.0, 1.0, 1.0)).is_err());
        assert!(session.tick(Rect::new(0.0, 0.0, -1.0, 1.0)).is_err());
    }

    #[test]
    fn begin_drag_rejects_malformed_sibling() {
        let rects = [Rect::new(0.0, 0.0, -5.0, 10.0)];
        assert!(engine().begin_drag(&rects, 1, None).is_err());
    }

    #[test]
    fn resize_targets_cover_every_candidate() {
        let rects = [
            Rect::new(100.0, 100.0, 50.0, 50.0),
            Rect::new(40.0, 0.0, 20.0, 20.0),
        ];
        let session = engine()
            .begin_resize(&rects, 0, None, ResizeHandle::Left)
            .unwrap();

        // One width per (left anchor x three comparison anchors), near or
        // not: right edge fixed at 150, targets are 150 - {40, 60, 50}.
        assert_eq!(session.snap_widths(), &[110.0, 90.0, 100.0]);
        assert!(session.snap_heights().is_empty());
    }

    #[test]
    fn resize_targets_follow_handle_axes() {
        let rects = [
            Rect::new(100.0, 100.0, 50.0, 50.0),
            Rect::new(0.0, 40.0, 20.0, 20.0),
        ];
        let session = engine()
            .begin_resize(&rects, 0, None, ResizeHandle::TopRight)
            .unwrap();

        assert_eq!(session.snap_widths().len(), 3);
        assert_eq!(session.snap_heights().len(), 3);
        // Bottom edge fixed at 150, top targets at {40, 60, 50}.
        assert_eq!(session.snap_heights(), &[110.0, 90.0, 100.0]);
    }

    #[test]
    fn resize_tick_is_display_only() {
        let rects = [
            Rect::new(100.0, 100.0, 50.0, 50.0),
            Rect::new(153.0, 100.0, 40.0, 40.0),
        ];
        let session = engine()
            .begin_resize(&rects, 0, None, ResizeHandle::Right)
            .unwrap();

        // Dragged width brings the right edge to 152, near the sibling's
        // left edge at 153.
        let tick = session.tick(Rect::new(100.0, 100.0, 52.0, 50.0)).unwrap();
        assert_eq!(tick.indices, vec![1]);
        assert!(!tick.v_lines.is_empty());
    }

    #[test]
    fn resize_edge_handle_ignores_cross_axis() {
        let rects = [
            Rect::new(100.0, 100.0, 50.0, 50.0),
            Rect::new(100.0, 200.0, 50.0, 50.0), // aligned on x already
        ];
        let session = engine()
            .begin_resize(&rects, 0, None, ResizeHandle::Bottom)
            .unwrap();

        // Bottom handle has no x anchors: no vertical lines even though the
        // left edges align exactly.
        let tick = session.tick(rects[0]).unwrap();
        assert!(tick.v_lines.is_empty());
    }

    #[test]
    fn begin_resize_rejects_unknown_index() {
        let err = engine()
            .begin_resize(&[], 0, None, ResizeHandle::Right)
            .unwrap_err();
        assert!(matches!(err, crate::SnapError::UnknownNode { .. }));
    }

    #[test]
    fn ticks_are_deterministic() {
        let rects = [
            Rect::new(10.0, 4.0, 50.0, 50.0),
            Rect::new(0.0, 0.0, 5.0, 50.0),
            Rect::new(60.0, 0.0, 20.0, 20.0),
        ];
        let session = engine().begin_drag(&rects, 0, None).unwrap();

        let first = session.tick(rects[0]).unwrap();
        let second = session.tick(rects[0]).unwrap();
        assert_eq!(first, second);
    }
}

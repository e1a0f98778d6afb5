#![forbid(unsafe_code)]

//! Stateful gesture controller.
//!
//! [`SnapController`] owns the node list, the measured container box, and
//! the guide lines currently on screen, and drives the per-gesture sessions:
//!
//! ```text
//! Idle --start_drag--> Dragging --drag_to*--> --stop--> Idle
//! Idle --start_resize--> Resizing --resize_to*--> --stop--> Idle
//! ```
//!
//! # Invariants
//!
//! 1. At most one gesture is active at a time; starting a second returns
//!    [`SnapError::GestureInProgress`].
//! 2. Guide lines are non-empty only while a gesture is active; `stop`
//!    always clears them and is idempotent.
//! 3. Aborting externally at any tick is just `stop()` — nothing needs
//!    unwinding because no state persists across gestures.
//!
//! # Failure Modes
//!
//! - No container measurement yet: gestures still run, aligning against
//!   siblings only.
//! - A tick with no active gesture returns [`SnapError::NoActiveGesture`]
//!   and changes nothing.

use dragline_core::Rect;

use crate::error::SnapError;
use crate::guide::GuideLine;
use crate::handle::ResizeHandle;
use crate::node::Node;
use crate::session::{DragSession, DragTick, ResizeSession, ResizeTick, SnapEngine};

/// The guide lines currently engaged, for rendering and highlighting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GuideLineSet {
    /// Vertical lines (x-axis alignments).
    pub v_lines: Vec<GuideLine>,
    /// Horizontal lines (y-axis alignments).
    pub h_lines: Vec<GuideLine>,
    /// Sibling indices engaged in a snap on either axis.
    pub indices: Vec<usize>,
}

impl GuideLineSet {
    fn clear(&mut self) {
        self.v_lines.clear();
        self.h_lines.clear();
        self.indices.clear();
    }
}

/// Summary of the controller's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Idle,
    Dragging { index: usize },
    Resizing { index: usize, handle: ResizeHandle },
}

enum Active {
    Dragging { index: usize, session: DragSession },
    Resizing { index: usize, session: ResizeSession },
}

/// Owns nodes and guide lines and drives alignment gestures over them.
pub struct SnapController<P> {
    engine: SnapEngine,
    nodes: Vec<Node<P>>,
    container: Option<Rect>,
    active: Option<Active>,
    guide_lines: GuideLineSet,
}

impl<P> std::fmt::Debug for SnapController<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapController")
            .field("nodes", &self.nodes.len())
            .field("gesture", &self.gesture())
            .finish()
    }
}

impl<P> SnapController<P> {
    /// Create a controller over the given nodes.
    #[must_use]
    pub fn new(engine: SnapEngine, nodes: Vec<Node<P>>) -> Self {
        Self {
            engine,
            nodes,
            container: None,
            active: None,
            guide_lines: GuideLineSet::default(),
        }
    }

    /// Record the container's measured box. `None` while unmounted;
    /// container and padding alignment is skipped until one is set.
    pub fn set_container(&mut self, container: Option<Rect>) {
        self.container = container;
    }

    /// The nodes in index order.
    #[must_use]
    pub fn nodes(&self) -> &[Node<P>] {
        &self.nodes
    }

    /// Replace the node list. An active gesture is stopped first.
    pub fn set_nodes(&mut self, nodes: Vec<Node<P>>) {
        self.stop();
        self.nodes = nodes;
    }

    /// The guide lines currently on screen.
    #[must_use]
    pub fn guide_lines(&self) -> &GuideLineSet {
        &self.guide_lines
    }

    /// The current state summary.
    #[must_use]
    pub fn gesture(&self) -> Gesture {
        match &self.active {
            None => Gesture::Idle,
            Some(Active::Dragging { index, .. }) => Gesture::Dragging { index: *index },
            Some(Active::Resizing { index, session }) => Gesture::Resizing {
                index: *index,
                handle: session.handle(),
            },
        }
    }

    /// Whether a gesture is in progress.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Begin dragging the node at `index`.
    pub fn start_drag(&mut self, index: usize) -> Result<(), SnapError> {
        self.check_start(index)?;

        let rects: Vec<Rect> = self.nodes.iter().map(|node| node.rect).collect();
        let session = self.engine.begin_drag(&rects, index, self.container)?;
        self.active = Some(Active::Dragging { index, session });
        Ok(())
    }

    /// Process one drag movement to `(x, y)`.
    ///
    /// The node's stored rectangle is updated to the snapped position, the
    /// guide lines are replaced, and the tick is returned for the caller to
    /// apply on screen.
    pub fn drag_to(&mut self, x: f64, y: f64) -> Result<DragTick, SnapError> {
        let Some(Active::Dragging { index, session }) = &self.active else {
            return Err(SnapError::NoActiveGesture);
        };

        let node = &mut self.nodes[*index];
        let tick = session.tick(Rect::new(x, y, node.rect.w, node.rect.h))?;
        node.rect.x = tick.x;
        node.rect.y = tick.y;

        self.store_lines(&tick.v_lines, &tick.h_lines, &tick.indices);
        Ok(tick)
    }

    /// Begin resizing the node at `index` on `handle`.
    pub fn start_resize(&mut self, index: usize, handle: ResizeHandle) -> Result<(), SnapError> {
        self.check_start(index)?;

        let rects: Vec<Rect> = self.nodes.iter().map(|node| node.rect).collect();
        let session = self
            .engine
            .begin_resize(&rects, index, self.container, handle)?;
        self.active = Some(Active::Resizing { index, session });
        Ok(())
    }

    /// Widths at which the dragged edge would align, when resizing.
    #[must_use]
    pub fn snap_widths(&self) -> Option<&[f64]> {
        match &self.active {
            Some(Active::Resizing { session, .. }) => Some(session.snap_widths()),
            _ => None,
        }
    }

    /// Heights at which the dragged edge would align, when resizing.
    #[must_use]
    pub fn snap_heights(&self) -> Option<&[f64]> {
        match &self.active {
            Some(Active::Resizing { session, .. }) => Some(session.snap_heights()),
            _ => None,
        }
    }

    /// Process one resize movement.
    ///
    /// The rectangle is stored as supplied — size snapping was already
    /// resolved at `start_resize` via the snap targets — and guide lines
    /// are refreshed for display.
    pub fn resize_to(&mut self, rect: Rect) -> Result<ResizeTick, SnapError> {
        let Some(Active::Resizing { index, session }) = &self.active else {
            return Err(SnapError::NoActiveGesture);
        };

        let tick = session.tick(rect)?;
        self.nodes[*index].rect = rect;

        self.store_lines(&tick.v_lines, &tick.h_lines, &tick.indices);
        Ok(tick)
    }

    /// End the current gesture, clearing guide lines and snap targets.
    /// Safe to call when already idle.
    pub fn stop(&mut self) {
        if self.active.take().is_some() {
            tracing::debug!("gesture stopped");
        }
        self.guide_lines.clear();
    }

    fn check_start(&self, index: usize) -> Result<(), SnapError> {
        if self.active.is_some() {
            return Err(SnapError::GestureInProgress);
        }
        let node = self.nodes.get(index).ok_or(SnapError::UnknownNode {
            index,
            len: self.nodes.len(),
        })?;
        if node.disabled {
            return Err(SnapError::NodeDisabled { index });
        }
        Ok(())
    }

    fn store_lines(&mut self, v_lines: &[GuideLine], h_lines: &[GuideLine], indices: &[usize]) {
        self.guide_lines.v_lines = v_lines.to_vec();
        self.guide_lines.h_lines = h_lines.to_vec();
        self.guide_lines.indices = indices.to_vec();
    }
}

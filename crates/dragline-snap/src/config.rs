#![forbid(unsafe_code)]

//! Engine configuration.

use dragline_core::Padding;
use serde::{Deserialize, Serialize};

/// Default snap gap in pixels.
pub const DEFAULT_SNAP_GAP: f64 = 5.0;

/// Tuning knobs for the alignment engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Maximum pixel distance at which an alignment is close enough to snap.
    ///
    /// The effective comparison is `|dist| < snap_gap + 1`: the gap is
    /// padded by one pixel and tested with strict less-than, so the default
    /// gap of 5 admits distances up to and including 5.
    pub snap_gap: f64,

    /// Optional padding guides inside the container.
    ///
    /// When set, two synthetic comparison rectangles are added per gesture
    /// so elements can snap to the padded inner box.
    pub padding: Option<Padding>,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            snap_gap: DEFAULT_SNAP_GAP,
            padding: None,
        }
    }
}

impl SnapConfig {
    /// The strict upper bound on `|dist|` for a near candidate.
    #[inline]
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.snap_gap + 1.0
    }
}

//! Visibility gate for the conversation panel
//!
//! The host samples whether the panel's region currently intersects the
//! viewport and feeds every sample through `observe`. The gate is a pure
//! edge detector: repeated identical samples produce no edge, so a run in
//! flight is never restarted by a redundant "still visible" observation.

use tracing::debug;

/// A visibility transition reported by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEdge {
    /// The panel went from not-visible to visible (including the very first
    /// visible sample). Signals "start a new run".
    Entered,
    /// The panel went from visible to not-visible.
    Left,
}

/// Edge detector over repeated visibility samples.
///
/// Starts in the not-visible state, so the first visible sample reports
/// `Entered`.
#[derive(Debug, Default)]
pub struct VisibilityGate {
    visible: bool,
}

impl VisibilityGate {
    pub fn new() -> Self {
        Self { visible: false }
    }

    /// Whether the last sample was visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed one visibility sample; returns the edge it produced, if any.
    pub fn observe(&mut self, visible: bool) -> Option<VisibilityEdge> {
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        let edge = if visible {
            VisibilityEdge::Entered
        } else {
            VisibilityEdge::Left
        };
        debug!(?edge, "visibility edge");
        Some(edge)
    }
}

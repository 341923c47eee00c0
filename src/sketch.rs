//! The polygon draft - ordered vertex list plus collection mode.

use tracing::debug;

use crate::constants::MIN_POLYGON_VERTICES;
use crate::input::InputMode;
use crate::types::Vertex;

/// Ordered vertex list under construction.
///
/// Insertion order defines edge connectivity; the closing edge from the
/// last vertex back to the first is implicit and never stored. The draft
/// also owns its collection mode - whether place gestures append or reset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonDraft {
    vertices: Vec<Vertex>,
    mode: InputMode,
    start_point: Option<Vertex>,
}

impl PolygonDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex. Silent no-op outside `Collecting` - an intentional
    /// guard, not a failure.
    pub fn push_vertex(&mut self, v: Vertex) {
        if !self.mode.is_collecting() {
            debug!(x = v.x, y = v.y, "vertex ignored while locked");
            return;
        }
        if self.vertices.is_empty() {
            self.start_point = Some(v);
        }
        self.vertices.push(v);
        debug!(x = v.x, y = v.y, count = self.vertices.len(), "vertex placed");
    }

    /// Clear all vertices and return to `Collecting`. Valid from any mode.
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.start_point = None;
        self.mode = InputMode::Collecting;
        debug!("draft reset");
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The first vertex placed, recorded for start-point highlighting.
    /// Carries no special role in area computation.
    pub fn start_point(&self) -> Option<Vertex> {
        self.start_point
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// True once the draft has enough vertices for the closure gesture.
    pub fn can_close(&self) -> bool {
        self.vertices.len() >= MIN_POLYGON_VERTICES
    }

    #[cfg(test)]
    pub(crate) fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }
}

//! Pointer-button-press handling - gesture routing for the sketch session.
//!
//! All transitions are instantaneous, synchronous reactions to discrete
//! input events. Guard conditions are silent no-ops, matching the
//! low-stakes, interactive nature of the tool.

use tracing::{debug, info};

use crate::app::Sketchpad;
use crate::input::coords::CoordinateConverter;
use crate::profile_scope;
use crate::types::PointerButtonEvent;

impl Sketchpad {
    /// Route a pointer-button press.
    ///
    /// With default bindings (place = left, close = right):
    ///
    /// - place, mode `Collecting` -> append the normalized vertex
    /// - close, mode `Collecting`, >= 3 vertices -> set the closure flag
    ///   (the mode stays `Collecting`; placing may continue)
    /// - place, mode `Locked` -> reset draft and closure flag
    ///
    /// Any other combination is ignored.
    pub fn handle_pointer_down(&mut self, event: &PointerButtonEvent) {
        profile_scope!("handle_pointer_down");

        if event.viewport.is_degenerate() {
            debug!(
                width = event.viewport.width,
                height = event.viewport.height,
                "event ignored: degenerate viewport"
            );
            return;
        }
        self.canvas.viewport = event.viewport;

        let bindings = self.settings.bindings;
        if event.button == bindings.place {
            if self.canvas.draft.mode().is_collecting() {
                let v = CoordinateConverter::screen_to_normalized(event.position, event.viewport);
                self.canvas.draft.push_vertex(v);
            } else {
                self.canvas.draft.reset();
                self.canvas.closed = false;
                info!("session reset");
            }
        } else if event.button == bindings.close {
            if self.canvas.draft.mode().is_collecting() && self.canvas.draft.can_close() {
                self.canvas.closed = true;
                info!(vertices = self.canvas.draft.len(), "polygon closed");
            } else {
                debug!(
                    vertices = self.canvas.draft.len(),
                    "closure gesture ignored"
                );
            }
        }
    }
}

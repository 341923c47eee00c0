//! The sketch session - owns all mutable state and answers frame queries.

mod state;

pub use state::{CanvasState, Sketchpad, SystemState};

use anyhow::Context as _;

use crate::geometry;
use crate::profile_scope;
use crate::render::canvas::{self, CanvasFrame};
use crate::settings::Settings;

impl Sketchpad {
    /// Create a session with default settings.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a session with explicit settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            canvas: CanvasState::new(),
            settings,
            system: SystemState::new(),
        }
    }

    /// Create a session from settings saved on disk, falling back to
    /// defaults when no file exists.
    pub fn with_saved_settings() -> anyhow::Result<Self> {
        let settings = Settings::load_or_default().context("loading settings")?;
        Ok(Self::with_settings(settings))
    }

    /// Current polygon area in normalized units, recomputed from scratch.
    pub fn area(&self) -> f32 {
        geometry::polygon_area(self.canvas.draft.vertices())
    }

    /// Current polygon area scaled to the most recently reported viewport.
    pub fn area_in_pixels(&self) -> f32 {
        geometry::polygon_area_in_pixels(self.canvas.draft.vertices(), self.canvas.viewport)
    }

    /// True once the closure gesture has landed with enough vertices.
    pub fn is_closed(&self) -> bool {
        self.canvas.closed
    }

    /// Assemble the view-model for the current frame.
    ///
    /// Called once per render frame by the front-end; the area is
    /// recomputed here rather than cached on mutation.
    pub fn frame(&mut self) -> CanvasFrame {
        profile_scope!("frame");
        self.system.perf_monitor.begin_frame();

        let frame = canvas::build_frame(
            self.canvas.draft.vertices(),
            self.canvas.closed,
            self.canvas.viewport,
            &self.settings.display,
        );

        let _ = self.system.perf_monitor.end_frame();
        frame
    }
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new()
    }
}

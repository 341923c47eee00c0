//! Session state - the Sketchpad struct definition and sub-structs.

use crate::perf::PerfMonitor;
use crate::settings::Settings;
use crate::sketch::PolygonDraft;
use crate::types::Viewport;

/// Canvas interaction state - the draft and its closure flag.
pub struct CanvasState {
    /// Vertex list under construction
    pub draft: PolygonDraft,
    /// Set once the closure gesture lands with enough vertices.
    /// Independent of the draft's collection mode: a closed shape can
    /// still collect further vertices.
    pub closed: bool,
    /// Viewport reported by the most recent pointer event
    pub viewport: Viewport,
}

impl CanvasState {
    pub fn new() -> Self {
        Self {
            draft: PolygonDraft::new(),
            closed: false,
            viewport: Viewport::default(),
        }
    }
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new()
    }
}

/// Performance and system state
pub struct SystemState {
    /// Frame timing monitor
    pub perf_monitor: PerfMonitor,
}

impl SystemState {
    pub fn new() -> Self {
        Self {
            perf_monitor: PerfMonitor::new(),
        }
    }
}

impl Default for SystemState {
    fn default() -> Self {
        Self::new()
    }
}

/// Main session state - composed of focused sub-structs.
///
/// An explicit object owned by the caller, passed wherever the draft or
/// area is needed. There are no ambient globals.
pub struct Sketchpad {
    /// Canvas interaction state
    pub canvas: CanvasState,
    /// Gesture bindings and display options
    pub settings: Settings,
    /// Performance and system state
    pub system: SystemState,
}

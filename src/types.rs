//! Core value types shared across the crate.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};

/// A vertex in normalized coordinate space, both axes in [-1, 1].
///
/// Y grows upward; the screen-to-normalized conversion flips the axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

impl Vertex {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A raw pointer position in top-down pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pixel dimensions of the render surface at the moment an event fired.
///
/// Pixel-area conversions are only meaningful for the viewport supplied at
/// the moment of computation; the mapping changes with every resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count as a float, for area scaling.
    pub fn pixel_count(&self) -> f32 {
        self.width as f32 * self.height as f32
    }

    /// True if either dimension is zero. Coordinate conversion is undefined
    /// for degenerate viewports; callers must guard.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// Pointer buttons the gesture bindings can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// A pointer-button-press event delivered by the windowing front-end.
///
/// Carries the viewport so pixel coordinates can be normalized against the
/// surface size that was current when the press happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerButtonEvent {
    pub button: PointerButton,
    pub position: ScreenPoint,
    pub viewport: Viewport,
}

impl PointerButtonEvent {
    pub fn new(button: PointerButton, position: ScreenPoint, viewport: Viewport) -> Self {
        Self {
            button,
            position,
            viewport,
        }
    }
}

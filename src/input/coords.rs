//! Coordinate conversion between pointer pixels and normalized space.
//!
//! This module provides centralized conversion functions so the mapping
//! formula lives in exactly one place. All geometry runs in a fixed
//! [-1, 1] x [-1, 1] plane independent of the window pixel size; pointer
//! events are mapped into it on arrival, and areas are mapped back out to
//! pixel units only at display time.

use crate::constants::NORMALIZED_SPACE_AREA;
use crate::types::{ScreenPoint, Vertex, Viewport};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a pointer position to normalized coordinates.
    ///
    /// The Y axis flips because input devices report top-down pixel
    /// coordinates while the normalized plane is bottom-up centered.
    /// Formula: `x = px/w*2 - 1`, `y = (h - py)/h*2 - 1`
    #[inline]
    pub fn screen_to_normalized(pos: ScreenPoint, viewport: Viewport) -> Vertex {
        debug_assert!(!viewport.is_degenerate(), "degenerate viewport");
        let w = viewport.width as f32;
        let h = viewport.height as f32;
        Vertex::new(pos.x / w * 2.0 - 1.0, (h - pos.y) / h * 2.0 - 1.0)
    }

    /// Convert a normalized vertex back to top-down pixel coordinates.
    #[inline]
    pub fn normalized_to_screen(v: Vertex, viewport: Viewport) -> ScreenPoint {
        debug_assert!(!viewport.is_degenerate(), "degenerate viewport");
        let w = viewport.width as f32;
        let h = viewport.height as f32;
        ScreenPoint::new((v.x + 1.0) / 2.0 * w, h - (v.y + 1.0) / 2.0 * h)
    }

    /// Scale a normalized area to pixel units for the given viewport.
    ///
    /// The normalized square maps bijectively onto the current viewport, so
    /// the result is only meaningful for the viewport supplied here and now;
    /// it must not be stored across resizes.
    #[inline]
    pub fn normalized_to_pixel_area(area: f32, viewport: Viewport) -> f32 {
        debug_assert!(!viewport.is_degenerate(), "degenerate viewport");
        area / NORMALIZED_SPACE_AREA * viewport.pixel_count()
    }
}

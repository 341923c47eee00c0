//! Polygon area computation.
//!
//! Area comes from the shoelace formula over the cyclic vertex sequence:
//! the index wraps modulo n, so callers never append an explicit closing
//! vertex. The result is recomputed from scratch on every query - vertex
//! edits arrive at click frequency, far below frame frequency, so there is
//! nothing to cache.

use crate::input::coords::CoordinateConverter;
use crate::types::{Vertex, Viewport};

/// Absolute polygon area in normalized units.
///
/// Total over any vertex count: fewer than 3 vertices degrades to 0.0
/// naturally (the shoelace sum telescopes). Winding direction does not
/// affect the magnitude.
pub fn polygon_area(vertices: &[Vertex]) -> f32 {
    let n = vertices.len();
    let mut sum = 0.0f32;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y;
    }
    sum.abs() / 2.0
}

/// Polygon area scaled to the given viewport's pixel units.
pub fn polygon_area_in_pixels(vertices: &[Vertex], viewport: Viewport) -> f32 {
    CoordinateConverter::normalized_to_pixel_area(polygon_area(vertices), viewport)
}

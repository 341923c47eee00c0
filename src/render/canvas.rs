//! Canvas view-model - what the front-end should draw this frame.
//!
//! The crate never touches a drawing API. Instead every frame is described
//! as a list of backend-agnostic shapes in normalized coordinates, plus the
//! recomputed area readout. The windowing front-end walks the list and
//! renders it however it likes.

use serde::Serialize;

use crate::geometry;
use crate::settings::DisplaySettings;
use crate::types::{Vertex, Viewport};

/// Stroke styling for outline shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawStyle {
    pub stroke: &'static str,
    pub stroke_width: f32,
}

/// A drawing primitive in normalized coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CanvasShape {
    /// A filled dot at a placed vertex
    Marker {
        center: Vertex,
        radius: f32,
        fill: &'static str,
    },
    /// Open run of edges between consecutive points
    PolyLine {
        points: Vec<Vertex>,
        style: DrawStyle,
    },
    /// Closed outline - the last point joins back to the first
    Polygon {
        points: Vec<Vertex>,
        style: DrawStyle,
    },
}

/// Everything the front-end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanvasFrame {
    /// Shapes in draw order (outline first, markers on top)
    pub shapes: Vec<CanvasShape>,
    /// Area in normalized units, recomputed for this frame.
    /// Shown in the read-only numeric field regardless of closure.
    pub area: f32,
    /// Area scaled to the current viewport's pixel units
    pub area_pixels: f32,
    /// Overlay label, present only once the shape is closed
    pub overlay: Option<String>,
}

/// Assemble the frame for the given draft state.
pub(crate) fn build_frame(
    vertices: &[Vertex],
    closed: bool,
    viewport: Viewport,
    display: &DisplaySettings,
) -> CanvasFrame {
    let area = geometry::polygon_area(vertices);
    let area_pixels = geometry::polygon_area_in_pixels(vertices, viewport);

    let overlay = if closed && vertices.len() >= crate::constants::MIN_POLYGON_VERTICES {
        Some(format!("Area: {:.prec$}", area, prec = display.area_decimals))
    } else {
        None
    };

    CanvasFrame {
        shapes: draft_shapes(vertices, display),
        area,
        area_pixels,
        overlay,
    }
}

/// Shapes for the draft: outline below, one marker per vertex on top.
///
/// The outline is drawn as a closed loop as soon as two vertices exist -
/// with exactly two the closing edge retraces the same segment, which is
/// indistinguishable on screen.
fn draft_shapes(vertices: &[Vertex], display: &DisplaySettings) -> Vec<CanvasShape> {
    let mut shapes = Vec::new();

    if vertices.len() >= 2 {
        shapes.push(CanvasShape::Polygon {
            points: vertices.to_vec(),
            style: DrawStyle {
                stroke: crate::constants::OUTLINE_COLOR,
                stroke_width: display.line_width,
            },
        });
    }

    for v in vertices {
        shapes.push(CanvasShape::Marker {
            center: *v,
            radius: display.marker_radius,
            fill: crate::constants::MARKER_COLOR,
        });
    }

    shapes
}

//! Application-wide constants.
//!
//! Centralizes magic numbers and default values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Geometry
// ============================================================================

/// Area of the full [-1, 1] x [-1, 1] normalized square.
///
/// Pixel-area conversion scales by `viewport pixel count / this`.
pub const NORMALIZED_SPACE_AREA: f32 = 4.0;

/// Minimum vertex count for the closure gesture to take effect
pub const MIN_POLYGON_VERTICES: usize = 3;

// ============================================================================
// Viewport Defaults
// ============================================================================

/// Default viewport width in pixels
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 800;

/// Default viewport height in pixels
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;

// ============================================================================
// Display Defaults
// ============================================================================

/// Default outline stroke width in pixels
pub const DEFAULT_LINE_WIDTH: f32 = 2.0;

/// Default vertex marker radius in pixels
pub const DEFAULT_MARKER_RADIUS: f32 = 4.0;

/// Default number of decimals in the area readout
pub const DEFAULT_AREA_DECIMALS: usize = 2;

// ============================================================================
// Colors (default hex values)
// ============================================================================

/// Outline color for the draft polygon (purple)
pub const OUTLINE_COLOR: &str = "#800080";

/// Fill color for vertex markers (red)
pub const MARKER_COLOR: &str = "#ff0000";

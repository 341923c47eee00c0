//! Interaction core for a click-to-sketch polygon area tool.
//!
//! The crate owns the session state machine (vertex collection, closure,
//! reset), the screen-to-normalized coordinate mapping, and the shoelace
//! area computation. Window creation, GL context setup, and actual drawing
//! belong to an external front-end: it feeds [`PointerButtonEvent`]s into
//! the [`Sketchpad`] session and consumes the per-frame [`CanvasFrame`]
//! view-model.
//!
//! ## Architecture
//!
//! - `input` - coordinate conversion, collection mode, gesture routing
//! - `sketch` - the polygon draft (ordered vertex list + mode)
//! - `geometry` - shoelace area computation
//! - `app` - the `Sketchpad` session object and frame queries
//! - `render` - backend-agnostic view-model of what to draw
//! - `settings` - gesture bindings and display options, JSON on disk
//! - `perf` - frame timing and profiling instrumentation

pub mod app;
pub mod constants;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod perf;
pub mod render;
pub mod settings;
pub mod sketch;
pub mod types;

pub use app::Sketchpad;
pub use render::canvas::{CanvasFrame, CanvasShape};
pub use settings::Settings;
pub use sketch::PolygonDraft;
pub use types::{PointerButton, PointerButtonEvent, ScreenPoint, Vertex, Viewport};

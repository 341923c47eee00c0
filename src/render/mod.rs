//! Per-frame view-model handed to the drawing front-end.

pub mod canvas;

//! Pointer input handling for the sketch session.
//!
//! ## Architecture
//!
//! The input system uses an explicit mode enum (`InputMode`) on the polygon
//! draft instead of a scattered boolean flag, and routes discrete
//! pointer-button events synchronously - no callbacks, no queues.
//!
//! ## Modules
//!
//! - `coords` - pixel <-> normalized coordinate conversion
//! - `state` - the collection mode enum
//! - `mouse_down` - pointer-button-press routing on the session

pub mod coords;
mod mouse_down;
mod state;

pub use state::InputMode;

//! Collection mode for the polygon draft.
//!
//! Two-state machine replacing a raw boolean flag:
//!
//! ```text
//! Collecting -> Collecting   (place gesture appends a vertex)
//! Locked     -> Collecting   (place gesture resets the draft)
//! ```
//!
//! Nothing in the current gesture routing ever switches into `Locked`; only
//! the reset arm consumes it. Closure is tracked separately on the session,
//! so a closed shape can still collect further vertices.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Place gestures append vertices to the draft
    #[default]
    Collecting,
    /// Place gestures reset the draft instead of appending
    Locked,
}

impl InputMode {
    /// Returns true if place gestures append vertices
    pub fn is_collecting(&self) -> bool {
        matches!(self, Self::Collecting)
    }

    /// Returns true if place gestures reset the draft
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked)
    }
}

//! User settings - gesture bindings and display options.
//!
//! Stored as JSON under the platform config directory. Every field has a
//! default, and missing fields fall back to those defaults, so old settings
//! files keep loading across releases.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::{DEFAULT_AREA_DECIMALS, DEFAULT_LINE_WIDTH, DEFAULT_MARKER_RADIUS};
use crate::types::PointerButton;

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// No platform config directory available
    #[error("no config directory available")]
    NoConfigDir,
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Which pointer buttons trigger which gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureBindings {
    /// Places a vertex while collecting; resets while locked
    pub place: PointerButton,
    /// Marks the draft closed once it has enough vertices
    pub close: PointerButton,
}

impl Default for GestureBindings {
    fn default() -> Self {
        Self {
            place: PointerButton::Left,
            close: PointerButton::Right,
        }
    }
}

/// How the draft and area readout are presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Decimals shown in the area overlay label
    pub area_decimals: usize,
    /// Outline stroke width in pixels
    pub line_width: f32,
    /// Vertex marker radius in pixels
    pub marker_radius: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            area_decimals: DEFAULT_AREA_DECIMALS,
            line_width: DEFAULT_LINE_WIDTH,
            marker_radius: DEFAULT_MARKER_RADIUS,
        }
    }
}

/// All user settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bindings: GestureBindings,
    pub display: DisplaySettings,
}

impl Settings {
    /// Path of the settings file under the platform config directory.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(dir.join("polysketch").join("settings.json"))
    }

    /// Load settings from an explicit path.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let contents = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)?;
        debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Save settings to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Load from the default path, falling back to defaults when the file
    /// does not exist. A file that exists but fails to parse is an error -
    /// silently discarding a user's edits would be worse than failing.
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        match Self::load_from(&path) {
            Ok(settings) => Ok(settings),
            Err(SettingsError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                Ok(Self::default())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load settings");
                Err(e)
            }
        }
    }
}

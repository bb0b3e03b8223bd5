//! Persisted editor settings
//!
//! Stored as TOML. Missing keys fall back to their defaults so older
//! files keep loading after new settings are added.

use std::{fs, path::Path};

use semitile_engine::{EngineError, Result};
use serde::{Deserialize, Serialize};

use crate::tile_edit::{DEFAULT_MAX_HISTORY_SIZE, DEFAULT_ZOOM};
use crate::tools::Tool;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Number of undo steps kept before the oldest are dropped
    #[serde(default = "default_max_history_size")]
    pub max_history_size: usize,

    /// Zoom factor for new editors
    #[serde(default = "default_zoom")]
    pub default_zoom: u32,

    /// Show grid lines in the editor
    #[serde(default = "default_true")]
    pub show_grid: bool,

    /// Tool selected when an editor opens
    #[serde(default)]
    pub default_tool: Tool,
}

fn default_max_history_size() -> usize {
    DEFAULT_MAX_HISTORY_SIZE
}
fn default_zoom() -> u32 {
    DEFAULT_ZOOM
}
fn default_true() -> bool {
    true
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            max_history_size: DEFAULT_MAX_HISTORY_SIZE,
            default_zoom: DEFAULT_ZOOM,
            show_grid: true,
            default_tool: Tool::default(),
        }
    }
}

impl EditorSettings {
    pub const FILE_NAME: &'static str = "semitile.toml";

    /// # Errors
    ///
    /// Returns `Settings` if the text is not valid settings TOML.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| EngineError::Settings(format!("Failed to parse settings: {e}")))
    }

    /// # Errors
    ///
    /// Returns `Settings` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| EngineError::Settings(format!("Failed to serialize settings: {e}")))
    }

    /// Load settings from `path`.
    ///
    /// A missing or unparsable file yields the defaults; the problem is logged.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(txt) => match Self::from_toml_str(&txt) {
                Ok(settings) => settings,
                Err(err) => {
                    log::warn!("Ignoring settings file {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                log::error!("Error reading settings file {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Write settings to `path`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing the file fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_toml_string()?;
        fs::write(path, text)?;
        Ok(())
    }
}

//! Session state for the tile editor
//!
//! Contains all data needed to restore an editing session, including:
//! - The tile itself (planar encoded)
//! - Undo/redo stack
//! - Active tool, zoom level and grid setting
//! - Selected color and sub-palette

use semitile_engine::{Tile, PLANAR_SIZE};
use serde::{Deserialize, Serialize};

use crate::tools::Tool;

use super::{EditorModeState, TileEditState, TileUndoStack, DEFAULT_ZOOM};

/// Session state for the tile editor
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TileSessionState {
    /// Version for future compatibility
    #[serde(default = "default_version")]
    pub version: u32,

    /// Tile pixels in 4bpp planar format
    pub tile: [u8; PLANAR_SIZE],

    /// The undo/redo stack
    #[serde(default)]
    pub undo_stack: TileUndoStack,

    /// Currently active tool
    #[serde(default)]
    pub selected_tool: Tool,

    /// Zoom level for the editor
    #[serde(default = "default_zoom")]
    pub zoom: u32,

    /// Show grid lines in editor
    #[serde(default = "default_true")]
    pub show_grid: bool,

    /// Color index painted by the tools
    #[serde(default = "default_color")]
    pub selected_color: u8,

    /// Sub-palette used for display
    #[serde(default)]
    pub selected_palette: u8,
}

fn default_version() -> u32 {
    1
}
fn default_zoom() -> u32 {
    DEFAULT_ZOOM
}
fn default_true() -> bool {
    true
}
fn default_color() -> u8 {
    1
}

impl TileEditState {
    /// Snapshot everything needed to resume this session later
    pub fn session_state(&self) -> TileSessionState {
        TileSessionState {
            version: default_version(),
            tile: self.tile.to_planar(),
            undo_stack: self.undo_stack.clone(),
            selected_tool: self.mode.tool(),
            zoom: self.mode.zoom(),
            show_grid: self.mode.is_grid_enabled(),
            selected_color: self.selected_color,
            selected_palette: self.selected_palette,
        }
    }

    /// Resume a session. No gesture is active afterwards and nothing is dirty.
    pub fn from_session(state: TileSessionState) -> Self {
        let mut edit_state = Self::from_tile(Tile::from_planar(&state.tile));
        edit_state.undo_stack = state.undo_stack;
        edit_state.mode = EditorModeState::new(state.selected_tool, state.zoom, state.show_grid);
        edit_state.set_selected_color(state.selected_color);
        edit_state.selected_palette = state.selected_palette.min(15);
        edit_state
    }
}

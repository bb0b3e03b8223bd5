use crate::tools::Tool;

use super::{EditorEvent, EventQueue};

/// Smallest zoom factor
pub const MIN_ZOOM: u32 = 1;

/// Largest zoom factor
pub const MAX_ZOOM: u32 = 32;

/// Zoom factor of a fresh editor
pub const DEFAULT_ZOOM: u32 = 16;

/// Active tool and view options of the tile editor.
///
/// Every setter queues a change event, even when the value did not change.
#[derive(Clone, Debug)]
pub struct EditorModeState {
    tool: Tool,
    zoom: u32,
    grid_enabled: bool,
    events: EventQueue,
}

impl Default for EditorModeState {
    fn default() -> Self {
        Self::new(Tool::default(), DEFAULT_ZOOM, true)
    }
}

impl EditorModeState {
    pub fn new(tool: Tool, zoom: u32, grid_enabled: bool) -> Self {
        Self {
            tool,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            grid_enabled,
            events: EventQueue::new(),
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.events.push(EditorEvent::ToolChanged(tool));
    }

    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    /// Clamped to `MIN_ZOOM..=MAX_ZOOM`
    pub fn set_zoom(&mut self, zoom: u32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.events.push(EditorEvent::ZoomChanged(self.zoom));
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom.saturating_add(1));
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom.saturating_sub(1));
    }

    pub fn is_grid_enabled(&self) -> bool {
        self.grid_enabled
    }

    pub fn set_grid_enabled(&mut self, enabled: bool) {
        self.grid_enabled = enabled;
        self.events.push(EditorEvent::GridChanged(enabled));
    }

    pub fn toggle_grid(&mut self) {
        self.set_grid_enabled(!self.grid_enabled);
    }

    pub fn take_events(&mut self) -> Vec<EditorEvent> {
        self.events.take()
    }
}

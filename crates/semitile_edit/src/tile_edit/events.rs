//! Change notifications for the tile editor
//!
//! Components queue events as they change; the owner drains them with
//! `take_events()` after handling input and forwards them to the UI.

use std::collections::VecDeque;

use crate::tools::Tool;

/// Something observable changed in the editor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorEvent {
    /// Undo/redo availability after a history change
    HistoryChanged { can_undo: bool, can_redo: bool },
    /// Active tool was set
    ToolChanged(Tool),
    /// Zoom was set (already clamped)
    ZoomChanged(u32),
    /// Grid visibility was set
    GridChanged(bool),
    /// Tile pixels may have changed and need repainting
    TileChanged,
}

/// FIFO of pending events, owned by the component that emits them
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<EditorEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: EditorEvent) {
        self.pending.push_back(event);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns all pending events, oldest first
    pub fn take(&mut self) -> Vec<EditorEvent> {
        self.pending.drain(..).collect()
    }
}

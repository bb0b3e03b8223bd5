//! Bounded undo/redo history for the tile editor
//!
//! History is linear: executing a new operation discards everything on the
//! redo side. When the undo side grows past `max_history_size` the oldest
//! entries are dropped and those edits can no longer be undone.

use std::collections::VecDeque;

use semitile_engine::Tile;
use serde::{Deserialize, Serialize};

use super::{EditorEvent, EventQueue, TileUndoOp};

/// Number of undo steps kept unless configured otherwise
pub const DEFAULT_MAX_HISTORY_SIZE: usize = 100;

/// Trait for types that support undo/redo operations
pub trait TileUndoState {
    /// Get description of the next undo operation
    fn undo_description(&self) -> Option<String>;

    /// Check if undo is available
    fn can_undo(&self) -> bool;

    /// Perform undo operation, false if there was nothing to undo
    fn undo(&mut self) -> bool;

    /// Get description of the next redo operation
    fn redo_description(&self) -> Option<String>;

    /// Check if redo is available
    fn can_redo(&self) -> bool;

    /// Perform redo operation, false if there was nothing to redo
    fn redo(&mut self) -> bool;
}

fn default_max_history_size() -> usize {
    DEFAULT_MAX_HISTORY_SIZE
}

/// Undo stack for the tile editor
///
/// Deserialized stacks go through the same capacity clamp and trim as
/// [`TileUndoStack::set_max_history_size`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "StoredUndoStack")]
pub struct TileUndoStack {
    /// Applied operations, oldest at the front
    undo_stack: VecDeque<TileUndoOp>,
    /// Reverted operations, most recently undone last
    redo_stack: Vec<TileUndoOp>,
    max_history_size: usize,
    #[serde(skip)]
    events: EventQueue,
}

/// On-disk shape of [`TileUndoStack`]
#[derive(Deserialize)]
struct StoredUndoStack {
    #[serde(default)]
    undo_stack: VecDeque<TileUndoOp>,
    #[serde(default)]
    redo_stack: Vec<TileUndoOp>,
    #[serde(default = "default_max_history_size")]
    max_history_size: usize,
}

impl From<StoredUndoStack> for TileUndoStack {
    fn from(stored: StoredUndoStack) -> Self {
        let mut stack = Self::with_max_history_size(stored.max_history_size);
        stack.undo_stack = stored.undo_stack;
        stack.redo_stack = stored.redo_stack;
        stack.trim();
        stack
    }
}

impl Default for TileUndoStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TileUndoStack {
    /// Create a new empty undo stack with the default capacity
    pub fn new() -> Self {
        Self::with_max_history_size(DEFAULT_MAX_HISTORY_SIZE)
    }

    /// Create an empty undo stack keeping at most `max_history_size` (at least 1) steps
    pub fn with_max_history_size(max_history_size: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_history_size: max_history_size.max(1),
            events: EventQueue::new(),
        }
    }

    /// Apply `op` to the tile and record it.
    ///
    /// Clears the redo side and evicts the oldest entries beyond capacity.
    pub fn execute_command(&mut self, tile: &mut Tile, op: TileUndoOp) {
        log::debug!("execute: {}", op.get_description());
        op.execute(tile);
        self.undo_stack.push_back(op);
        self.redo_stack.clear();
        self.trim();
        self.notify();
    }

    /// Revert the most recent operation. Returns false if there was nothing to undo.
    pub fn undo(&mut self, tile: &mut Tile) -> bool {
        let Some(op) = self.undo_stack.pop_back() else {
            return false;
        };
        log::debug!("undo: {}", op.get_description());
        op.undo(tile);
        self.redo_stack.push(op);
        self.notify();
        true
    }

    /// Re-apply the most recently undone operation. Returns false if there was nothing to redo.
    pub fn redo(&mut self, tile: &mut Tile) -> bool {
        let Some(op) = self.redo_stack.pop() else {
            return false;
        };
        log::debug!("redo: {}", op.get_description());
        op.execute(tile);
        self.undo_stack.push_back(op);
        self.notify();
        true
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear both stacks
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.notify();
    }

    pub fn max_history_size(&self) -> usize {
        self.max_history_size
    }

    /// Change the capacity (clamped to at least 1), dropping the oldest undo steps if needed
    pub fn set_max_history_size(&mut self, max_history_size: usize) {
        self.max_history_size = max_history_size.max(1);
        if self.trim() > 0 {
            self.notify();
        }
    }

    /// Get the number of undo operations
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of redo operations
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Get description of next undo operation
    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.back().map(TileUndoOp::get_description)
    }

    /// Get description of next redo operation
    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(TileUndoOp::get_description)
    }

    /// Applied operations, oldest first
    pub fn undo_operations(&self) -> impl Iterator<Item = &TileUndoOp> {
        self.undo_stack.iter()
    }

    /// Drain pending `HistoryChanged` notifications
    pub fn take_events(&mut self) -> Vec<EditorEvent> {
        self.events.take()
    }

    fn trim(&mut self) -> usize {
        let excess = self.undo_stack.len().saturating_sub(self.max_history_size);
        if excess > 0 {
            log::warn!("undo history full, dropping {excess} oldest step(s)");
            self.undo_stack.drain(..excess);
        }
        excess
    }

    fn notify(&mut self) {
        self.events.push(EditorEvent::HistoryChanged {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        });
    }
}

//! Pointer gesture handling for the tile editor
//!
//! A gesture is press → moves → release. The active tool decides which
//! operation is built at each phase:
//!
//! | Tool      | Press              | Move               | Release          |
//! |-----------|--------------------|--------------------|------------------|
//! | Pencil    | set pixel          | set pixel (each)   | -                |
//! | Fill      | flood fill         | -                  | -                |
//! | Line      | remember start     | -                  | line start → end |
//! | Rectangle | remember start     | -                  | rect start → end |
//!
//! Pencil and Fill ignore points outside the tile. Every operation goes
//! through [`TileUndoStack::execute_command`] so it is applied and recorded together.

use semitile_engine::{Position, Tile};

use crate::tools::Tool;

use super::{TileUndoOp, TileUndoStack};

/// Where the session is in a gesture
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Idle,
    Active { tool: Tool, start: Position, color: u8 },
}

/// Turns pointer gestures into undoable tile operations
#[derive(Clone, Debug, Default)]
pub struct DrawingSession {
    phase: SessionPhase,
    last_pos: Position,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, SessionPhase::Active { .. })
    }

    /// Start a gesture. A gesture that is still running is finished first at its last position.
    ///
    /// Returns true if an operation was applied to the tile.
    pub fn begin(&mut self, tool: Tool, pos: Position, color: u8, tile: &mut Tile, history: &mut TileUndoStack) -> bool {
        let mut applied = false;
        if self.is_active() {
            log::trace!("begin while active, finishing previous gesture at {}", self.last_pos);
            applied = self.end(self.last_pos, tile, history);
        }

        log::trace!("gesture start: {tool} at {pos}");
        self.phase = SessionPhase::Active { tool, start: pos, color };
        self.last_pos = pos;

        let op = match tool {
            Tool::Pencil if Tile::is_in_bounds(pos.x, pos.y) => Some(TileUndoOp::set_pixel(tile, pos.x, pos.y, color)),
            Tool::Fill if Tile::is_in_bounds(pos.x, pos.y) => Some(TileUndoOp::fill(tile, pos.x, pos.y, color)),
            _ => None,
        };
        submit(op, tile, history) || applied
    }

    /// Pointer moved while pressed. Only the pencil reacts.
    pub fn drag(&mut self, pos: Position, tile: &mut Tile, history: &mut TileUndoStack) -> bool {
        let SessionPhase::Active { tool, color, .. } = self.phase else {
            return false;
        };
        self.last_pos = pos;

        let op = (tool.needs_drag() && Tile::is_in_bounds(pos.x, pos.y)).then(|| TileUndoOp::set_pixel(tile, pos.x, pos.y, color));
        submit(op, tile, history)
    }

    /// Pointer released. Shape tools emit their operation from the press position to `pos`.
    pub fn end(&mut self, pos: Position, tile: &mut Tile, history: &mut TileUndoStack) -> bool {
        let SessionPhase::Active { tool, start, color } = self.phase else {
            return false;
        };
        log::trace!("gesture end: {tool} at {pos}");
        self.phase = SessionPhase::Idle;
        self.last_pos = pos;

        if !tool.is_shape_tool() {
            return false;
        }
        let op = if tool == Tool::Line {
            TileUndoOp::line(tile, start.x, start.y, pos.x, pos.y, color)
        } else {
            TileUndoOp::rectangle(tile, start.x, start.y, pos.x, pos.y, color)
        };
        history.execute_command(tile, op);
        true
    }

    /// Pointer left the tile: same as releasing at the last known position
    pub fn leave(&mut self, tile: &mut Tile, history: &mut TileUndoStack) -> bool {
        self.end(self.last_pos, tile, history)
    }
}

fn submit(op: Option<TileUndoOp>, tile: &mut Tile, history: &mut TileUndoStack) -> bool {
    match op {
        Some(op) => {
            history.execute_command(tile, op);
            true
        }
        None => false,
    }
}

//! Tile editing module
//!
//! Provides the model layer for editing a single 8×8 tile:
//! - `TileEditState` - the main state container
//! - `TileUndoOp` - reversible pixel operations (set pixel, fill, line, rectangle, clear)
//! - `TileUndoStack` - bounded linear undo/redo history
//! - `EditorModeState` - active tool, zoom and grid visibility
//! - `DrawingSession` - turns pointer gestures into operations
//!
//! This module keeps model logic separate from UI concerns. The UI polls
//! change notifications via `take_events()`.

mod edit_state;
mod events;
mod mode_state;
mod session;
pub mod session_state;
mod undo_operation;
mod undo_stack;

pub use edit_state::TileEditState;
pub use events::{EditorEvent, EventQueue};
pub use mode_state::{EditorModeState, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
pub use session::{DrawingSession, SessionPhase};
pub use session_state::TileSessionState;
pub use undo_operation::{PixelChange, TileOperationType, TileUndoOp};
pub use undo_stack::{TileUndoStack, TileUndoState, DEFAULT_MAX_HISTORY_SIZE};

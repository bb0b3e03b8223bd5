//! Tile Edit State
//!
//! The state container for editing one tile. It owns the tile, the undo
//! history, the mode state and the gesture session, and is the only place
//! where those meet.
//!
//! All pixel modifications go through the undo system:
//! - Pointer gestures are handled by [`DrawingSession`]
//! - Menu/keyboard actions (`clear_tile`, `draw_line`, ...) build one operation each
//! - Undo/redo is exposed through [`TileUndoState`]
//!
//! The UI reads from this state, calls methods to modify it and then drains
//! [`TileEditState::take_events`] to find out what to repaint.

use semitile_engine::{Color, Palette, Position, Tile, MAX_COLOR};

use crate::settings::EditorSettings;

use super::{DrawingSession, EditorEvent, EditorModeState, TileUndoOp, TileUndoStack, TileUndoState};

/// Number of sub-palettes a tile can be displayed with
const SUB_PALETTES: u8 = 16;

pub struct TileEditState {
    pub(crate) tile: Tile,
    pub(crate) undo_stack: TileUndoStack,
    pub(crate) mode: EditorModeState,
    pub(crate) session: DrawingSession,

    /// Colors used to display the tile
    pub(crate) palette: Palette,
    /// Color index painted by the tools (0-15)
    pub(crate) selected_color: u8,
    /// Sub-palette the tile is displayed with (0-15)
    pub(crate) selected_palette: u8,

    /// Whether the tile has been modified since last save
    pub(crate) is_dirty: bool,
    /// Tile pixels changed since the last `take_events`
    pub(crate) tile_changed: bool,
}

impl Default for TileEditState {
    fn default() -> Self {
        Self::new()
    }
}

impl TileEditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    /// Create an editor for an empty tile with default settings
    pub fn new() -> Self {
        Self::with_settings(Tile::new(), &EditorSettings::default())
    }

    /// Create an editor for an existing tile with default settings
    pub fn from_tile(tile: Tile) -> Self {
        Self::with_settings(tile, &EditorSettings::default())
    }

    pub fn with_settings(tile: Tile, settings: &EditorSettings) -> Self {
        Self {
            tile,
            undo_stack: TileUndoStack::with_max_history_size(settings.max_history_size),
            mode: EditorModeState::new(settings.default_tool, settings.default_zoom, settings.show_grid),
            session: DrawingSession::new(),
            palette: Palette::new(),
            selected_color: 1,
            selected_palette: 0,
            is_dirty: false,
            tile_changed: false,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    pub fn tile(&self) -> &Tile {
        &self.tile
    }

    pub fn mode(&self) -> &EditorModeState {
        &self.mode
    }

    /// Mode setters queue their own events, drained by `take_events`
    pub fn mode_mut(&mut self) -> &mut EditorModeState {
        &mut self.mode
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn undo_stack(&self) -> &TileUndoStack {
        &self.undo_stack
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn selected_color(&self) -> u8 {
        self.selected_color
    }

    pub fn selected_palette(&self) -> u8 {
        self.selected_palette
    }

    /// Check if the tile is dirty (modified)
    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Display color of the pixel at (x, y) in the selected sub-palette
    pub fn display_color(&self, x: i32, y: i32) -> Color {
        self.palette.get_color(self.selected_palette, self.tile.get_pixel(x, y))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Basic Setters (non-undoable)
    // ═══════════════════════════════════════════════════════════════════════

    /// Clamped to 0-15
    pub fn set_selected_color(&mut self, color: u8) {
        self.selected_color = color.min(MAX_COLOR);
    }

    /// Clamped to 0-15
    pub fn set_selected_palette(&mut self, palette_idx: u8) {
        self.selected_palette = palette_idx.min(SUB_PALETTES - 1);
        self.tile_changed = true;
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        self.tile_changed = true;
    }

    pub fn set_max_history_size(&mut self, max_history_size: usize) {
        self.undo_stack.set_max_history_size(max_history_size);
    }

    /// Forget all undo/redo steps. The tile is left as it is.
    pub fn clear_history(&mut self) {
        self.undo_stack.clear();
    }

    /// Mark as clean (after save)
    pub fn mark_saved(&mut self) {
        self.is_dirty = false;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Pointer Gestures
    // ═══════════════════════════════════════════════════════════════════════

    pub fn pointer_down(&mut self, pos: Position) {
        let tool = self.mode.tool();
        let applied = self.session.begin(tool, pos, self.selected_color, &mut self.tile, &mut self.undo_stack);
        self.after_apply(applied);
    }

    pub fn pointer_move(&mut self, pos: Position) {
        let applied = self.session.drag(pos, &mut self.tile, &mut self.undo_stack);
        self.after_apply(applied);
    }

    pub fn pointer_up(&mut self, pos: Position) {
        let applied = self.session.end(pos, &mut self.tile, &mut self.undo_stack);
        self.after_apply(applied);
    }

    /// Pointer left the tile, ends a running gesture
    pub fn pointer_leave(&mut self) {
        let applied = self.session.leave(&mut self.tile, &mut self.undo_stack);
        self.after_apply(applied);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Direct Operations
    // ═══════════════════════════════════════════════════════════════════════

    pub fn set_pixel(&mut self, x: i32, y: i32, color: u8) {
        let op = TileUndoOp::set_pixel(&self.tile, x, y, color);
        self.push_undo_action(op);
    }

    pub fn flood_fill(&mut self, x: i32, y: i32, color: u8) {
        let op = TileUndoOp::fill(&self.tile, x, y, color);
        self.push_undo_action(op);
    }

    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u8) {
        let op = TileUndoOp::line(&self.tile, x0, y0, x1, y1, color);
        self.push_undo_action(op);
    }

    pub fn draw_rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u8) {
        let op = TileUndoOp::rectangle(&self.tile, x0, y0, x1, y1, color);
        self.push_undo_action(op);
    }

    /// Reset every pixel to color 0, undoable
    pub fn clear_tile(&mut self) {
        let op = TileUndoOp::clear(&self.tile);
        self.push_undo_action(op);
    }

    /// Push an undo operation and execute it
    pub(crate) fn push_undo_action(&mut self, op: TileUndoOp) {
        self.undo_stack.execute_command(&mut self.tile, op);
        self.after_apply(true);
    }

    fn after_apply(&mut self, applied: bool) {
        if applied {
            self.is_dirty = true;
            self.tile_changed = true;
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Events
    // ═══════════════════════════════════════════════════════════════════════

    /// Drain pending notifications: mode changes, then history changes, then `TileChanged`
    pub fn take_events(&mut self) -> Vec<EditorEvent> {
        let mut events = self.mode.take_events();
        events.extend(self.undo_stack.take_events());
        if std::mem::take(&mut self.tile_changed) {
            events.push(EditorEvent::TileChanged);
        }
        events
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TileUndoState Trait Implementation
// ═══════════════════════════════════════════════════════════════════════════

impl TileUndoState for TileEditState {
    fn undo_description(&self) -> Option<String> {
        self.undo_stack.undo_description()
    }

    fn can_undo(&self) -> bool {
        self.undo_stack.can_undo()
    }

    fn undo(&mut self) -> bool {
        let undone = self.undo_stack.undo(&mut self.tile);
        self.after_apply(undone);
        undone
    }

    fn redo_description(&self) -> Option<String> {
        self.undo_stack.redo_description()
    }

    fn can_redo(&self) -> bool {
        self.undo_stack.can_redo()
    }

    fn redo(&mut self) -> bool {
        let redone = self.undo_stack.redo(&mut self.tile);
        self.after_apply(redone);
        redone
    }
}

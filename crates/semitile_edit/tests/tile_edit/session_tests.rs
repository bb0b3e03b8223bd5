//! Tests for pointer gesture handling

use pretty_assertions::assert_eq;
use semitile_edit::tile_edit::{DrawingSession, SessionPhase, TileUndoStack};
use semitile_edit::tools::Tool;
use semitile_edit::{Position, Tile};

use crate::helpers::pixels_with_color;

struct Fixture {
    tile: Tile,
    history: TileUndoStack,
    session: DrawingSession,
}

impl Fixture {
    fn new() -> Self {
        Self {
            tile: Tile::new(),
            history: TileUndoStack::new(),
            session: DrawingSession::new(),
        }
    }

    fn down(&mut self, tool: Tool, x: i32, y: i32, color: u8) -> bool {
        self.session.begin(tool, Position::new(x, y), color, &mut self.tile, &mut self.history)
    }

    fn drag(&mut self, x: i32, y: i32) -> bool {
        self.session.drag(Position::new(x, y), &mut self.tile, &mut self.history)
    }

    fn up(&mut self, x: i32, y: i32) -> bool {
        self.session.end(Position::new(x, y), &mut self.tile, &mut self.history)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Pencil
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_pencil_paints_each_sample() {
    let mut f = Fixture::new();
    assert!(f.down(Tool::Pencil, 0, 0, 3));
    assert!(f.drag(1, 0));
    assert!(f.drag(2, 0));
    assert!(!f.up(2, 0));

    assert_eq!(pixels_with_color(&f.tile, 3), vec![(0, 0), (1, 0), (2, 0)]);
    assert_eq!(f.history.undo_len(), 3);
    assert!(!f.session.is_active());
}

#[test]
fn test_pencil_ignores_outside_points() {
    let mut f = Fixture::new();
    assert!(!f.down(Tool::Pencil, -1, 0, 3));
    assert!(f.session.is_active());
    assert!(!f.drag(8, 3));
    assert!(f.drag(7, 3));
    f.up(7, 3);

    assert_eq!(f.history.undo_len(), 1);
    assert_eq!(f.tile.count_non_zero(), 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// Fill
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_fill_on_press_only() {
    let mut f = Fixture::new();
    assert!(f.down(Tool::Fill, 4, 4, 9));
    assert!(!f.drag(5, 5));
    assert!(!f.up(5, 5));

    assert_eq!(pixels_with_color(&f.tile, 9).len(), 64);
    assert_eq!(f.history.undo_len(), 1);
}

#[test]
fn test_fill_outside_does_nothing() {
    let mut f = Fixture::new();
    assert!(!f.down(Tool::Fill, 8, 8, 9));
    assert!(!f.up(8, 8));
    assert_eq!(f.history.undo_len(), 0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Shape tools
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_line_on_release() {
    let mut f = Fixture::new();
    assert!(!f.down(Tool::Line, 0, 0, 1));
    assert!(!f.drag(2, 2));
    assert_eq!(f.tile.count_non_zero(), 0);
    assert_eq!(
        f.session.phase(),
        SessionPhase::Active {
            tool: Tool::Line,
            start: Position::new(0, 0),
            color: 1
        }
    );

    assert!(f.up(3, 3));
    assert_eq!(pixels_with_color(&f.tile, 1), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    assert_eq!(f.history.undo_len(), 1);
    assert_eq!(f.session.phase(), SessionPhase::Idle);
}

#[test]
fn test_rectangle_on_release() {
    let mut f = Fixture::new();
    f.down(Tool::Rectangle, 6, 6, 2);
    assert!(f.up(1, 1));
    assert_eq!(pixels_with_color(&f.tile, 2).len(), 36);
}

#[test]
fn test_shape_released_outside_is_clipped() {
    let mut f = Fixture::new();
    f.down(Tool::Rectangle, 4, 4, 5);
    assert!(f.up(50, 50));
    assert_eq!(pixels_with_color(&f.tile, 5).len(), 16);
}

#[test]
fn test_leave_ends_gesture_at_last_position() {
    let mut f = Fixture::new();
    f.down(Tool::Line, 0, 0, 7);
    f.drag(0, 5);
    assert!(f.session.leave(&mut f.tile, &mut f.history));

    assert!(!f.session.is_active());
    assert_eq!(pixels_with_color(&f.tile, 7).len(), 6);
    assert_eq!(f.tile.get_pixel(0, 5), 7);
}

#[test]
fn test_begin_while_active_finishes_previous() {
    let mut f = Fixture::new();
    f.down(Tool::Line, 0, 0, 1);
    f.drag(7, 0);

    // the pending line is committed before the fill starts
    assert!(f.down(Tool::Fill, 0, 7, 2));
    assert_eq!(f.history.undo_len(), 2);
    assert_eq!(pixels_with_color(&f.tile, 1).len(), 8);
    assert_eq!(pixels_with_color(&f.tile, 2).len(), 56);
}

#[test]
fn test_gesture_is_undoable() {
    let mut f = Fixture::new();
    f.down(Tool::Rectangle, 0, 0, 3);
    f.up(7, 7);
    assert!(f.history.undo(&mut f.tile));
    assert_eq!(f.tile, Tile::new());
}

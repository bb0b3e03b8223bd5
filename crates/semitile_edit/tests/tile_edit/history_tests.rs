//! Tests for the bounded undo/redo history

use pretty_assertions::assert_eq;
use semitile_edit::tile_edit::{EditorEvent, TileUndoOp, TileUndoStack, DEFAULT_MAX_HISTORY_SIZE};
use semitile_edit::Tile;

use crate::helpers::{create_pattern_tile, init_logging};

fn execute(stack: &mut TileUndoStack, tile: &mut Tile, op: fn(&Tile) -> TileUndoOp) {
    let op = op(tile);
    stack.execute_command(tile, op);
}

#[test]
fn test_new_stack_is_empty() {
    let stack = TileUndoStack::new();
    assert!(!stack.can_undo());
    assert!(!stack.can_redo());
    assert_eq!(stack.max_history_size(), DEFAULT_MAX_HISTORY_SIZE);
    assert_eq!(stack.undo_description(), None);
}

#[test]
fn test_undo_redo_cycle() {
    let mut tile = Tile::new();
    let mut stack = TileUndoStack::new();
    execute(&mut stack, &mut tile, |t| TileUndoOp::set_pixel(t, 1, 1, 4));
    execute(&mut stack, &mut tile, |t| TileUndoOp::line(t, 0, 7, 7, 7, 2));
    let drawn = tile.clone();

    assert!(stack.undo(&mut tile));
    assert!(stack.undo(&mut tile));
    assert_eq!(tile, Tile::new());
    assert!(!stack.can_undo());
    assert_eq!(stack.redo_len(), 2);

    assert!(stack.redo(&mut tile));
    assert_eq!(tile.get_pixel(1, 1), 4);
    assert_eq!(tile.get_pixel(0, 7), 0);
    assert!(stack.redo(&mut tile));
    assert_eq!(tile, drawn);
    assert!(!stack.can_redo());
}

#[test]
fn test_new_command_discards_redo() {
    let mut tile = Tile::new();
    let mut stack = TileUndoStack::new();
    execute(&mut stack, &mut tile, |t| TileUndoOp::set_pixel(t, 0, 0, 1));
    execute(&mut stack, &mut tile, |t| TileUndoOp::set_pixel(t, 1, 0, 2));
    stack.undo(&mut tile);
    assert!(stack.can_redo());

    execute(&mut stack, &mut tile, |t| TileUndoOp::set_pixel(t, 2, 0, 3));
    assert!(!stack.can_redo());
    assert!(!stack.redo(&mut tile));
    assert_eq!(tile.get_pixel(1, 0), 0);
    assert_eq!(stack.undo_len(), 2);
}

#[test]
fn test_capacity_evicts_oldest() {
    init_logging();
    let mut tile = Tile::new();
    let mut stack = TileUndoStack::new();

    // 105 pixels, written row by row
    for i in 0..105 {
        let op = TileUndoOp::set_pixel(&tile, i % 8, (i / 8) % 8, (i % 15 + 1) as u8);
        stack.execute_command(&mut tile, op);
    }
    assert_eq!(stack.undo_len(), 100);

    let mut undone = 0;
    while stack.undo(&mut tile) {
        undone += 1;
    }
    assert_eq!(undone, 100);

    // only the first 5 pixels are left, everything else was reverted
    let mut expected = Tile::new();
    for i in 0..5 {
        expected.set_pixel(i % 8, 0, (i % 15 + 1) as u8);
    }
    assert_eq!(tile, expected);
}

#[test]
fn test_small_capacity() {
    let mut tile = Tile::new();
    let mut stack = TileUndoStack::with_max_history_size(1);
    execute(&mut stack, &mut tile, |t| TileUndoOp::set_pixel(t, 0, 0, 1));
    execute(&mut stack, &mut tile, |t| TileUndoOp::set_pixel(t, 1, 0, 1));

    assert!(stack.undo(&mut tile));
    assert!(!stack.undo(&mut tile));
    assert_eq!(tile.get_pixel(0, 0), 1);
    assert_eq!(tile.get_pixel(1, 0), 0);
}

#[test]
fn test_clear_keeps_tile() {
    let mut tile = create_pattern_tile();
    let mut stack = TileUndoStack::new();
    execute(&mut stack, &mut tile, TileUndoOp::clear);
    stack.clear();

    assert!(!stack.can_undo());
    assert!(!stack.can_redo());
    assert_eq!(tile.count_non_zero(), 0);
}

#[test]
fn test_history_events() {
    let mut tile = Tile::new();
    let mut stack = TileUndoStack::new();
    execute(&mut stack, &mut tile, |t| TileUndoOp::fill(t, 0, 0, 5));
    stack.undo(&mut tile);
    stack.redo(&mut tile);
    stack.clear();

    assert_eq!(
        stack.take_events(),
        vec![
            EditorEvent::HistoryChanged { can_undo: true, can_redo: false },
            EditorEvent::HistoryChanged { can_undo: false, can_redo: true },
            EditorEvent::HistoryChanged { can_undo: true, can_redo: false },
            EditorEvent::HistoryChanged { can_undo: false, can_redo: false },
        ]
    );
    assert!(stack.take_events().is_empty());
}

#[test]
fn test_descriptions_follow_stack() {
    let mut tile = Tile::new();
    let mut stack = TileUndoStack::new();
    execute(&mut stack, &mut tile, |t| TileUndoOp::set_pixel(t, 4, 0, 1));
    execute(&mut stack, &mut tile, TileUndoOp::clear);

    assert_eq!(stack.undo_description().as_deref(), Some("Clear tile"));
    stack.undo(&mut tile);
    assert_eq!(stack.undo_description().as_deref(), Some("Set pixel (4, 0) to 1"));
    assert_eq!(stack.redo_description().as_deref(), Some("Clear tile"));

    let descriptions: Vec<String> = stack.undo_operations().map(TileUndoOp::get_description).collect();
    assert_eq!(descriptions, vec!["Set pixel (4, 0) to 1".to_string()]);
}

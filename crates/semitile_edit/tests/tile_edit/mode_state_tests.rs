//! Tests for tool, zoom and grid state

use pretty_assertions::assert_eq;
use semitile_edit::tile_edit::{EditorEvent, EditorModeState, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use semitile_edit::tools::Tool;

#[test]
fn test_defaults() {
    let mode = EditorModeState::default();
    assert_eq!(mode.tool(), Tool::Pencil);
    assert_eq!(mode.zoom(), DEFAULT_ZOOM);
    assert!(mode.is_grid_enabled());
}

#[test]
fn test_zoom_is_clamped() {
    let mut mode = EditorModeState::default();
    mode.set_zoom(0);
    assert_eq!(mode.zoom(), MIN_ZOOM);
    mode.set_zoom(1000);
    assert_eq!(mode.zoom(), MAX_ZOOM);

    mode.zoom_in();
    assert_eq!(mode.zoom(), MAX_ZOOM);

    mode.set_zoom(MIN_ZOOM);
    mode.zoom_out();
    assert_eq!(mode.zoom(), MIN_ZOOM);

    assert_eq!(EditorModeState::new(Tool::Fill, 99, false).zoom(), MAX_ZOOM);
}

#[test]
fn test_zoom_steps() {
    let mut mode = EditorModeState::new(Tool::Pencil, 4, true);
    mode.zoom_in();
    mode.zoom_in();
    mode.zoom_out();
    assert_eq!(mode.zoom(), 5);
}

#[test]
fn test_every_setter_emits() {
    let mut mode = EditorModeState::default();
    mode.set_tool(Tool::Line);
    mode.set_tool(Tool::Line);
    mode.set_zoom(40);
    mode.toggle_grid();
    mode.set_grid_enabled(false);

    assert_eq!(
        mode.take_events(),
        vec![
            EditorEvent::ToolChanged(Tool::Line),
            EditorEvent::ToolChanged(Tool::Line),
            EditorEvent::ZoomChanged(MAX_ZOOM),
            EditorEvent::GridChanged(false),
            EditorEvent::GridChanged(false),
        ]
    );
    assert!(mode.take_events().is_empty());
}

#[test]
fn test_constructor_emits_nothing() {
    let mut mode = EditorModeState::new(Tool::Rectangle, 8, false);
    assert!(mode.take_events().is_empty());
}

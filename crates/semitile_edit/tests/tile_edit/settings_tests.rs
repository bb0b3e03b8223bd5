//! Tests for loading and storing editor settings

use pretty_assertions::assert_eq;
use semitile_edit::settings::EditorSettings;
use semitile_edit::tools::Tool;

use crate::helpers::init_logging;

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(EditorSettings::FILE_NAME);
    let settings = EditorSettings {
        max_history_size: 42,
        default_zoom: 12,
        show_grid: false,
        default_tool: Tool::Line,
    };

    settings.save(&path).unwrap();
    assert_eq!(EditorSettings::load(&path), settings);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.toml");
    assert_eq!(EditorSettings::load(&path), EditorSettings::default());
}

#[test]
fn test_broken_file_gives_defaults() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(EditorSettings::FILE_NAME);
    std::fs::write(&path, "max_history_size = \"lots\"").unwrap();
    assert_eq!(EditorSettings::load(&path), EditorSettings::default());
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join(EditorSettings::FILE_NAME);
    assert!(EditorSettings::default().save(&path).is_err());
}

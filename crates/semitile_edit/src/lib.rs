//! Editing engine for 8×8 4bpp tiles.
//!
//! Drawing gestures are turned into reversible commands which are applied
//! to a [`Tile`] through a bounded, linear undo/redo history.

pub mod brushes;
pub mod settings;
pub mod tile_edit;
pub mod tools;

// Re-export the data model so callers only need one dependency
pub use semitile_engine::{
    Color, EngineError, Palette, Position, Result, Tile, Tilemap, TilemapEntry, MAX_COLOR, PLANAR_SIZE, TILE_SIZE,
};

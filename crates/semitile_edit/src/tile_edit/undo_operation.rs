//! Undo operations for tile editing
//!
//! Every operation captures the pixels it is going to change when it is
//! constructed, before anything is written. `execute` and `undo` only replay
//! that fixed delta, so they can be called any number of times in alternation.

use semitile_engine::{Position, Tile, MAX_COLOR, PLANAR_SIZE, TILE_SIZE};
use serde::{Deserialize, Serialize};

use crate::brushes;

/// Type of operation for grouping related undos
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileOperationType {
    /// Pencil, line and rectangle strokes
    Draw,
    /// Flood fill
    Fill,
    /// Whole tile reset
    Clear,
}

/// A pixel an operation overwrites, with the color it had before
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelChange {
    pub x: i32,
    pub y: i32,
    pub old_color: u8,
}

/// Serializable undo operation enum for tile editing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileUndoOp {
    /// Set a single pixel
    SetPixel { x: i32, y: i32, old_color: u8, new_color: u8 },

    /// 4-connected flood fill from a seed pixel
    Fill {
        x: i32,
        y: i32,
        color: u8,
        changes: Vec<PixelChange>,
    },

    /// Bresenham line between two points
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: u8,
        changes: Vec<PixelChange>,
    },

    /// Filled axis-aligned rectangle between two corners
    Rectangle {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: u8,
        changes: Vec<PixelChange>,
    },

    /// Reset every pixel to 0. Keeps the full planar image of the tile.
    Clear { old_data: [u8; PLANAR_SIZE] },
}

/// Records the current color of every in-bounds point
fn capture(tile: &Tile, points: impl IntoIterator<Item = (i32, i32)>) -> Vec<PixelChange> {
    points
        .into_iter()
        .filter(|&(x, y)| Tile::is_in_bounds(x, y))
        .map(|(x, y)| PixelChange {
            x,
            y,
            old_color: tile.get_pixel(x, y),
        })
        .collect()
}

impl TileUndoOp {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors (capture before mutate)
    // ═══════════════════════════════════════════════════════════════════════

    // Colors above 15 are clamped by every constructor.

    pub fn set_pixel(tile: &Tile, x: i32, y: i32, new_color: u8) -> Self {
        TileUndoOp::SetPixel {
            x,
            y,
            old_color: tile.get_pixel(x, y),
            new_color: new_color.min(MAX_COLOR),
        }
    }

    /// Flood fill. Filling a region with the color it already has captures nothing.
    pub fn fill(tile: &Tile, x: i32, y: i32, color: u8) -> Self {
        let color = color.min(MAX_COLOR);
        let changes = if tile.get_pixel(x, y) == color {
            Vec::new()
        } else {
            let points = brushes::flood_fill_points(x, y, TILE_SIZE, TILE_SIZE, |px, py| tile.get_pixel(px, py));
            capture(tile, points)
        };
        TileUndoOp::Fill { x, y, color, changes }
    }

    /// Line between two points. Only the part inside the tile is walked.
    pub fn line(tile: &Tile, x0: i32, y0: i32, x1: i32, y1: i32, color: u8) -> Self {
        let color = color.min(MAX_COLOR);
        let changes = match brushes::clip_line(x0, y0, x1, y1, TILE_SIZE, TILE_SIZE) {
            Some((cx0, cy0, cx1, cy1)) => capture(tile, brushes::bresenham_line(cx0, cy0, cx1, cy1)),
            None => Vec::new(),
        };
        TileUndoOp::Line {
            x0,
            y0,
            x1,
            y1,
            color,
            changes,
        }
    }

    pub fn rectangle(tile: &Tile, x0: i32, y0: i32, x1: i32, y1: i32, color: u8) -> Self {
        let color = color.min(MAX_COLOR);
        // clip before enumerating so huge pointer coordinates stay cheap
        let (a, b) = (Position::new(x0, y0), Position::new(x1, y1));
        let min = a.min(b).max(Position::new(0, 0));
        let max = a.max(b).min(Position::new(TILE_SIZE - 1, TILE_SIZE - 1));
        let changes = if min.x > max.x || min.y > max.y {
            Vec::new()
        } else {
            capture(tile, brushes::rectangle_points(min.x, min.y, max.x, max.y))
        };
        TileUndoOp::Rectangle {
            x0,
            y0,
            x1,
            y1,
            color,
            changes,
        }
    }

    pub fn clear(tile: &Tile) -> Self {
        TileUndoOp::Clear { old_data: tile.to_planar() }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Apply / revert
    // ═══════════════════════════════════════════════════════════════════════

    /// Apply the operation (also used for redo)
    pub fn execute(&self, tile: &mut Tile) {
        match self {
            TileUndoOp::SetPixel { x, y, new_color, .. } => tile.set_pixel(*x, *y, *new_color),
            TileUndoOp::Fill { color, changes, .. } | TileUndoOp::Line { color, changes, .. } | TileUndoOp::Rectangle { color, changes, .. } => {
                for change in changes {
                    tile.set_pixel(change.x, change.y, *color);
                }
            }
            TileUndoOp::Clear { .. } => tile.clear(),
        }
    }

    /// Restore every captured pixel to its color before `execute`
    pub fn undo(&self, tile: &mut Tile) {
        match self {
            TileUndoOp::SetPixel { x, y, old_color, .. } => tile.set_pixel(*x, *y, *old_color),
            TileUndoOp::Fill { changes, .. } | TileUndoOp::Line { changes, .. } | TileUndoOp::Rectangle { changes, .. } => {
                for change in changes.iter().rev() {
                    tile.set_pixel(change.x, change.y, change.old_color);
                }
            }
            TileUndoOp::Clear { old_data } => *tile = Tile::from_planar(old_data),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Metadata
    // ═══════════════════════════════════════════════════════════════════════

    /// Get a description of this operation for display
    pub fn get_description(&self) -> String {
        match self {
            TileUndoOp::SetPixel { x, y, new_color, .. } => format!("Set pixel ({x}, {y}) to {new_color}"),
            TileUndoOp::Fill { x, y, color, .. } => format!("Fill from ({x}, {y}) with {color}"),
            TileUndoOp::Line { x0, y0, x1, y1, color, .. } => format!("Line ({x0}, {y0}) to ({x1}, {y1}) with {color}"),
            TileUndoOp::Rectangle { x0, y0, x1, y1, color, .. } => format!("Rectangle ({x0}, {y0}) to ({x1}, {y1}) with {color}"),
            TileUndoOp::Clear { .. } => "Clear tile".to_string(),
        }
    }

    /// Get the operation type for grouping
    pub fn get_operation_type(&self) -> TileOperationType {
        match self {
            TileUndoOp::SetPixel { .. } | TileUndoOp::Line { .. } | TileUndoOp::Rectangle { .. } => TileOperationType::Draw,
            TileUndoOp::Fill { .. } => TileOperationType::Fill,
            TileUndoOp::Clear { .. } => TileOperationType::Clear,
        }
    }

    /// Pixels captured by a shape operation. Empty for SetPixel and Clear.
    pub fn changed_pixels(&self) -> &[PixelChange] {
        match self {
            TileUndoOp::Fill { changes, .. } | TileUndoOp::Line { changes, .. } | TileUndoOp::Rectangle { changes, .. } => changes.as_slice(),
            TileUndoOp::SetPixel { .. } | TileUndoOp::Clear { .. } => &[],
        }
    }

    /// Whether this operation can touch any pixel (affects dirty flag)
    pub fn changes_data(&self) -> bool {
        match self {
            TileUndoOp::SetPixel { x, y, .. } => Tile::is_in_bounds(*x, *y),
            TileUndoOp::Fill { changes, .. } | TileUndoOp::Line { changes, .. } | TileUndoOp::Rectangle { changes, .. } => !changes.is_empty(),
            TileUndoOp::Clear { .. } => true,
        }
    }
}

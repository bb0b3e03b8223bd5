//! Shared test helpers for tile editor tests

#![allow(dead_code)]

use semitile_edit::Tile;

/// Enable log output for a test run (`RUST_LOG=debug cargo test`)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A tile where every pixel has a different pattern of bits set
pub fn create_pattern_tile() -> Tile {
    let mut tile = Tile::new();
    for y in 0..8 {
        for x in 0..8 {
            tile.set_pixel(x, y, ((x + y * 3) % 16) as u8);
        }
    }
    tile
}

/// A tile with a closed box of `color` from (1, 1) to (5, 5)
pub fn create_boxed_tile(color: u8) -> Tile {
    let mut tile = Tile::new();
    for i in 1..=5 {
        tile.set_pixel(i, 1, color);
        tile.set_pixel(i, 5, color);
        tile.set_pixel(1, i, color);
        tile.set_pixel(5, i, color);
    }
    tile
}

/// Collect the coordinates of every pixel that has `color`
pub fn pixels_with_color(tile: &Tile, color: u8) -> Vec<(i32, i32)> {
    let mut result = Vec::new();
    for y in 0..8 {
        for x in 0..8 {
            if tile.get_pixel(x, y) == color {
                result.push((x, y));
            }
        }
    }
    result
}

use crate::{EngineError, Result};

/// Width and height of a tile in pixels
pub const TILE_SIZE: i32 = 8;

/// Largest valid color index (4 bits per pixel)
pub const MAX_COLOR: u8 = 15;

/// Size of the 4bpp planar representation of one tile
pub const PLANAR_SIZE: usize = 32;

const PLANES: usize = 4;

/// An 8×8 tile of 4-bit color indices.
///
/// Out of range access never fails: reads return color 0 and writes are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tile {
    pixels: [[u8; TILE_SIZE as usize]; TILE_SIZE as usize],
}

impl Tile {
    /// Creates a new tile with every pixel set to color index 0
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_bounds(x: i32, y: i32) -> bool {
        (0..TILE_SIZE).contains(&x) && (0..TILE_SIZE).contains(&y)
    }

    /// Color index at (x, y), 0 when the coordinate is outside the tile
    pub fn get_pixel(&self, x: i32, y: i32) -> u8 {
        if Self::is_in_bounds(x, y) {
            self.pixels[y as usize][x as usize]
        } else {
            0
        }
    }

    /// Sets (x, y) to `color`. Ignored for coordinates outside the tile or colors above 15.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u8) {
        if Self::is_in_bounds(x, y) && color <= MAX_COLOR {
            self.pixels[y as usize][x as usize] = color;
        }
    }

    /// Resets every pixel to color index 0
    pub fn clear(&mut self) {
        self.pixels = Default::default();
    }

    /// Row-major pixel rows, for rendering
    pub fn pixels(&self) -> &[[u8; TILE_SIZE as usize]; TILE_SIZE as usize] {
        &self.pixels
    }

    /// Number of pixels that are not color 0
    pub fn count_non_zero(&self) -> usize {
        self.pixels.iter().flatten().filter(|&&c| c != 0).count()
    }

    /// Encodes the tile as 4bpp planar data.
    ///
    /// Bytes `8*p..8*p+8` hold bit plane `p` (plane 0 is the least significant bit
    /// of the color index). Each byte is one row; bit 7 is the leftmost pixel.
    pub fn to_planar(&self) -> [u8; PLANAR_SIZE] {
        let mut planar = [0u8; PLANAR_SIZE];
        for (y, row) in self.pixels.iter().enumerate() {
            for (x, &color) in row.iter().enumerate() {
                let mask = 0x80 >> x;
                for plane in 0..PLANES {
                    if color & (1 << plane) != 0 {
                        planar[plane * 8 + y] |= mask;
                    }
                }
            }
        }
        planar
    }

    /// Decodes 4bpp planar data, see [`Tile::to_planar`] for the layout
    pub fn from_planar(data: &[u8; PLANAR_SIZE]) -> Self {
        let mut tile = Tile::new();
        for (y, row) in tile.pixels.iter_mut().enumerate() {
            for (x, pixel) in row.iter_mut().enumerate() {
                let mask = 0x80 >> x;
                *pixel = (0..PLANES).filter(|plane| data[plane * 8 + y] & mask != 0).fold(0, |acc, plane| acc | (1 << plane));
            }
        }
        tile
    }

    /// Decodes planar data from an arbitrary slice
    ///
    /// # Errors
    ///
    /// Returns `InvalidDataLength` unless the slice is exactly 32 bytes long.
    pub fn try_from_planar_slice(data: &[u8]) -> Result<Self> {
        let data: &[u8; PLANAR_SIZE] = data.try_into().map_err(|_| EngineError::invalid_length(PLANAR_SIZE, data.len()))?;
        Ok(Self::from_planar(data))
    }
}

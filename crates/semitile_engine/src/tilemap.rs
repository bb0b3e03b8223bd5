use crate::{EngineError, Result};

/// Highest addressable tile index (10 bits)
pub const MAX_TILE_INDEX: u16 = 1023;

/// Highest palette index a background entry can select (3 bits)
pub const MAX_ENTRY_PALETTE: u8 = 7;

/// Tilemaps are between 1 and 256 tiles in each dimension
pub const MAX_TILEMAP_DIMENSION: usize = 256;

const TILE_INDEX_MASK: u16 = 0x03FF;
const PALETTE_SHIFT: u16 = 10;
const H_FLIP_BIT: u16 = 1 << 13;
const V_FLIP_BIT: u16 = 1 << 14;
const PRIORITY_BIT: u16 = 1 << 15;

/// One cell of a tilemap, packed into 16 bits:
///
/// | Bits  | Meaning                |
/// |-------|------------------------|
/// | 0-9   | Tile index             |
/// | 10-12 | Palette index          |
/// | 13    | Horizontal flip        |
/// | 14    | Vertical flip          |
/// | 15    | Priority over sprites  |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TilemapEntry {
    tile_index: u16,
    palette_idx: u8,
    h_flip: bool,
    v_flip: bool,
    priority: bool,
}

impl TilemapEntry {
    /// Tile index is clamped to 1023 and palette index to 7
    pub fn new(tile_index: u16, palette_idx: u8, h_flip: bool, v_flip: bool, priority: bool) -> Self {
        Self {
            tile_index: tile_index.min(MAX_TILE_INDEX),
            palette_idx: palette_idx.min(MAX_ENTRY_PALETTE),
            h_flip,
            v_flip,
            priority,
        }
    }

    pub fn to_u16(self) -> u16 {
        let mut value = self.tile_index & TILE_INDEX_MASK;
        value |= (u16::from(self.palette_idx) & 0x7) << PALETTE_SHIFT;
        if self.h_flip {
            value |= H_FLIP_BIT;
        }
        if self.v_flip {
            value |= V_FLIP_BIT;
        }
        if self.priority {
            value |= PRIORITY_BIT;
        }
        value
    }

    pub fn from_u16(value: u16) -> Self {
        Self {
            tile_index: value & TILE_INDEX_MASK,
            palette_idx: ((value >> PALETTE_SHIFT) & 0x7) as u8,
            h_flip: value & H_FLIP_BIT != 0,
            v_flip: value & V_FLIP_BIT != 0,
            priority: value & PRIORITY_BIT != 0,
        }
    }

    pub fn tile_index(self) -> u16 {
        self.tile_index
    }

    pub fn palette_idx(self) -> u8 {
        self.palette_idx
    }

    pub fn h_flip(self) -> bool {
        self.h_flip
    }

    pub fn v_flip(self) -> bool {
        self.v_flip
    }

    pub fn priority(self) -> bool {
        self.priority
    }

    /// Clamped to 1023
    pub fn set_tile_index(&mut self, tile_index: u16) {
        self.tile_index = tile_index.min(MAX_TILE_INDEX);
    }

    /// Clamped to 7
    pub fn set_palette_idx(&mut self, palette_idx: u8) {
        self.palette_idx = palette_idx.min(MAX_ENTRY_PALETTE);
    }

    pub fn set_h_flip(&mut self, h_flip: bool) {
        self.h_flip = h_flip;
    }

    pub fn set_v_flip(&mut self, v_flip: bool) {
        self.v_flip = v_flip;
    }

    pub fn set_priority(&mut self, priority: bool) {
        self.priority = priority;
    }
}

/// A row-major grid of tilemap entries
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tilemap {
    width: usize,
    height: usize,
    entries: Vec<TilemapEntry>,
}

fn clamp_dimension(value: usize) -> usize {
    value.clamp(1, MAX_TILEMAP_DIMENSION)
}

impl Tilemap {
    /// Creates a tilemap of default entries. Dimensions are clamped to 1-256.
    pub fn new(width: usize, height: usize) -> Self {
        let width = clamp_dimension(width);
        let height = clamp_dimension(height);
        Self {
            width,
            height,
            entries: vec![TilemapEntry::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get_entry(&self, x: usize, y: usize) -> Option<TilemapEntry> {
        self.index_of(x, y).map(|idx| self.entries[idx])
    }

    /// Ignored when (x, y) is outside the map
    pub fn set_entry(&mut self, x: usize, y: usize, entry: TilemapEntry) {
        if let Some(idx) = self.index_of(x, y) {
            self.entries[idx] = entry;
        }
    }

    /// Two little-endian bytes per entry, row-major
    pub fn export_binary(&self) -> Vec<u8> {
        self.entries.iter().flat_map(|entry| entry.to_u16().to_le_bytes()).collect()
    }

    /// Imports data produced by [`Tilemap::export_binary`]. Dimensions are clamped first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDataLength` when `data` is not `width * height * 2` bytes.
    pub fn import_binary(data: &[u8], width: usize, height: usize) -> Result<Self> {
        let width = clamp_dimension(width);
        let height = clamp_dimension(height);
        let expected = width * height * 2;
        if data.len() != expected {
            return Err(EngineError::invalid_length(expected, data.len()));
        }

        let entries = data
            .chunks_exact(2)
            .map(|chunk| TilemapEntry::from_u16(u16::from_le_bytes([chunk[0], chunk[1]])))
            .collect();
        Ok(Self { width, height, entries })
    }

    /// Changes the dimensions, keeping the entries of the overlapping top-left region
    pub fn resize(&mut self, new_width: usize, new_height: usize) {
        let new_width = clamp_dimension(new_width);
        let new_height = clamp_dimension(new_height);
        if new_width == self.width && new_height == self.height {
            return;
        }
        log::debug!("resize tilemap {}x{} -> {}x{}", self.width, self.height, new_width, new_height);

        let mut entries = vec![TilemapEntry::default(); new_width * new_height];
        let keep_width = self.width.min(new_width);
        for y in 0..self.height.min(new_height) {
            let src = y * self.width;
            let dst = y * new_width;
            entries[dst..dst + keep_width].copy_from_slice(&self.entries[src..src + keep_width]);
        }

        self.width = new_width;
        self.height = new_height;
        self.entries = entries;
    }

    /// Resets every entry to the default
    pub fn clear(&mut self) {
        self.fill(TilemapEntry::default());
    }

    pub fn fill(&mut self, entry: TilemapEntry) {
        self.entries.fill(entry);
    }
}

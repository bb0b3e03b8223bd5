use crate::{EngineError, Result};

/// Number of sub-palettes in a palette
pub const SUB_PALETTE_COUNT: usize = 16;

/// Number of colors in one sub-palette
pub const COLORS_PER_SUB_PALETTE: usize = 16;

/// Size of an exported palette: 256 colors as little-endian RGB555
pub const PALETTE_BINARY_SIZE: usize = SUB_PALETTE_COUNT * COLORS_PER_SUB_PALETTE * 2;

const CHANNEL_MAX: u8 = 31;

/// A 15-bit color with 5 bits per channel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Creates a color, clamping each channel to 0-31
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r.min(CHANNEL_MAX),
            g: g.min(CHANNEL_MAX),
            b: b.min(CHANNEL_MAX),
        }
    }

    /// Packs the color as `0RRRRRGGGGGBBBBB`
    pub fn to_rgb555(self) -> u16 {
        (u16::from(self.r) << 10) | (u16::from(self.g) << 5) | u16::from(self.b)
    }

    pub fn from_rgb555(value: u16) -> Self {
        Self {
            r: ((value >> 10) & 0x1F) as u8,
            g: ((value >> 5) & 0x1F) as u8,
            b: (value & 0x1F) as u8,
        }
    }

    /// Expands to 8 bits per channel, replicating the high bits into the low bits
    pub fn to_rgb888(self) -> (u8, u8, u8) {
        let expand = |c: u8| (c << 3) | (c >> 2);
        (expand(self.r), expand(self.g), expand(self.b))
    }

    /// Truncates 8-bit channels to 5 bits
    pub fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self { r: r >> 3, g: g >> 3, b: b >> 3 }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// 256 colors organized as 16 sub-palettes of 16 colors.
///
/// A tile pixel's color index is resolved against one sub-palette for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    sub_palettes: [[Color; COLORS_PER_SUB_PALETTE]; SUB_PALETTE_COUNT],
}

impl Palette {
    /// Creates a palette with every entry black
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices wrap modulo 16
    pub fn get_color(&self, palette_idx: u8, color_idx: u8) -> Color {
        self.sub_palettes[palette_idx as usize % SUB_PALETTE_COUNT][color_idx as usize % COLORS_PER_SUB_PALETTE]
    }

    /// Indices wrap modulo 16
    pub fn set_color(&mut self, palette_idx: u8, color_idx: u8, color: Color) {
        self.sub_palettes[palette_idx as usize % SUB_PALETTE_COUNT][color_idx as usize % COLORS_PER_SUB_PALETTE] = color;
    }

    pub fn sub_palette(&self, palette_idx: u8) -> &[Color; COLORS_PER_SUB_PALETTE] {
        &self.sub_palettes[palette_idx as usize % SUB_PALETTE_COUNT]
    }

    /// Exports all 256 colors as little-endian RGB555, sub-palette 0 first
    pub fn export_binary(&self) -> Vec<u8> {
        self.sub_palettes.iter().flatten().flat_map(|color| color.to_rgb555().to_le_bytes()).collect()
    }

    /// Imports data produced by [`Palette::export_binary`]
    ///
    /// # Errors
    ///
    /// Returns `InvalidDataLength` unless `data` is exactly 512 bytes.
    pub fn import_binary(data: &[u8]) -> Result<Self> {
        if data.len() != PALETTE_BINARY_SIZE {
            return Err(EngineError::invalid_length(PALETTE_BINARY_SIZE, data.len()));
        }

        let mut palette = Palette::new();
        for (slot, chunk) in palette.sub_palettes.iter_mut().flatten().zip(data.chunks_exact(2)) {
            *slot = Color::from_rgb555(u16::from_le_bytes([chunk[0], chunk[1]]));
        }
        Ok(palette)
    }
}

use thiserror::Error;

use crate::constants::{BLUE_BITS, GREEN_BITS, RED_BITS};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Bit widths must add up to 8, got {red}+{green}+{blue}")]
    InvalidBitSum { red: u8, green: u8, blue: u8 },
}

/// How many of the top bits of each channel survive in the packed byte.
///
/// Fields are packed red-high, blue-low: with the default 3-3-2 layout a byte
/// reads `RRRGGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitLayout {
    red: u8,
    green: u8,
    blue: u8,
}

impl Default for BitLayout {
    fn default() -> Self {
        Self::RGB332
    }
}

impl BitLayout {
    pub const RGB332: BitLayout = BitLayout {
        red: RED_BITS,
        green: GREEN_BITS,
        blue: BLUE_BITS,
    };

    pub fn new(red: u8, green: u8, blue: u8) -> Result<Self, LayoutError> {
        if red as u16 + green as u16 + blue as u16 != 8 {
            return Err(LayoutError::InvalidBitSum { red, green, blue });
        }
        Ok(Self { red, green, blue })
    }

    pub fn red_bits(&self) -> u8 {
        self.red
    }

    pub fn green_bits(&self) -> u8 {
        self.green
    }

    pub fn blue_bits(&self) -> u8 {
        self.blue
    }

    /// Packs an RGB triple by keeping the top bits of each channel.
    pub fn pack(&self, r: u8, g: u8, b: u8) -> u8 {
        let r = top_bits(r, self.red) << (self.green + self.blue);
        let g = top_bits(g, self.green) << self.blue;
        let b = top_bits(b, self.blue);
        (r | g | b) as u8
    }

    /// Expands a packed byte back to an approximate RGB triple.
    ///
    /// Each field is scaled so its maximum level maps to 255. Zero-width
    /// fields come back as 0.
    pub fn unpack(&self, byte: u8) -> [u8; 3] {
        let byte = byte as u32;
        let b = byte & mask(self.blue);
        let g = (byte >> self.blue) & mask(self.green);
        let r = (byte >> (self.green + self.blue)) & mask(self.red);
        [
            expand(r, self.red),
            expand(g, self.green),
            expand(b, self.blue),
        ]
    }
}

/// Quantizes one pixel to RGB-332.
pub fn quantize(r: u8, g: u8, b: u8) -> u8 {
    BitLayout::RGB332.pack(r, g, b)
}

fn top_bits(channel: u8, bits: u8) -> u32 {
    if bits == 0 {
        return 0;
    }
    (channel as u32) >> (8 - bits)
}

fn mask(bits: u8) -> u32 {
    (1u32 << bits) - 1
}

fn expand(level: u32, bits: u8) -> u8 {
    if bits == 0 {
        return 0;
    }
    (level * 255 / mask(bits)) as u8
}

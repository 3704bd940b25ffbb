use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::{IntoStorage, RgbColor},
};

/// Pixels with an alpha below this value are emitted as the transparent sentinel.
pub const ALPHA_THRESHOLD: u8 = 128;

/// Colour code written for transparent pixels. Shared with black.
pub const TRANSPARENT: u16 = 0x0000;

/// A decoded 8 bit per channel pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn is_transparent(&self) -> bool {
        self.a < ALPHA_THRESHOLD
    }

    /// Truncates each channel to its high bits. No rounding, no dithering.
    pub fn to_rgb565(&self) -> Rgb565 {
        if self.is_transparent() {
            return Rgb565::BLACK;
        }
        Rgb565::new(self.r >> 3, self.g >> 2, self.b >> 3)
    }

    /// Packed 5-6-5 value with red in bits 11-15 and blue in bits 0-4.
    pub fn to_code(&self) -> u16 {
        self.to_rgb565().into_storage()
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

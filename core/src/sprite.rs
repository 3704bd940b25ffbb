use alloc::vec::Vec;

use crate::color::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteError {
    EmptyImage,
    LengthMismatch { expected: usize, actual: usize },
}

impl core::fmt::Display for SpriteError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpriteError::EmptyImage => write!(f, "image has no pixels"),
            SpriteError::LengthMismatch { expected, actual } => write!(
                f,
                "pixel buffer holds {actual} bytes, expected {expected}"
            ),
        }
    }
}

type Result<T> = core::result::Result<T, SpriteError>;

/// Quantized image: one RGB565 code per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<u16>,
}

impl Sprite {
    /// Quantizes a tightly packed RGBA8 buffer.
    pub fn from_rgba8(width: u32, height: u32, raw: &[u8]) -> Result<Self> {
        let count = pixel_count(width, height)?;
        let expected = count * 4;
        if raw.len() != expected {
            return Err(SpriteError::LengthMismatch {
                expected,
                actual: raw.len(),
            });
        }
        let pixels = raw
            .chunks_exact(4)
            .map(|px| Rgba::from([px[0], px[1], px[2], px[3]]));
        Self::from_pixels(width, height, pixels)
    }

    pub fn from_pixels(
        width: u32,
        height: u32,
        pixels: impl IntoIterator<Item = Rgba>,
    ) -> Result<Self> {
        let count = pixel_count(width, height)?;
        let pixels: Vec<u16> = pixels.into_iter().map(|px| px.to_code()).collect();
        if pixels.len() != count {
            return Err(SpriteError::LengthMismatch {
                expected: count * 4,
                actual: pixels.len() * 4,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Bytes the pixel data occupies on the target.
    pub fn data_size(&self) -> usize {
        self.pixels.len() * core::mem::size_of::<u16>()
    }
}

fn pixel_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(SpriteError::EmptyImage);
    }
    Ok(width as usize * height as usize)
}

//! Indexed-color frame storage.

use crate::record::StoneColor;

/// Entry of the fixed three-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PaletteIndex {
    Background = 0,
    Black = 1,
    White = 2,
}

impl PaletteIndex {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(PaletteIndex::Background),
            1 => Some(PaletteIndex::Black),
            2 => Some(PaletteIndex::White),
            _ => None,
        }
    }
}

impl From<StoneColor> for PaletteIndex {
    fn from(color: StoneColor) -> Self {
        match color {
            StoneColor::Black => PaletteIndex::Black,
            StoneColor::White => PaletteIndex::White,
        }
    }
}

/// Square raster of palette indices, row-major.
///
/// Cloning produces an independent copy; frames never share storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    side: usize,
    pixels: Vec<u8>,
}

impl Frame {
    /// Create a frame filled with the background index.
    pub fn new(side: usize) -> Self {
        Self {
            side,
            pixels: vec![PaletteIndex::Background as u8; side * side],
        }
    }

    /// Wrap raw indices, e.g. from a decoded GIF frame.
    ///
    /// Returns `None` if the buffer is not `side * side` long or holds an
    /// index outside the palette.
    pub fn from_indices(side: usize, pixels: Vec<u8>) -> Option<Self> {
        let valid = |&p: &u8| PaletteIndex::from_u8(p).is_some();
        if pixels.len() != side * side || !pixels.iter().all(valid) {
            return None;
        }
        Some(Self { side, pixels })
    }

    /// Side length in pixels.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Palette index at `(x, y)`, or `None` outside the frame.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<PaletteIndex> {
        if x >= self.side || y >= self.side {
            return None;
        }
        PaletteIndex::from_u8(self.pixels[y * self.side + x])
    }

    /// Set the pixel at `(x, y)`. Panics outside the frame.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, index: PaletteIndex) {
        assert!(x < self.side && y < self.side, "pixel ({x}, {y}) outside frame");
        self.pixels[y * self.side + x] = index as u8;
    }

    /// Raw indices, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Number of pixels holding `index`.
    pub fn count(&self, index: PaletteIndex) -> usize {
        self.pixels.iter().filter(|&&p| p == index as u8).count()
    }
}

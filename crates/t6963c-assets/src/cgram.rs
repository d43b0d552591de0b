//! CGRAM font: Chinese glyphs split into 8x8 text-mode cells.
//!
//! A 16x16 glyph occupies four consecutive CGRAM codes, ordered column by
//! column: `base` top-left, `base + 1` bottom-left, `base + 2` top-right,
//! `base + 3` bottom-right. Each cell is 8 bytes, one per pixel row.

use crate::bitmap::Bitmap;
use crate::{CELL_SIZE, GLYPH_BYTES, GLYPH_SIZE};
use tracing::debug;

/// Bytes in one 8x8 cell.
pub const CELL_BYTES: usize = crate::bitmap::expected_len(CELL_SIZE, CELL_SIZE);

/// Codes per 16x16 glyph.
pub const CELLS_PER_GLYPH: usize = 4;

/// First code the controller maps to CGRAM.
pub const CGRAM_BASE: u8 = 0x80;

/// CGRAM font table: "液" at 0x80, "晶" at 0x84.
pub static CGRAM_FONT: [u8; 2 * CELLS_PER_GLYPH * CELL_BYTES] = [
    0x00, 0x40, 0x37, 0x10, 0x81, 0x61, 0x22, 0x0A, // 0x80
    0x16, 0x2B, 0xE2, 0x22, 0x22, 0x22, 0x23, 0x22, // 0x81
    0x80, 0x44, 0xFE, 0x20, 0x20, 0x3C, 0x44, 0x64, // 0x82
    0x98, 0x48, 0x50, 0x20, 0x50, 0x8E, 0x04, 0x00, // 0x83
    0x0F, 0x08, 0x08, 0x0F, 0x08, 0x08, 0x0F, 0x08, // 0x84
    0x7E, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x7E, 0x42, // 0x85
    0xE0, 0x20, 0x20, 0xE0, 0x20, 0x20, 0xE0, 0x24, // 0x86
    0xFE, 0x84, 0x84, 0xFC, 0x84, 0x84, 0xFC, 0x84, // 0x87
];

/// Text-mode string naming the CGRAM glyphs, one base code per glyph.
pub static CGRAM_TEXT: [u8; 2] = [0x80, 0x84];

/// Glyphs stored in [`CGRAM_FONT`].
pub static CGRAM_GLYPHS: [CgramGlyph; 2] = [
    CgramGlyph::new('液', 0x80, 0),
    CgramGlyph::new('晶', 0x84, CELLS_PER_GLYPH * CELL_BYTES),
];

/// One 16x16 glyph held as four CGRAM cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CgramGlyph {
    ch: char,
    base: u8,
    offset: usize,
}

impl CgramGlyph {
    const fn new(ch: char, base: u8, offset: usize) -> Self {
        Self { ch, base, offset }
    }

    /// The character this glyph draws.
    pub fn ch(&self) -> char {
        self.ch
    }

    /// Code of the top-left cell.
    pub fn base(&self) -> u8 {
        self.base
    }

    /// Returns true if `code` is one of this glyph's four cells.
    pub fn contains(&self, code: u8) -> bool {
        code.wrapping_sub(self.base) < CELLS_PER_GLYPH as u8
    }

    /// Raw font bytes for all four cells.
    pub fn bytes(&self) -> &'static [u8] {
        &CGRAM_FONT[self.offset..self.offset + CELLS_PER_GLYPH * CELL_BYTES]
    }

    /// Returns the 8 row bytes of cell `code`.
    pub fn cell(&self, code: u8) -> Option<&'static [u8]> {
        if !self.contains(code) {
            return None;
        }
        let start = (code - self.base) as usize * CELL_BYTES;
        Some(&self.bytes()[start..start + CELL_BYTES])
    }

    /// Codes to write into the text area, as `[top row, bottom row]`.
    pub fn cell_codes(&self) -> [[u8; 2]; 2] {
        let b = self.base;
        [[b, b + 2], [b + 1, b + 3]]
    }

    /// Assembles the four cells into a row-major 16x16 bitmap.
    pub fn compose(&self) -> [u8; GLYPH_BYTES] {
        let mut out = [0u8; GLYPH_BYTES];
        let cells = self.bytes();
        for (i, cell) in cells.chunks_exact(CELL_BYTES).enumerate() {
            let col = i / 2;
            let row_offset = (i % 2) * CELL_BYTES;
            for (y, &byte) in cell.iter().enumerate() {
                out[(row_offset + y) * 2 + col] = byte;
            }
        }
        out
    }

    /// Composed glyph as a bitmap borrowed from `buf`.
    pub fn to_bitmap<'a>(&self, buf: &'a mut [u8; GLYPH_BYTES]) -> Bitmap<'a> {
        *buf = self.compose();
        Bitmap::from_array(GLYPH_SIZE, GLYPH_SIZE, buf)
    }
}

/// Finds the glyph owning CGRAM `code`.
pub fn glyph_for_code(code: u8) -> Option<&'static CgramGlyph> {
    let glyph = CGRAM_GLYPHS.iter().find(|g| g.contains(code));
    debug!("CGRAM lookup 0x{:02X}: {:?}", code, glyph.map(|g| g.ch));
    glyph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_glyphs() {
        assert_eq!(CGRAM_FONT.len(), 64);
        assert_eq!(CGRAM_GLYPHS.len() * CELLS_PER_GLYPH * CELL_BYTES, 64);
        for glyph in &CGRAM_GLYPHS {
            assert_eq!(glyph.bytes().len(), 32);
        }
    }

    #[test]
    fn test_text_names_glyph_bases() {
        let bases: Vec<u8> = CGRAM_GLYPHS.iter().map(|g| g.base()).collect();
        assert_eq!(bases, CGRAM_TEXT.to_vec());
        assert!(CGRAM_TEXT.iter().all(|&c| c >= CGRAM_BASE));
    }

    #[test]
    fn test_cell_lookup() {
        let jing = &CGRAM_GLYPHS[1];
        assert_eq!(
            jing.cell(0x85),
            Some(&[0x7E, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x7E, 0x42][..])
        );
        assert_eq!(jing.cell(0x80), None);
        assert_eq!(jing.cell(0x88), None);
        assert_eq!(jing.cell_codes(), [[0x84, 0x86], [0x85, 0x87]]);
    }

    #[test]
    fn test_compose_column_major_cells() {
        let jing = CGRAM_GLYPHS[1].compose();
        // Top 日: rows 0 and 3 are the full bar across both halves.
        assert_eq!(&jing[0..2], &[0x0F, 0xE0]);
        assert_eq!(&jing[2..4], &[0x08, 0x20]);
        assert_eq!(&jing[6..8], &[0x0F, 0xE0]);
        // Row 8 comes from the bottom cells 0x85 and 0x87.
        assert_eq!(&jing[16..18], &[0x7E, 0xFE]);
        assert_eq!(&jing[30..32], &[0x42, 0x84]);

        let ye = CGRAM_GLYPHS[0].compose();
        assert_eq!(&ye[4..6], &[0x37, 0xFE]);
    }

    #[test]
    fn test_to_bitmap() {
        let mut buf = [0u8; GLYPH_BYTES];
        let bitmap = CGRAM_GLYPHS[1].to_bitmap(&mut buf);
        assert_eq!(bitmap.width(), 16);
        assert_eq!(bitmap.pixel(4, 0), Some(true));
        assert_eq!(bitmap.pixel(3, 0), Some(false));
    }

    #[test]
    fn test_glyph_for_code() {
        assert_eq!(glyph_for_code(0x80).map(|g| g.ch()), Some('液'));
        assert_eq!(glyph_for_code(0x83).map(|g| g.ch()), Some('液'));
        assert_eq!(glyph_for_code(0x87).map(|g| g.ch()), Some('晶'));
        assert_eq!(glyph_for_code(0x88), None);
        assert_eq!(glyph_for_code(0x41), None);
    }
}

//! Graphic-mode Chinese glyphs, 16x16 at 1bpp.
//!
//! Each glyph is 32 bytes, two per pixel row, drawn straight into the
//! graphic area rather than through CGRAM.

use crate::bitmap::Bitmap;
use crate::{GLYPH_BYTES, GLYPH_SIZE};
use tracing::debug;

/// Characters drawn by [`GRAPHIC_GLYPHS`], in table order.
pub const GRAPHIC_GLYPH_CHARS: [char; 5] = ['北', '京', '欢', '迎', '您'];

/// "北京欢迎您"
pub static GRAPHIC_GLYPHS: [[u8; GLYPH_BYTES]; 5] = [
    // 北
    [
        0x04, 0x40, 0x04, 0x40, 0x04, 0x40, 0x04, 0x44, 0x04, 0x48, 0x7C, 0x50, 0x04, 0x60, 0x04, 0x40,
        0x04, 0x40, 0x04, 0x40, 0x04, 0x40, 0x04, 0x42, 0x1C, 0x42, 0xE4, 0x42, 0x44, 0x3E, 0x04, 0x00,
    ],
    // 京
    [
        0x02, 0x00, 0x01, 0x00, 0xFF, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x1F, 0xF0, 0x10, 0x10, 0x10, 0x10,
        0x10, 0x10, 0x1F, 0xF0, 0x01, 0x00, 0x11, 0x10, 0x11, 0x08, 0x21, 0x04, 0x45, 0x04, 0x02, 0x00,
    ],
    // 欢
    [
        0x00, 0x80, 0x00, 0x80, 0xFC, 0x80, 0x04, 0xFC, 0x05, 0x04, 0x49, 0x08, 0x2A, 0x40, 0x14, 0x40,
        0x10, 0x40, 0x28, 0xA0, 0x24, 0xA0, 0x45, 0x10, 0x81, 0x10, 0x02, 0x08, 0x04, 0x04, 0x08, 0x02,
    ],
    // 迎
    [
        0x00, 0x00, 0x20, 0x80, 0x13, 0x3C, 0x12, 0x24, 0x02, 0x24, 0x02, 0x24, 0xF2, 0x24, 0x12, 0x24,
        0x12, 0x24, 0x12, 0xB4, 0x13, 0x28, 0x12, 0x20, 0x10, 0x20, 0x28, 0x20, 0x47, 0xFE, 0x00, 0x00,
    ],
    // 您
    [
        0x09, 0x00, 0x09, 0x00, 0x11, 0xFC, 0x32, 0x04, 0x54, 0x48, 0x99, 0x50, 0x11, 0x48, 0x12, 0x44,
        0x14, 0x44, 0x11, 0x40, 0x10, 0x80, 0x02, 0x00, 0x51, 0x04, 0x51, 0x12, 0x90, 0x12, 0x0F, 0xF0,
    ],
];

/// Returns the glyph drawing `ch`.
pub fn graphic_glyph(ch: char) -> Option<Bitmap<'static>> {
    let index = GRAPHIC_GLYPH_CHARS.iter().position(|&c| c == ch);
    debug!("Graphic glyph lookup {:?}: {:?}", ch, index);
    index.map(|i| Bitmap::from_array(GLYPH_SIZE, GLYPH_SIZE, &GRAPHIC_GLYPHS[i]))
}

/// Glyphs for every drawable character of `text`, skipping the rest.
pub fn graphic_glyphs(text: &str) -> impl Iterator<Item = (char, Bitmap<'static>)> + '_ {
    text.chars()
        .filter_map(|ch| graphic_glyph(ch).map(|bitmap| (ch, bitmap)))
}

/// All glyphs stacked top to bottom, as one 16-pixel-wide table.
pub fn glyph_strip() -> &'static [u8] {
    GRAPHIC_GLYPHS.as_flattened()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_char_has_a_glyph() {
        for ch in GRAPHIC_GLYPH_CHARS {
            let bitmap = graphic_glyph(ch).unwrap();
            assert_eq!(bitmap.data().len(), 32);
            assert!(!bitmap.is_blank());
        }
        assert!(graphic_glyph('A').is_none());
    }

    #[test]
    fn test_ying_bottom_stroke() {
        // The closing stroke of 迎 spans the second-to-last row.
        let ying = graphic_glyph('迎').unwrap();
        assert_eq!(ying.row(14), Some(&[0x47, 0xFE][..]));
        assert_eq!(ying.row(15), Some(&[0x00, 0x00][..]));
    }

    #[test]
    fn test_glyphs_for_text() {
        let found: Vec<char> = graphic_glyphs("北京 welcomes 您").map(|(ch, _)| ch).collect();
        assert_eq!(found, vec!['北', '京', '您']);
    }

    #[test]
    fn test_glyph_strip_layout() {
        let strip = glyph_strip();
        assert_eq!(strip.len(), 5 * GLYPH_BYTES);
        let bitmap = Bitmap::new(GLYPH_SIZE, GLYPH_SIZE * 5, strip).unwrap();
        // Row 18 is row 2 of 京: the full horizontal bar.
        assert_eq!(bitmap.row(18), Some(&[0xFF, 0xFE][..]));
    }
}

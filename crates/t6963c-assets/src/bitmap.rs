//! 1bpp bitmap view over a constant table.
//!
//! Layout: row-major, 8 pixels per byte, most significant bit is the
//! leftmost pixel. A set bit is a lit (dark) pixel on the panel.

use crate::{Error, Result};

/// Bytes needed for a `width` x `height` 1bpp bitmap.
pub const fn expected_len(width: u16, height: u16) -> usize {
    width as usize * height as usize / 8
}

/// Borrowed 1bpp bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap<'a> {
    width: u16,
    height: u16,
    data: &'a [u8],
}

impl<'a> Bitmap<'a> {
    /// Wraps `data` as a `width` x `height` bitmap.
    ///
    /// The width must be a multiple of 8 and `data` must hold exactly
    /// `width * height / 8` bytes.
    pub fn new(width: u16, height: u16, data: &'a [u8]) -> Result<Self> {
        if width % 8 != 0 {
            return Err(Error::InvalidWidth(width));
        }
        let expected = expected_len(width, height);
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                name: format!("{}x{} bitmap", width, height),
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wraps a table whose size is fixed by its array type.
    pub(crate) const fn from_array<const N: usize>(
        width: u16,
        height: u16,
        data: &'a [u8; N],
    ) -> Self {
        assert!(width % 8 == 0 && expected_len(width, height) == N);
        Self {
            width,
            height,
            data,
        }
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Returns the raw packed bytes.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize / 8
    }

    /// Returns whether the pixel at (x, y) is lit, or `None` outside the bitmap.
    pub fn pixel(&self, x: u16, y: u16) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let byte = self.data[y as usize * self.stride() + x as usize / 8];
        Some(byte & (0x80 >> (x % 8)) != 0)
    }

    /// Returns the packed bytes of row `y`.
    pub fn row(&self, y: u16) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.stride();
        let start = y as usize * stride;
        Some(&self.data[start..start + stride])
    }

    /// Iterates over rows, top to bottom, as unpacked pixels.
    pub fn rows(&self) -> impl Iterator<Item = Vec<bool>> + 'a {
        let bitmap = *self;
        (0..bitmap.height).map(move |y| {
            (0..bitmap.width)
                .map(|x| bitmap.pixel(x, y).unwrap_or(false))
                .collect()
        })
    }

    /// Counts lit pixels.
    pub fn lit_pixels(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Returns true if no pixel is lit.
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    /// Converts the bitmap to RGBA8 bytes using `on` for lit pixels and
    /// `off` for the background.
    pub fn to_rgba8(&self, on: [u8; 3], off: [u8; 3]) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for y in 0..self.height {
            for x in 0..self.width {
                let [r, g, b] = if self.pixel(x, y) == Some(true) { on } else { off };
                rgba.extend_from_slice(&[r, g, b, 255]);
            }
        }
        rgba
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_len() {
        assert_eq!(expected_len(128, 64), 1024);
        assert_eq!(expected_len(16, 16), 32);
        assert_eq!(expected_len(8, 8), 8);
    }

    #[test]
    fn test_new_rejects_bad_sizes() {
        let data = [0u8; 32];
        assert!(Bitmap::new(16, 16, &data).is_ok());
        assert_eq!(
            Bitmap::new(16, 15, &data),
            Err(Error::SizeMismatch {
                name: "16x15 bitmap".to_string(),
                expected: 30,
                actual: 32,
            })
        );
        assert_eq!(Bitmap::new(12, 16, &data), Err(Error::InvalidWidth(12)));
    }

    #[test]
    fn test_pixel_msb_first() {
        // Row 0: 1000_0001 0000_0000, row 1: 0000_0000 0000_0001
        let data = [0x81, 0x00, 0x00, 0x01];
        let bitmap = Bitmap::new(16, 2, &data).unwrap();
        assert_eq!(bitmap.pixel(0, 0), Some(true));
        assert_eq!(bitmap.pixel(1, 0), Some(false));
        assert_eq!(bitmap.pixel(7, 0), Some(true));
        assert_eq!(bitmap.pixel(8, 0), Some(false));
        assert_eq!(bitmap.pixel(15, 1), Some(true));
        assert_eq!(bitmap.pixel(16, 0), None);
        assert_eq!(bitmap.pixel(0, 2), None);
    }

    #[test]
    fn test_rows_and_counts() {
        let data = [0xF0, 0x0F];
        let bitmap = Bitmap::new(8, 2, &data).unwrap();
        let rows: Vec<Vec<bool>> = bitmap.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            vec![true, true, true, true, false, false, false, false]
        );
        assert_eq!(bitmap.row(1), Some(&data[1..2]));
        assert_eq!(bitmap.row(2), None);
        assert_eq!(bitmap.lit_pixels(), 8);
        assert!(!bitmap.is_blank());
    }

    #[test]
    fn test_to_rgba8() {
        let data = [0x80];
        let bitmap = Bitmap::new(8, 1, &data).unwrap();
        let rgba = bitmap.to_rgba8([0, 0, 0], [255, 255, 255]);
        assert_eq!(rgba.len(), 8 * 4);
        assert_eq!(&rgba[0..4], &[0, 0, 0, 255]);
        assert_eq!(&rgba[4..8], &[255, 255, 255, 255]);
    }
}

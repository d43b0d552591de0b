//! T6963C Demo Assets
//!
//! Constant glyph, text and bitmap tables for the T6963C 128x64 character
//! LCD demo. Every table is laid out exactly as the controller consumes it,
//! so a driver can push the bytes verbatim.

pub mod bitmap;
pub mod catalog;
pub mod cgram;
pub mod error;
pub mod glyphs;
pub mod images;
pub mod text;

pub use bitmap::Bitmap;
pub use catalog::{Asset, AssetKind};
pub use cgram::CgramGlyph;
pub use error::{Error, Result};
pub use images::Image;

/// LCD panel dimensions in pixels.
pub const LCD_WIDTH: u16 = 128;
pub const LCD_HEIGHT: u16 = 64;

/// Bytes in one full-screen 1bpp frame.
pub const FRAME_BYTES: usize = bitmap::expected_len(LCD_WIDTH, LCD_HEIGHT);

/// Edge of a text-mode character cell in pixels.
pub const CELL_SIZE: u16 = 8;

/// Edge of a Chinese glyph in pixels.
pub const GLYPH_SIZE: u16 = 16;

/// Bytes in one 16x16 1bpp glyph.
pub const GLYPH_BYTES: usize = bitmap::expected_len(GLYPH_SIZE, GLYPH_SIZE);

//! Named registry of every asset table.
//!
//! The catalog gives drivers and tools one place to look up a table by name
//! along with the dimensions it was declared with.

use crate::bitmap::{expected_len, Bitmap};
use crate::images::Image;
use crate::{cgram, glyphs, text};
use crate::{Error, Result, CELL_SIZE, GLYPH_SIZE, LCD_HEIGHT, LCD_WIDTH};
use tracing::{debug, warn};

/// What kind of data a table holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// 8x8 cells loaded into CGRAM.
    CgramFont,
    /// Text-area string in CGROM codes.
    CgromText,
    /// Text-area string in CGRAM codes.
    CgramText,
    /// 16x16 glyphs for the graphic area.
    GraphicGlyph,
    /// Full-screen frame for the graphic area.
    Image,
}

impl AssetKind {
    /// Returns true if the table is pixel data rather than character codes.
    pub fn is_bitmap(&self) -> bool {
        matches!(
            self,
            AssetKind::CgramFont | AssetKind::GraphicGlyph | AssetKind::Image
        )
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::CgramFont => write!(f, "cgram-font"),
            AssetKind::CgromText => write!(f, "cgrom-text"),
            AssetKind::CgramText => write!(f, "cgram-text"),
            AssetKind::GraphicGlyph => write!(f, "graphic-glyph"),
            AssetKind::Image => write!(f, "image"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    CgramFont,
    CgramText,
    Welcome,
    WelcomeTwice,
    Glyphs,
    Image(Image),
}

/// One registered table.
///
/// Bitmap tables declare `width` x `height` in pixels. Text tables declare
/// `width` as the number of codes and a height of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    name: &'static str,
    kind: AssetKind,
    width: u16,
    height: u16,
    source: Source,
}

static ASSETS: [Asset; 8] = [
    // CGRAM cells stacked top to bottom, one byte per row.
    Asset::new("cgram-font", AssetKind::CgramFont, CELL_SIZE, 8 * CELL_SIZE, Source::CgramFont),
    Asset::new("cgram-text", AssetKind::CgramText, 2, 1, Source::CgramText),
    Asset::new("welcome", AssetKind::CgromText, 11, 1, Source::Welcome),
    Asset::new("welcome-twice", AssetKind::CgromText, 22, 1, Source::WelcomeTwice),
    Asset::new("glyphs", AssetKind::GraphicGlyph, GLYPH_SIZE, 5 * GLYPH_SIZE, Source::Glyphs),
    Asset::new("coocox", AssetKind::Image, LCD_WIDTH, LCD_HEIGHT, Source::Image(Image::Coocox)),
    Asset::new("apple", AssetKind::Image, LCD_WIDTH, LCD_HEIGHT, Source::Image(Image::Apple)),
    Asset::new("clear", AssetKind::Image, LCD_WIDTH, LCD_HEIGHT, Source::Image(Image::Clear)),
];

impl Asset {
    const fn new(
        name: &'static str,
        kind: AssetKind,
        width: u16,
        height: u16,
        source: Source,
    ) -> Self {
        Self {
            name,
            kind,
            width,
            height,
            source,
        }
    }

    /// Asset name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Asset kind.
    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    /// Declared width: pixels for bitmaps, codes for text.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Declared height: pixels for bitmaps, 1 for text.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Raw table bytes.
    pub fn bytes(&self) -> &'static [u8] {
        match self.source {
            Source::CgramFont => &cgram::CGRAM_FONT,
            Source::CgramText => &cgram::CGRAM_TEXT,
            Source::Welcome => &text::WELCOME,
            Source::WelcomeTwice => &text::WELCOME_TWICE,
            Source::Glyphs => glyphs::glyph_strip(),
            Source::Image(image) => image.bytes(),
        }
    }

    /// Byte count implied by the declared dimensions.
    pub fn expected_len(&self) -> usize {
        if self.kind.is_bitmap() {
            expected_len(self.width, self.height)
        } else {
            self.width as usize * self.height as usize
        }
    }

    /// Checks the table length against its declared dimensions.
    pub fn validate(&self) -> Result<()> {
        let actual = self.bytes().len();
        let expected = self.expected_len();
        if actual != expected {
            return Err(Error::SizeMismatch {
                name: self.name.to_string(),
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Views a bitmap table; `None` for text tables.
    pub fn bitmap(&self) -> Option<Result<Bitmap<'static>>> {
        self.kind
            .is_bitmap()
            .then(|| Bitmap::new(self.width, self.height, self.bytes()))
    }
}

/// Every registered asset.
pub fn assets() -> &'static [Asset] {
    &ASSETS
}

/// Looks up an asset by name, ignoring ASCII case.
pub fn find(name: &str) -> Result<&'static Asset> {
    let asset = ASSETS
        .iter()
        .find(|asset| asset.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownAsset(name.to_string()))?;
    debug!("Found asset {} ({})", asset.name, asset.kind);
    Ok(asset)
}

/// Validates every asset and returns the violations.
pub fn validate_all() -> Vec<Error> {
    let errors: Vec<Error> = ASSETS
        .iter()
        .filter_map(|asset| asset.validate().err())
        .collect();
    for err in &errors {
        warn!("Asset validation failed: {}", err);
    }
    debug!(
        "Validated {} assets, {} violations",
        ASSETS.len(),
        errors.len()
    );
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_assets_valid() {
        assert!(validate_all().is_empty());
        for asset in assets() {
            assert_eq!(asset.bytes().len(), asset.expected_len(), "{}", asset.name());
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = assets().iter().map(|a| a.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), assets().len());
    }

    #[test]
    fn test_find() {
        let coocox = find("coocox").unwrap();
        assert_eq!(coocox.kind(), AssetKind::Image);
        assert_eq!((coocox.width(), coocox.height()), (128, 64));
        assert_eq!(find("WELCOME").unwrap().bytes(), &text::WELCOME);
        assert_eq!(
            find("missing"),
            Err(Error::UnknownAsset("missing".to_string()))
        );
    }

    #[test]
    fn test_bitmap_views() {
        let glyphs = find("glyphs").unwrap().bitmap().unwrap().unwrap();
        assert_eq!((glyphs.width(), glyphs.height()), (16, 80));

        let font = find("cgram-font").unwrap().bitmap().unwrap().unwrap();
        assert_eq!(font.row(8), Some(&[0x16][..]));

        assert!(find("welcome").unwrap().bitmap().is_none());
    }

    #[test]
    fn test_validate_reports_mismatch() {
        let short = Asset::new("short", AssetKind::Image, 128, 65, Source::Image(Image::Clear));
        assert_eq!(
            short.validate(),
            Err(Error::SizeMismatch {
                name: "short".to_string(),
                expected: 1040,
                actual: 1024,
            })
        );
    }
}

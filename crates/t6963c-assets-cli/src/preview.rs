//! Host-side views of asset tables: terminal art, hex dumps and PNG.

use anyhow::Result;
use t6963c_assets::Bitmap;

/// Renders a bitmap as text, one line per pixel row.
pub fn ascii_art(bitmap: &Bitmap<'_>, on: char, off: char) -> String {
    let mut out = String::with_capacity((bitmap.width() as usize + 1) * bitmap.height() as usize);
    for row in bitmap.rows() {
        out.extend(row.into_iter().map(|lit| if lit { on } else { off }));
        out.push('\n');
    }
    out
}

/// Formats bytes as hex rows of 16, each prefixed with its offset.
pub fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .chunks(16)
        .enumerate()
        .map(|(i, chunk)| {
            let hex: Vec<String> = chunk.iter().map(|b| format!("{:02X}", b)).collect();
            format!("{:04X}: {}\n", i * 16, hex.join(" "))
        })
        .collect()
}

/// Encodes a bitmap as an RGBA PNG, each pixel scaled to `scale` x `scale`.
pub fn encode_png(bitmap: &Bitmap<'_>, scale: u32, on: [u8; 3], off: [u8; 3]) -> Result<Vec<u8>> {
    let width = bitmap.width() as u32 * scale;
    let height = bitmap.height() as u32 * scale;
    let rgba = bitmap.to_rgba8(on, off);

    let src_stride = bitmap.width() as usize * 4;
    let mut scaled = Vec::with_capacity(width as usize * height as usize * 4);
    for src_row in rgba.chunks_exact(src_stride) {
        let mut row = Vec::with_capacity(width as usize * 4);
        for px in src_row.chunks_exact(4) {
            for _ in 0..scale {
                row.extend_from_slice(px);
            }
        }
        for _ in 0..scale {
            scaled.extend_from_slice(&row);
        }
    }

    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&scaled)?;
    }

    Ok(png_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use t6963c_assets::{catalog, glyphs};

    #[test]
    fn test_ascii_art() {
        let data = [0xC0, 0x01];
        let bitmap = Bitmap::new(8, 2, &data).unwrap();
        assert_eq!(ascii_art(&bitmap, '#', '.'), "##......\n.......#\n");
    }

    #[test]
    fn test_ascii_art_glyph() {
        let ying = glyphs::graphic_glyph('迎').unwrap();
        let art = ascii_art(&ying, '#', '.');
        let lines: Vec<&str> = art.lines().collect();
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[14], ".#...##########.");
    }

    #[test]
    fn test_hex_dump() {
        let dump = hex_dump(&catalog::find("welcome").unwrap().bytes()[..4]);
        assert_eq!(dump, "0000: 37 45 4C 43\n");

        let bytes: Vec<u8> = (0..18).collect();
        let dump = hex_dump(&bytes);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "0010: 10 11");
    }

    #[test]
    fn test_encode_png_header() {
        let data = [0x80];
        let bitmap = Bitmap::new(8, 1, &data).unwrap();
        let png_data = encode_png(&bitmap, 2, [0, 0, 0], [255, 255, 255]).unwrap();
        assert_eq!(&png_data[..8], b"\x89PNG\r\n\x1a\n");
        // IHDR width and height follow the chunk length and tag.
        assert_eq!(&png_data[16..20], &16u32.to_be_bytes());
        assert_eq!(&png_data[20..24], &2u32.to_be_bytes());
    }
}

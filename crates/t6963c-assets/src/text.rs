//! Text-mode strings in CGROM character codes.
//!
//! The built-in CGROM starts at the ASCII space: code `0x00` is `' '`,
//! code `0x21` is `'A'`, up to `0x5E` for `'~'`.

use crate::{Error, Result};

/// Distance between ASCII and CGROM codes.
pub const CGROM_OFFSET: u8 = 0x20;

/// Highest printable CGROM code (`'~'`).
pub const CGROM_LAST: u8 = b'~' - CGROM_OFFSET;

/// "Welcome You"
pub static WELCOME: [u8; 11] = [
    0x37, 0x45, 0x4C, 0x43, 0x4F, 0x4D, 0x45, 0x00, 0x39, 0x4F, 0x55,
];

/// "Welcome You" twice, long enough to wrap a 16-column text line.
pub static WELCOME_TWICE: [u8; 22] = [
    0x37, 0x45, 0x4C, 0x43, 0x4F, 0x4D, 0x45, 0x00, 0x39, 0x4F, 0x55,
    0x37, 0x45, 0x4C, 0x43, 0x4F, 0x4D, 0x45, 0x00, 0x39, 0x4F, 0x55,
];

/// Decodes CGROM codes to ASCII.
pub fn decode(codes: &[u8]) -> Result<String> {
    codes
        .iter()
        .map(|&code| {
            if code > CGROM_LAST {
                return Err(Error::UnknownCode(code));
            }
            Ok(char::from(code + CGROM_OFFSET))
        })
        .collect()
}

/// Encodes printable ASCII text as CGROM codes.
pub fn encode(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|ch| match ch {
            ' '..='~' => Ok(ch as u8 - CGROM_OFFSET),
            _ => Err(Error::NotRepresentable(ch)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_tables() {
        assert_eq!(decode(&WELCOME).unwrap(), "Welcome You");
        assert_eq!(decode(&WELCOME_TWICE).unwrap(), "Welcome YouWelcome You");
    }

    #[test]
    fn test_encode_matches_tables() {
        assert_eq!(encode("Welcome You").unwrap(), WELCOME.to_vec());
        assert_eq!(encode(" ").unwrap(), vec![0x00]);
        assert_eq!(encode("~").unwrap(), vec![CGROM_LAST]);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(decode(&[0x37, 0x80]), Err(Error::UnknownCode(0x80)));
        assert_eq!(decode(&[0x5F]), Err(Error::UnknownCode(0x5F)));
        assert_eq!(encode("液晶"), Err(Error::NotRepresentable('液')));
        assert_eq!(encode("a\n"), Err(Error::NotRepresentable('\n')));
    }
}

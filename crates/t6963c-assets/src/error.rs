//! Error types for the T6963C asset tables.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when viewing or looking up asset tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Table length does not match its declared dimensions.
    #[error("{name}: size mismatch, expected {expected} bytes, got {actual}")]
    SizeMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// Bitmap width is not a whole number of bytes.
    #[error("Invalid bitmap width (must be a multiple of 8): {0}")]
    InvalidWidth(u16),

    /// No asset registered under this name.
    #[error("Unknown asset: {0}")]
    UnknownAsset(String),

    /// Character code outside the printable CGROM range.
    #[error("Unknown CGROM code: 0x{0:02X}")]
    UnknownCode(u8),

    /// Character has no CGROM code.
    #[error("Character not representable in CGROM: {0:?}")]
    NotRepresentable(char),
}

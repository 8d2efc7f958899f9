//! LZW-specific error types.

use oxilzw_core::error::CoreError;
use thiserror::Error;

/// LZW compression/decompression errors.
#[derive(Debug, Error)]
pub enum LzwError {
    /// I/O error on the byte side of the codec.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the bit stream layer.
    #[error("bit stream error: {0}")]
    Bits(#[from] CoreError),

    /// Code widths outside the accepted range.
    #[error("invalid code widths: minW {min_width}, maxW {max_width}")]
    InvalidWidths {
        /// Configured minimum code width.
        min_width: u8,
        /// Configured maximum code width.
        max_width: u8,
    },

    /// A code width too small to express the alphabet plus reserved codes.
    #[error("code width {width} cannot express {initial_codes} initial codes")]
    WidthTooSmall {
        /// The offending width.
        width: u8,
        /// Codes that must be representable before any growth.
        initial_codes: usize,
    },

    /// The alphabet contains no symbols.
    #[error("alphabet is empty")]
    EmptyAlphabet,

    /// A header listed the same byte value twice.
    #[error("duplicate alphabet byte 0x{0:02X} in header")]
    DuplicateAlphabetByte(u8),

    /// The input contained a byte outside the alphabet.
    #[error("input byte 0x{0:02X} is not in the alphabet")]
    ByteNotInAlphabet(u8),

    /// A read code names neither a live entry nor the next assignment.
    #[error("invalid code {code} (next unassigned code is {next_code})")]
    InvalidCode {
        /// The offending code.
        code: usize,
        /// The decoder's next unassigned code at the time of the read.
        next_code: usize,
    },

    /// The first code of a stream (or of a reset epoch) was not an
    /// alphabet code.
    #[error("first code {0} does not name an alphabet symbol")]
    NonAlphabetFirstCode(usize),
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;

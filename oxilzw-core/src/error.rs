//! Error types for bit-level I/O.

use std::io;
use thiserror::Error;

/// The error type for bit stream operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// I/O error from the underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input ended with fewer bits than a read requested.
    #[error("unexpected end of stream at bit position {bit_position}")]
    UnexpectedEof {
        /// Bit position where the stream ended.
        bit_position: u64,
    },

    /// Requested bit width outside the supported range.
    #[error("invalid bit width: {0} (must be 1-57)")]
    InvalidBitWidth(u8),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

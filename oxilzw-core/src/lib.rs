//! # OxiLZW Core
//!
//! Core components for the OxiLZW codec.
//!
//! This crate provides the bit-level framing layer the codec is built on:
//!
//! - [`bitstream`]: MSB-first `BitReader`/`BitWriter` for variable-width codes
//! - [`error`]: Error types
//!
//! Neither the encoder nor the decoder performs any byte alignment of its
//! own; this crate's buffering across byte boundaries is the synchronization
//! contract between the two.
//!
//! ## Example
//!
//! ```rust
//! use oxilzw_core::bitstream::{BitReader, BitWriter};
//!
//! let mut data = Vec::new();
//! let mut writer = BitWriter::new(&mut data);
//! writer.write(300, 9).unwrap();
//! writer.finish().unwrap();
//!
//! let mut reader = BitReader::new(data.as_slice());
//! assert_eq!(reader.read(9).unwrap(), 300);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter, MAX_WIDTH};
pub use error::{CoreError, Result};

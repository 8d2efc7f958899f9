//! # OxiLZW: Pure Rust LZW with policy-driven dictionaries
//!
//! This crate provides LZW (Lempel-Ziv-Welch) compression and decompression
//! with variable-width codewords and four selectable full-dictionary
//! policies.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Arbitrary alphabets**: codes name symbols of a caller-supplied
//!   ordered byte set, not a fixed 256-entry table
//! - **Variable-width codes**: MSB-first, growing from `minW` to `maxW`
//!   in lock-step on both sides
//! - **Four policies** for a full codebook: freeze, reset, LRU eviction
//!   and LFU eviction, the latter two backed by O(1) trackers
//! - **Self-describing streams**: a fixed header carries the widths, the
//!   policy and the alphabet, so expansion needs no out-of-band state
//!
//! ## Example
//!
//! ```rust
//! use oxilzw::{compress, expand, Alphabet, CodecConfig, Policy};
//!
//! let alphabet = Alphabet::parse(b"a\nb\n");
//! let config = CodecConfig::new(3, 4, Policy::Lru);
//!
//! let compressed = compress(b"abababab", &alphabet, config).unwrap();
//! let expanded = expand(&compressed).unwrap();
//! assert_eq!(expanded, b"abababab");
//! ```
//!
//! ## Stream layout
//!
//! ```text
//! header (widths, policy, alphabet) | code stream | EOF sentinel
//! ```
//!
//! Codes are packed MSB-first with no byte alignment; see
//! [`header::Header`] for the exact field layout.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod alphabet;
mod config;
mod decoder;
mod dictionary;
mod encoder;
mod error;
pub mod header;
pub mod tracker;

pub use alphabet::Alphabet;
pub use config::{CodecConfig, MAX_CODE_WIDTH, Policy};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{LzwError, Result};

/// Compress `data` against `alphabet` with the given configuration.
///
/// Convenience wrapper over [`Encoder`] for in-memory use.
///
/// # Example
///
/// ```rust
/// use oxilzw::{compress, Alphabet, CodecConfig};
///
/// let alphabet = Alphabet::parse(b"t\no\nb\ne\nr\nn\n");
/// let compressed = compress(b"tobeornot", &alphabet, CodecConfig::default()).unwrap();
/// assert!(!compressed.is_empty());
/// ```
pub fn compress(data: &[u8], alphabet: &Alphabet, config: CodecConfig) -> Result<Vec<u8>> {
    let encoder = Encoder::new(alphabet.clone(), config)?;
    let mut output = Vec::new();
    encoder.encode(data, &mut output)?;
    Ok(output)
}

/// Expand a compressed stream produced by [`compress`] or [`Encoder`].
///
/// The stream's own header supplies the configuration and alphabet.
///
/// # Example
///
/// ```rust
/// use oxilzw::{compress, expand, Alphabet, CodecConfig};
///
/// let alphabet = Alphabet::parse(b"t\no\nb\ne\nr\nn\n");
/// let compressed = compress(b"tobeornot", &alphabet, CodecConfig::default()).unwrap();
/// assert_eq!(expand(&compressed).unwrap(), b"tobeornot");
/// ```
pub fn expand(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    Decoder::decode(data, &mut output)?;
    Ok(output)
}

//! The fixed header preceding the code stream.
//!
//! Layout, big-endian and bit-packed through the core bit stream:
//!
//! | Field        | Bits            |
//! |--------------|-----------------|
//! | minW         | 8               |
//! | maxW         | 8               |
//! | policy       | 8               |
//! | alphabetSize | 16              |
//! | alphabet     | 8 × alphabetSize |

use crate::alphabet::Alphabet;
use crate::config::{CodecConfig, Policy};
use crate::error::{LzwError, Result};
use oxilzw_core::bitstream::{BitReader, BitWriter};
use std::io::{Read, Write};

/// Decoded header contents.
#[derive(Debug)]
pub struct Header {
    /// Widths and policy the stream was encoded with.
    pub config: CodecConfig,
    /// The alphabet, in the encoder's code order.
    pub alphabet: Alphabet,
}

impl Header {
    /// Serialize a header for the given configuration and alphabet.
    pub fn write<W: Write>(
        config: &CodecConfig,
        alphabet: &Alphabet,
        out: &mut BitWriter<W>,
    ) -> Result<()> {
        out.write(u64::from(config.min_width), 8)?;
        out.write(u64::from(config.max_width), 8)?;
        out.write(u64::from(config.policy.code()), 8)?;
        out.write(alphabet.len() as u64, 16)?;
        for &byte in alphabet.symbols() {
            out.write(u64::from(byte), 8)?;
        }
        Ok(())
    }

    /// Parse a header and validate what it describes.
    pub fn read<R: Read>(input: &mut BitReader<R>) -> Result<Self> {
        let min_width = input.read(8)? as u8;
        let max_width = input.read(8)? as u8;
        let policy = Policy::from_code(input.read(8)? as u8);
        let size = input.read(16)? as usize;
        if size == 0 {
            return Err(LzwError::EmptyAlphabet);
        }
        let mut symbols = Vec::with_capacity(size);
        for _ in 0..size {
            symbols.push(input.read(8)? as u8);
        }
        let alphabet = Alphabet::from_symbols(&symbols)?;
        let config = CodecConfig::new(min_width, max_width, policy);
        config.validate()?;
        Ok(Self { config, alphabet })
    }
}

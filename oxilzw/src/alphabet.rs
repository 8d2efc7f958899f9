//! The input alphabet: an ordered set of byte values.

use crate::error::{LzwError, Result};

const CR: u8 = 0x0D;
const LF: u8 = 0x0A;

/// Sentinel in the byte-to-code table for bytes outside the alphabet.
const NO_CODE: u16 = u16::MAX;

/// An ordered set of unique byte values.
///
/// Codes `0..len()` name the symbols in the order they were first seen.
/// A parsed alphabet always starts with carriage return and line feed, so
/// text inputs survive a round trip regardless of their line endings.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<u8>,
    code_by_byte: [u16; 256],
}

impl Alphabet {
    /// Parse the one-symbol-per-line text format.
    ///
    /// Only the first byte of each line counts; the rest of the line is
    /// ignored. Empty lines are skipped and duplicates are silently
    /// dropped. LF, CRLF and bare CR all end a line.
    pub fn parse(text: &[u8]) -> Self {
        let mut alphabet = Self::with_no_symbols();
        alphabet.add(CR);
        alphabet.add(LF);

        let mut at_line_start = true;
        for &byte in text {
            match byte {
                CR | LF => at_line_start = true,
                _ if at_line_start => {
                    alphabet.add(byte);
                    at_line_start = false;
                }
                _ => {}
            }
        }
        alphabet
    }

    /// Rebuild an alphabet from the raw symbol list carried in a header.
    ///
    /// Unlike [`parse`](Self::parse), nothing is pre-seeded and duplicates
    /// are rejected: a duplicate would alias two codes to one byte, which
    /// no encoder can produce.
    pub fn from_symbols(symbols: &[u8]) -> Result<Self> {
        let mut alphabet = Self::with_no_symbols();
        for &byte in symbols {
            if !alphabet.add(byte) {
                return Err(LzwError::DuplicateAlphabetByte(byte));
            }
        }
        if alphabet.is_empty() {
            return Err(LzwError::EmptyAlphabet);
        }
        Ok(alphabet)
    }

    fn with_no_symbols() -> Self {
        Self {
            symbols: Vec::new(),
            code_by_byte: [NO_CODE; 256],
        }
    }

    /// Append `byte` unless already present. Returns whether it was added.
    fn add(&mut self, byte: u8) -> bool {
        if self.code_by_byte[byte as usize] != NO_CODE {
            return false;
        }
        self.code_by_byte[byte as usize] = self.symbols.len() as u16;
        self.symbols.push(byte);
        true
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The code assigned to `byte`, if it is a symbol.
    pub fn code_of(&self, byte: u8) -> Option<usize> {
        match self.code_by_byte[byte as usize] {
            NO_CODE => None,
            code => Some(code as usize),
        }
    }

    /// The symbols in code order.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }
}

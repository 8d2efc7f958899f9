//! LZW decoder (expansion).
//!
//! The decoder rebuilds the encoder's codebook from the header and replays
//! the same insertion, width and eviction rules one step behind it, so every
//! code is resolvable at the moment it is read.

use crate::alphabet::Alphabet;
use crate::config::{CodeSpace, CodecConfig, Policy};
use crate::dictionary::CodeTable;
use crate::error::{LzwError, Result};
use crate::header::Header;
use crate::tracker::PolicyTracker;
use oxilzw_core::bitstream::BitReader;
use oxilzw_core::error::CoreError;
use std::io::{Read, Write};

/// LZW decoder for a single compressed stream.
#[derive(Debug)]
pub struct Decoder {
    alphabet: Alphabet,
    config: CodecConfig,
    space: CodeSpace,
}

impl Decoder {
    /// Expand a compressed stream; the header carries the configuration.
    pub fn decode<R: Read, W: Write>(input: R, mut output: W) -> Result<()> {
        let mut reader = BitReader::new(input);
        let decoder = Self::from_header(&mut reader)?;
        decoder.run(&mut reader, &mut output)
    }

    /// Build the decoder a stream header describes.
    fn from_header<R: Read>(reader: &mut BitReader<R>) -> Result<Self> {
        let Header { config, alphabet } = Header::read(reader)?;
        let space = CodeSpace::new(&config, alphabet.len())?;
        Ok(Self {
            alphabet,
            config,
            space,
        })
    }

    fn run<R: Read, W: Write>(&self, reader: &mut BitReader<R>, output: &mut W) -> Result<()> {
        let CodeSpace {
            alphabet_len,
            eof_code,
            reset_code,
            initial_next_code,
            max_code_count,
        } = self.space;

        let mut table = CodeTable::new(&self.alphabet);
        let mut tracker: PolicyTracker<usize> = PolicyTracker::for_policy(self.config.policy);
        let mut next_code = initial_next_code;
        let mut width = self.config.min_width;
        let mut threshold = 1usize << width;

        // An empty payload after the header expands to empty output.
        let first = match reader.read(width) {
            Ok(value) => value as usize,
            Err(CoreError::UnexpectedEof { .. }) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        if first == eof_code {
            return Ok(());
        }
        if first >= alphabet_len {
            return Err(LzwError::NonAlphabetFirstCode(first));
        }
        let mut prev: Vec<u8> = table
            .get(first)
            .expect("BUG: alphabet slots are always live")
            .to_vec();
        output.write_all(&prev)?;

        loop {
            // Mirrors the encoder, which re-checks the width between one
            // emission and the next.
            if next_code >= threshold && width < self.config.max_width {
                width += 1;
                threshold = 1 << width;
            }
            let x = reader.read(width)? as usize;
            log::trace!("read {x} at width {width}");

            if x == eof_code {
                break;
            }

            if self.config.policy == Policy::Reset && x == reset_code {
                log::debug!("reset code read, rebuilding codebook");
                table.reset();
                next_code = initial_next_code;
                width = self.config.min_width;
                threshold = 1 << width;

                // The first code of the new epoch is a bare alphabet code.
                let restart = reader.read(width)? as usize;
                if restart == eof_code {
                    break;
                }
                if restart >= alphabet_len {
                    return Err(LzwError::NonAlphabetFirstCode(restart));
                }
                prev.clear();
                prev.extend_from_slice(
                    table
                        .get(restart)
                        .expect("BUG: alphabet slots are always live"),
                );
                output.write_all(&prev)?;
                continue;
            }

            let phrase: Vec<u8> = if x < next_code {
                match table.get(x) {
                    Some(bytes) => bytes.to_vec(),
                    // An evicted slot; no well-formed stream names it.
                    None => return Err(LzwError::InvalidCode { code: x, next_code }),
                }
            } else if x == next_code {
                // The classical one-step-ahead case: the encoder emitted the
                // entry it was inserting, which is the previous phrase
                // extended by its own first byte.
                let mut phrase = Vec::with_capacity(prev.len() + 1);
                phrase.extend_from_slice(&prev);
                phrase.push(prev[0]);
                phrase
            } else {
                return Err(LzwError::InvalidCode { code: x, next_code });
            };
            output.write_all(&phrase)?;

            if next_code < max_code_count {
                if tracker.is_enabled() && next_code == max_code_count - 1 {
                    if let Some(&victim) = tracker.victim() {
                        log::debug!("codebook filling at code {next_code}, evicting code {victim}");
                        table.clear_slot(victim);
                        tracker.remove(&victim);
                    }
                }
                let mut entry = Vec::with_capacity(prev.len() + 1);
                entry.extend_from_slice(&prev);
                entry.push(phrase[0]);
                table.insert(next_code, entry);
                if tracker.is_enabled() {
                    tracker.touch(&next_code);
                }
                next_code += 1;
            }

            // Use-update for the read code, after the insert; with the
            // decoder one entry behind the encoder this lands the tracker
            // operations in the encoder's exact order.
            if tracker.is_enabled() && x > alphabet_len {
                tracker.touch(&x);
            }

            prev = phrase;
        }

        output.flush()?;
        Ok(())
    }
}

//! LZW encoder (compression).

use crate::alphabet::Alphabet;
use crate::config::{CodeSpace, CodecConfig, Policy};
use crate::dictionary::PrefixTable;
use crate::error::{LzwError, Result};
use crate::header::Header;
use crate::tracker::PolicyTracker;
use oxilzw_core::bitstream::BitWriter;
use std::io::{self, Read, Write};

/// LZW encoder driving the policy-managed codebook.
#[derive(Debug)]
pub struct Encoder {
    alphabet: Alphabet,
    config: CodecConfig,
    space: CodeSpace,
}

impl Encoder {
    /// Create an encoder for the given alphabet and configuration.
    ///
    /// Fails when the widths cannot express the alphabet plus the reserved
    /// codes.
    pub fn new(alphabet: Alphabet, config: CodecConfig) -> Result<Self> {
        let space = CodeSpace::new(&config, alphabet.len())?;
        Ok(Self {
            alphabet,
            config,
            space,
        })
    }

    /// Compress `input` into `output`.
    ///
    /// # Algorithm
    ///
    /// 1. Write the header and seed the codebook with single-byte entries
    /// 2. Grow the current phrase while the extension is in the codebook
    /// 3. On a miss, emit the phrase's code, insert the extension, and
    ///    restart from the mismatching byte
    /// 4. When the codebook fills, apply the configured policy
    /// 5. Emit the final phrase and the terminal sentinel
    ///
    /// A byte outside the alphabet is fatal. Empty input produces a header
    /// with no codes at all, not even the terminal sentinel.
    pub fn encode<R: Read, W: Write>(&self, mut input: R, output: W) -> Result<()> {
        let mut writer = BitWriter::new(output);
        Header::write(&self.config, &self.alphabet, &mut writer)?;

        let CodeSpace {
            eof_code,
            reset_code,
            initial_next_code,
            max_code_count,
            ..
        } = self.space;

        let mut dict = PrefixTable::new(&self.alphabet);
        let mut tracker: PolicyTracker<Vec<u8>> = PolicyTracker::for_policy(self.config.policy);
        let mut next_code = initial_next_code;
        let mut width = self.config.min_width;
        let mut threshold = 1usize << width;

        // The phrase being grown, extended and truncated in place. Its code
        // is carried alongside so a miss never re-hashes the phrase.
        let mut current: Vec<u8> = Vec::with_capacity(64);
        let mut current_code = 0usize;

        let mut buf = [0u8; 8192];
        let mut total_in = 0u64;

        loop {
            let n = match input.read(&mut buf) {
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if n == 0 {
                break;
            }
            total_in += n as u64;

            for &byte in &buf[..n] {
                let Some(byte_code) = self.alphabet.code_of(byte) else {
                    return Err(LzwError::ByteNotInAlphabet(byte));
                };
                if current.is_empty() {
                    current.push(byte);
                    current_code = byte_code;
                    continue;
                }

                current.push(byte);
                if let Some(hit) = dict.get(&current) {
                    current_code = hit;
                    continue;
                }

                // `current` minus its last byte is the longest known phrase.
                log::trace!("emit {current_code} at width {width}");
                writer.write(current_code as u64, width)?;
                let phrase_len = current.len() - 1;
                if tracker.is_enabled() && phrase_len > 1 {
                    tracker.touch(&current[..phrase_len]);
                }

                if next_code < max_code_count {
                    if next_code >= threshold && width < self.config.max_width {
                        width += 1;
                        threshold = 1 << width;
                    }
                    if tracker.is_enabled() && next_code == max_code_count - 1 {
                        // The insert below takes the last free code, so make
                        // room now; the victim's code goes dormant.
                        if let Some(victim) = tracker.victim().cloned() {
                            log::debug!(
                                "codebook filling at code {next_code}, evicting a {}-byte phrase",
                                victim.len()
                            );
                            dict.remove(&victim);
                            tracker.remove(victim.as_slice());
                        }
                    }
                    dict.insert(current.clone(), next_code);
                    if tracker.is_enabled() {
                        tracker.touch(current.as_slice());
                    }
                    next_code += 1;
                } else if self.config.policy == Policy::Reset {
                    // Paired with the decoder's pre-read width check.
                    if next_code >= threshold && width < self.config.max_width {
                        width += 1;
                        threshold = 1 << width;
                    }
                    log::debug!("codebook full, emitting reset at width {width}");
                    writer.write(reset_code as u64, width)?;
                    dict.reset(&self.alphabet);
                    next_code = initial_next_code;
                    width = self.config.min_width;
                    threshold = 1 << width;
                }

                current.clear();
                current.push(byte);
                current_code = byte_code;
            }
        }

        if !current.is_empty() {
            log::trace!("emit final {current_code} at width {width}");
            writer.write(current_code as u64, width)?;
            if tracker.is_enabled() && current.len() > 1 {
                tracker.touch(current.as_slice());
            }
            if next_code >= threshold && width < self.config.max_width {
                width += 1;
            }
            writer.write(eof_code as u64, width)?;
        }

        let total_out = writer.bytes_written();
        writer.finish()?;
        log::debug!("compressed {total_in} bytes into {total_out}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Decoder;

    fn alphabet() -> Alphabet {
        Alphabet::parse(b"a\nb\n")
    }

    fn roundtrip(input: &[u8], config: CodecConfig) -> Vec<u8> {
        let encoder = Encoder::new(alphabet(), config).unwrap();
        let mut compressed = Vec::new();
        encoder.encode(input, &mut compressed).unwrap();

        let mut expanded = Vec::new();
        Decoder::decode(compressed.as_slice(), &mut expanded).unwrap();
        expanded
    }

    #[test]
    fn test_encode_simple() {
        let config = CodecConfig::new(3, 3, Policy::Freeze);
        assert_eq!(roundtrip(b"ababab", config), b"ababab");
    }

    #[test]
    fn test_encode_known_stream() {
        // Alphabet [CR, LF, a, b]: a=2, b=3, EOF=4, user codes from 5.
        // "ababab" emits a, b, "ab", "ab", EOF at three bits each.
        let encoder = Encoder::new(alphabet(), CodecConfig::new(3, 3, Policy::Freeze)).unwrap();
        let mut compressed = Vec::new();
        encoder.encode(&b"ababab"[..], &mut compressed).unwrap();

        let header_len = 5 + 4;
        let codes = &compressed[header_len..];
        // 010 011 101 101 100 padded with a zero bit.
        assert_eq!(codes, &[0b0100_1110, 0b1101_1000]);
    }

    #[test]
    fn test_encode_empty_input_writes_header_only() {
        let encoder = Encoder::new(alphabet(), CodecConfig::default()).unwrap();
        let mut compressed = Vec::new();
        encoder.encode(&b""[..], &mut compressed).unwrap();
        // 5 fixed header bytes + 4 alphabet bytes, no codes, no sentinel.
        assert_eq!(compressed.len(), 5 + 4);
    }

    #[test]
    fn test_encode_single_byte() {
        let config = CodecConfig::new(3, 4, Policy::Freeze);
        assert_eq!(roundtrip(b"a", config), b"a");
    }

    #[test]
    fn test_encode_rejects_foreign_byte() {
        let encoder = Encoder::new(alphabet(), CodecConfig::default()).unwrap();
        let mut compressed = Vec::new();
        let err = encoder.encode(&b"abxab"[..], &mut compressed).unwrap_err();
        assert!(matches!(err, LzwError::ByteNotInAlphabet(b'x')));
    }

    #[test]
    fn test_encode_width_growth() {
        // With maxW = 6 the dictionary grows past the 3-bit threshold.
        let input = b"abababbbaaabbaababab".repeat(4);
        let config = CodecConfig::new(3, 6, Policy::Freeze);
        assert_eq!(roundtrip(&input, config), input);
    }

    #[test]
    fn test_encode_reset_policy() {
        let input = b"abbaabbaababababbbab".repeat(20);
        let config = CodecConfig::new(3, 4, Policy::Reset);
        assert_eq!(roundtrip(&input, config), input);
    }

    #[test]
    fn test_encode_lru_policy() {
        let input = b"ab".repeat(200);
        let config = CodecConfig::new(3, 4, Policy::Lru);
        assert_eq!(roundtrip(&input, config), input);
    }

    #[test]
    fn test_encode_lfu_policy() {
        let input = b"ab".repeat(200);
        let config = CodecConfig::new(3, 4, Policy::Lfu);
        assert_eq!(roundtrip(&input, config), input);
    }

    #[test]
    fn test_encoder_is_reusable() {
        let encoder = Encoder::new(alphabet(), CodecConfig::new(3, 5, Policy::Lru)).unwrap();
        for input in [&b"abab"[..], b"bbbb", b"a"] {
            let mut compressed = Vec::new();
            encoder.encode(input, &mut compressed).unwrap();
            let mut expanded = Vec::new();
            Decoder::decode(compressed.as_slice(), &mut expanded).unwrap();
            assert_eq!(expanded, input);
        }
    }
}

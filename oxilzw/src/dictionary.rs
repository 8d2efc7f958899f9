//! LZW codebooks: the encoder's phrase table and the decoder's code table.

use crate::alphabet::Alphabet;
use std::collections::HashMap;

/// Encoder-side codebook mapping owned byte strings to codes.
///
/// The hot path extends a caller-owned prefix buffer in place and looks it
/// up as a slice, so no allocation happens per input byte; an owned copy is
/// made only when a phrase is committed.
#[derive(Debug)]
pub struct PrefixTable {
    map: HashMap<Vec<u8>, usize>,
}

impl PrefixTable {
    /// Build a table seeded with the single-byte alphabet entries.
    pub fn new(alphabet: &Alphabet) -> Self {
        let mut table = Self {
            map: HashMap::with_capacity(alphabet.len() * 2),
        };
        table.reset(alphabet);
        table
    }

    /// Drop every learned phrase and re-seed the single-byte entries.
    pub fn reset(&mut self, alphabet: &Alphabet) {
        self.map.clear();
        for (code, &byte) in alphabet.symbols().iter().enumerate() {
            self.map.insert(vec![byte], code);
        }
    }

    /// Look up a phrase without copying it.
    pub fn get(&self, phrase: &[u8]) -> Option<usize> {
        self.map.get(phrase).copied()
    }

    /// Insert an owned copy of `phrase` under `code`.
    pub fn insert(&mut self, phrase: Vec<u8>, code: usize) {
        self.map.insert(phrase, code);
    }

    /// Remove a phrase, freeing its code for reassignment.
    pub fn remove(&mut self, phrase: &[u8]) {
        self.map.remove(phrase);
    }
}

/// Decoder-side codebook: a dense, code-indexed table of byte strings.
///
/// Alphabet slots `0..alphabet_len` are always present. Slots grow as codes
/// are assigned; a slot goes absent again when its entry is evicted.
#[derive(Debug)]
pub struct CodeTable {
    slots: Vec<Option<Box<[u8]>>>,
    alphabet_len: usize,
}

impl CodeTable {
    /// Build a table holding the single-byte alphabet entries.
    pub fn new(alphabet: &Alphabet) -> Self {
        let slots = alphabet
            .symbols()
            .iter()
            .map(|&byte| Some(vec![byte].into_boxed_slice()))
            .collect();
        Self {
            slots,
            alphabet_len: alphabet.len(),
        }
    }

    /// The byte string at `code`, if that slot is live.
    pub fn get(&self, code: usize) -> Option<&[u8]> {
        self.slots.get(code).and_then(|slot| slot.as_deref())
    }

    /// Store `phrase` at `code`, growing the table as codes are assigned.
    pub fn insert(&mut self, code: usize, phrase: Vec<u8>) {
        if code >= self.slots.len() {
            self.slots.resize(code + 1, None);
        }
        self.slots[code] = Some(phrase.into_boxed_slice());
    }

    /// Free a slot after an eviction.
    pub fn clear_slot(&mut self, code: usize) {
        if let Some(slot) = self.slots.get_mut(code) {
            *slot = None;
        }
    }

    /// Back to the state right after construction: alphabet entries only.
    pub fn reset(&mut self) {
        self.slots.truncate(self.alphabet_len);
    }
}

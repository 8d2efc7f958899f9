//! Codec configuration and dictionary policies.

use crate::error::{LzwError, Result};

/// Largest accepted code width.
///
/// The bit stream layer moves at most 57 bits per call; 48 leaves headroom
/// and is already far past any useful dictionary size.
pub const MAX_CODE_WIDTH: u8 = 48;

/// What happens to the codebook once it fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Stop inserting; keep encoding against the frozen dictionary.
    #[default]
    Freeze,
    /// Emit a reset code, clear to the initial state and restart at the
    /// minimum width.
    Reset,
    /// Evict the least-recently-used non-alphabet entry.
    Lru,
    /// Evict the least-frequently-used non-alphabet entry.
    Lfu,
}

impl Policy {
    /// Parse a policy name as spelled on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "freeze" => Some(Self::Freeze),
            "reset" => Some(Self::Reset),
            "lru" => Some(Self::Lru),
            "lfu" => Some(Self::Lfu),
            _ => None,
        }
    }

    /// Decode the header policy byte.
    ///
    /// Unknown values fall back to freeze, mirroring the encoder's own
    /// fallback for unknown policy names.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Reset,
            2 => Self::Lru,
            3 => Self::Lfu,
            _ => Self::Freeze,
        }
    }

    /// The header byte for this policy.
    pub fn code(self) -> u8 {
        match self {
            Self::Freeze => 0,
            Self::Reset => 1,
            Self::Lru => 2,
            Self::Lfu => 3,
        }
    }

    /// Canonical spelling of this policy.
    pub fn name(self) -> &'static str {
        match self {
            Self::Freeze => "freeze",
            Self::Reset => "reset",
            Self::Lru => "lru",
            Self::Lfu => "lfu",
        }
    }
}

/// LZW configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Minimum code width in bits.
    pub min_width: u8,
    /// Maximum code width in bits.
    pub max_width: u8,
    /// Full-dictionary policy.
    pub policy: Policy,
}

impl CodecConfig {
    /// Create a new configuration.
    pub fn new(min_width: u8, max_width: u8, policy: Policy) -> Self {
        Self {
            min_width,
            max_width,
            policy,
        }
    }

    /// Check the width range in isolation from any alphabet.
    pub fn validate(&self) -> Result<()> {
        if self.min_width < 1 || self.max_width < self.min_width || self.max_width > MAX_CODE_WIDTH
        {
            return Err(LzwError::InvalidWidths {
                min_width: self.min_width,
                max_width: self.max_width,
            });
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            min_width: 9,
            max_width: 16,
            policy: Policy::Freeze,
        }
    }
}

/// Code-space geometry derived from a configuration and an alphabet size.
///
/// Codes `0..alphabet_len` name alphabet symbols, `alphabet_len` is the
/// terminal sentinel, and under the reset policy `alphabet_len + 1` is the
/// reset sentinel. User codes start at `initial_next_code`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CodeSpace {
    pub alphabet_len: usize,
    pub eof_code: usize,
    pub reset_code: usize,
    pub initial_next_code: usize,
    pub max_code_count: usize,
}

impl CodeSpace {
    pub fn new(config: &CodecConfig, alphabet_len: usize) -> Result<Self> {
        config.validate()?;
        if alphabet_len == 0 {
            return Err(LzwError::EmptyAlphabet);
        }
        let eof_code = alphabet_len;
        let reset_code = alphabet_len + 1;
        let reserved = if config.policy == Policy::Reset { 2 } else { 1 };
        let initial_next_code = alphabet_len + reserved;
        let max_code_count = 1usize << config.max_width;
        // Every code must be legible at the width it is emitted with, so
        // the starting width already has to cover the initial code space.
        if (1usize << config.min_width) < initial_next_code {
            return Err(LzwError::WidthTooSmall {
                width: config.min_width,
                initial_codes: initial_next_code,
            });
        }
        Ok(Self {
            alphabet_len,
            eof_code,
            reset_code,
            initial_next_code,
            max_code_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names() {
        assert_eq!(Policy::from_name("freeze"), Some(Policy::Freeze));
        assert_eq!(Policy::from_name("reset"), Some(Policy::Reset));
        assert_eq!(Policy::from_name("lru"), Some(Policy::Lru));
        assert_eq!(Policy::from_name("lfu"), Some(Policy::Lfu));
        assert_eq!(Policy::from_name("mru"), None);
        assert_eq!(Policy::Lfu.name(), "lfu");
    }

    #[test]
    fn test_policy_codes_roundtrip() {
        for policy in [Policy::Freeze, Policy::Reset, Policy::Lru, Policy::Lfu] {
            assert_eq!(Policy::from_code(policy.code()), policy);
        }
        // Unknown bytes decode as freeze.
        assert_eq!(Policy::from_code(4), Policy::Freeze);
        assert_eq!(Policy::from_code(255), Policy::Freeze);
    }

    #[test]
    fn test_width_validation() {
        assert!(CodecConfig::new(9, 16, Policy::Freeze).validate().is_ok());
        assert!(CodecConfig::new(0, 16, Policy::Freeze).validate().is_err());
        assert!(CodecConfig::new(9, 8, Policy::Freeze).validate().is_err());
        assert!(
            CodecConfig::new(9, MAX_CODE_WIDTH + 1, Policy::Freeze)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_code_space_geometry() {
        // Four symbols, freeze: EOF takes code 4, user codes start at 5.
        let space = CodeSpace::new(&CodecConfig::new(3, 4, Policy::Freeze), 4).unwrap();
        assert_eq!(space.eof_code, 4);
        assert_eq!(space.initial_next_code, 5);
        assert_eq!(space.max_code_count, 16);

        // Reset additionally reserves code 5.
        let space = CodeSpace::new(&CodecConfig::new(3, 4, Policy::Reset), 4).unwrap();
        assert_eq!(space.reset_code, 5);
        assert_eq!(space.initial_next_code, 6);
    }

    #[test]
    fn test_min_width_must_cover_initial_codes() {
        // 256 symbols + EOF needs 9 bits from the start.
        let err = CodeSpace::new(&CodecConfig::new(8, 12, Policy::Freeze), 256).unwrap_err();
        assert!(matches!(err, LzwError::WidthTooSmall { width: 8, .. }));
        assert!(CodeSpace::new(&CodecConfig::new(9, 12, Policy::Freeze), 256).is_ok());
    }
}

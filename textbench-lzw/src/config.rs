//! LZW dictionary configuration.

use crate::CODEC_NAME;
use textbench_core::{Result, TextBenchError};

/// Single-byte codes every dictionary starts with.
pub const INITIAL_CODES: usize = 256;

/// Width of one stored code in bytes (big-endian).
pub const CODE_BYTES: usize = 2;

/// LZW configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Dictionary capacity, including the 256 single-byte codes.
    ///
    /// Once the dictionary is full it is frozen; no clear code is emitted.
    pub max_codes: usize,
}

impl LzwConfig {
    /// 12-bit dictionary: 4096 codes.
    pub const DEFAULT: Self = Self { max_codes: 4096 };

    /// The largest dictionary a 16-bit code can address.
    pub const WIDE: Self = Self { max_codes: 1 << 16 };

    /// Create a configuration, checking the capacity fits the code width.
    pub fn new(max_codes: usize) -> Result<Self> {
        if !(INITIAL_CODES..=Self::WIDE.max_codes).contains(&max_codes) {
            return Err(TextBenchError::codec_failure(
                CODEC_NAME,
                format!(
                    "dictionary size {} outside {}..={}",
                    max_codes,
                    INITIAL_CODES,
                    Self::WIDE.max_codes
                ),
            ));
        }
        Ok(Self { max_codes })
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

//! LZW encoder (compression).

use crate::config::{INITIAL_CODES, LzwConfig};
use std::collections::HashMap;

/// Greedy LZW encoder.
#[derive(Debug)]
pub struct LzwEncoder {
    config: LzwConfig,
    /// `(prefix code, next byte) -> code` for every multi-byte entry.
    entries: HashMap<(u16, u8), u16>,
}

impl LzwEncoder {
    /// Create a new LZW encoder with the given configuration.
    pub fn new(config: LzwConfig) -> Self {
        Self {
            config,
            entries: HashMap::with_capacity(config.max_codes.saturating_sub(INITIAL_CODES)),
        }
    }

    /// Encode `input` as a sequence of 16-bit big-endian codes.
    ///
    /// Each code names the longest dictionary string that prefixes the
    /// remaining input. After emitting it, that string plus the next byte
    /// becomes a new entry until the dictionary is full. Every call starts
    /// from a fresh dictionary.
    pub fn encode(&mut self, input: &[u8]) -> Vec<u8> {
        self.entries.clear();
        let mut output = Vec::with_capacity(input.len());

        let Some((&first, rest)) = input.split_first() else {
            return output;
        };

        let mut next_code = INITIAL_CODES;
        let mut current = u16::from(first);

        for &byte in rest {
            if let Some(&code) = self.entries.get(&(current, byte)) {
                current = code;
                continue;
            }

            output.extend_from_slice(&current.to_be_bytes());
            if next_code < self.config.max_codes {
                // max_codes <= 65536, so every assigned code fits in u16
                self.entries.insert((current, byte), next_code as u16);
                next_code += 1;
            }
            current = u16::from(byte);
        }

        output.extend_from_slice(&current.to_be_bytes());
        output
    }

    /// Number of multi-byte entries added by the last `encode` call.
    pub fn entries_added(&self) -> usize {
        self.entries.len()
    }
}

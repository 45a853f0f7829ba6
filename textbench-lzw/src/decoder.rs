//! LZW decoder (decompression).

use crate::config::{CODE_BYTES, INITIAL_CODES, LzwConfig};
use textbench_core::{Result, TextBenchError};

/// A dictionary string stored as its prefix code plus one byte.
#[derive(Debug, Clone, Copy)]
struct Entry {
    prefix: Option<u16>,
    byte: u8,
    /// First byte of the whole string.
    first: u8,
}

/// LZW decoder for decompression.
#[derive(Debug)]
pub struct LzwDecoder {
    config: LzwConfig,
    table: Vec<Entry>,
    /// Reversed bytes of the string being expanded.
    scratch: Vec<u8>,
}

impl LzwDecoder {
    /// Create a new LZW decoder with the given configuration.
    pub fn new(config: LzwConfig) -> Self {
        let mut decoder = Self {
            config,
            table: Vec::with_capacity(config.max_codes),
            scratch: Vec::new(),
        };
        decoder.reset();
        decoder
    }

    /// Reset the dictionary to the 256 single-byte strings.
    pub fn reset(&mut self) {
        self.table.clear();
        self.table.extend((0..INITIAL_CODES).map(|i| Entry {
            prefix: None,
            byte: i as u8,
            first: i as u8,
        }));
    }

    /// Decode a stream of 16-bit big-endian codes.
    ///
    /// The decoder rebuilds the encoder's dictionary one entry behind it.
    /// A code equal to the next free slot is the one string it cannot know
    /// yet: the previous string followed by its own first byte.
    pub fn decode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let chunks = input.chunks_exact(CODE_BYTES);
        if !chunks.remainder().is_empty() {
            return Err(TextBenchError::corrupt(format!(
                "LZW stream of {} bytes ends mid-code",
                input.len()
            )));
        }

        self.reset();
        let mut codes = chunks.map(|pair| usize::from(u16::from_be_bytes([pair[0], pair[1]])));
        let mut output = Vec::with_capacity(input.len() * 2);

        let Some(mut previous) = codes.next() else {
            return Ok(output);
        };
        if previous >= INITIAL_CODES {
            return Err(TextBenchError::corrupt(format!(
                "LZW stream starts with multi-byte code {}",
                previous
            )));
        }
        self.write_string(previous, &mut output);

        for code in codes {
            let len = self.table.len();
            let first = if code < len {
                self.table[code].first
            } else if code == len && len < self.config.max_codes {
                self.table[previous].first
            } else {
                return Err(TextBenchError::corrupt(format!(
                    "LZW code {} not in dictionary of {} entries",
                    code, len
                )));
            };

            if len < self.config.max_codes {
                let prefix_first = self.table[previous].first;
                // previous < len <= 65536, so it fits in u16
                self.table.push(Entry {
                    prefix: Some(previous as u16),
                    byte: first,
                    first: prefix_first,
                });
            }

            self.write_string(code, &mut output);
            previous = code;
        }

        Ok(output)
    }

    /// Append the string for `code` by walking its prefix chain.
    fn write_string(&mut self, code: usize, output: &mut Vec<u8>) {
        self.scratch.clear();
        let mut next = Some(code);
        while let Some(code) = next {
            let entry = self.table[code];
            self.scratch.push(entry.byte);
            next = entry.prefix.map(usize::from);
        }
        output.extend(self.scratch.iter().rev());
    }
}

//! # textbench-lzw: fixed-width LZW
//!
//! Lempel-Ziv-Welch with every code stored as a 16-bit big-endian word.
//! The dictionary starts with the 256 single-byte strings and grows by one
//! entry per emitted code until it reaches its capacity (4096 entries by
//! default), after which it is frozen.
//!
//! There is no header and no end code: the stream is the code sequence and
//! nothing else, so an empty input compresses to an empty stream.
//!
//! ```rust
//! use textbench_lzw::{compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let compressed = compress(original);
//! assert_eq!(decompress(&compressed).unwrap(), original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod encoder;

pub use config::{CODE_BYTES, INITIAL_CODES, LzwConfig};
pub use decoder::LzwDecoder;
pub use encoder::LzwEncoder;

use log::debug;
use textbench_core::{Codec, Result};

/// Name reported by [`LzwCodec`].
pub const CODEC_NAME: &str = "lzw";

/// Compress with the default 4096-entry dictionary.
pub fn compress(data: &[u8]) -> Vec<u8> {
    compress_with(data, LzwConfig::DEFAULT)
}

/// Compress with an explicit configuration.
pub fn compress_with(data: &[u8], config: LzwConfig) -> Vec<u8> {
    let mut encoder = LzwEncoder::new(config);
    let output = encoder.encode(data);
    debug!(
        "lzw: {} bytes -> {} codes, {} entries added",
        data.len(),
        output.len() / CODE_BYTES,
        encoder.entries_added()
    );
    output
}

/// Decompress with the default dictionary size.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    decompress_with(data, LzwConfig::DEFAULT)
}

/// Decompress with an explicit configuration.
///
/// The capacity must match the one used to compress.
pub fn decompress_with(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    LzwDecoder::new(config).decode(data)
}

/// LZW behind the suite's [`Codec`] contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LzwCodec {
    config: LzwConfig,
}

impl LzwCodec {
    /// Create a codec with the given configuration.
    pub fn new(config: LzwConfig) -> Self {
        Self { config }
    }
}

impl Codec for LzwCodec {
    fn name(&self) -> &str {
        CODEC_NAME
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(compress_with(input, self.config))
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decompress_with(input, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_text() {
        let original = b"This is a test of compression! ".repeat(10);
        let compressed = compress(&original);
        assert!(compressed.len() < original.len());
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn test_roundtrip_past_capacity() {
        // Enough distinct pairs to fill and freeze the dictionary
        let original: Vec<u8> = (0..50_000u32)
            .map(|i| (i.wrapping_mul(2_654_435_761) >> 13) as u8)
            .collect();
        assert_eq!(decompress(&compress(&original)).unwrap(), original);
    }

    #[test]
    fn test_wide_dictionary() {
        let original = b"abcabcabcabcabcabc".repeat(500);
        let compressed = compress_with(&original, LzwConfig::WIDE);
        assert_eq!(
            decompress_with(&compressed, LzwConfig::WIDE).unwrap(),
            original
        );
    }

    #[test]
    fn test_codec_contract() {
        let codec = LzwCodec::default();
        assert_eq!(codec.name(), "lzw");
        let blob = codec.compress(b"").unwrap();
        assert!(blob.is_empty());
        assert!(codec.decompress(&blob).unwrap().is_empty());
    }
}

//! Burrows-Wheeler text compression for textbench.
//!
//! The pipeline applies three order-sensitive transforms and a trivial
//! container:
//! 1. Burrows-Wheeler Transform (BWT) - groups bytes by their following context
//! 2. Move-to-Front Transform (MTF) - turns local repetition into small ranks
//! 3. Run-Length Encoding (RLE) - `(count, value)` pairs with one-byte counts
//! 4. Container - 4-byte big-endian primary index followed by the run pairs
//!
//! Decompression applies the inverses in reverse order.
//!
//! ```rust
//! use textbench_bwt::{compress, decompress};
//!
//! let text = b"It is a truth universally acknowledged, that a single man in possession";
//! let blob = compress(text).unwrap();
//! assert_eq!(decompress(&blob).unwrap(), text);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Burrows-Wheeler Transform implementation.
pub mod bwt;
pub mod config;
pub mod container;
mod decode;
mod encode;
pub mod mtf;
pub mod rle;

pub use config::{BwtConfig, SortStrategy};
pub use decode::{decompress, decompress_with};
pub use encode::{compress, compress_with};

use textbench_core::{Codec, Result};

/// Name reported by [`BwtCodec`].
pub const CODEC_NAME: &str = "bwt-mtf-rle";

/// The pipeline behind the suite's [`Codec`] contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BwtCodec {
    config: BwtConfig,
}

impl BwtCodec {
    /// Create a codec with the given configuration.
    pub fn new(config: BwtConfig) -> Self {
        Self { config }
    }

    /// The codec's configuration.
    pub fn config(&self) -> &BwtConfig {
        &self.config
    }
}

impl Codec for BwtCodec {
    fn name(&self) -> &str {
        CODEC_NAME
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        compress_with(input, &self.config)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decompress_with(input, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textbench_core::TextBenchError;

    #[test]
    fn test_roundtrip_single() {
        let original = b"a";
        let compressed = compress(original).unwrap();
        assert_eq!(compressed, vec![0, 0, 0, 0, 1, b'a']);
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, original.as_slice());
    }

    #[test]
    fn test_roundtrip_repeated() {
        let original = b"aaaaaaaaaabbbbbbbbbbcccccccccc";
        let compressed = compress(original).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, original.as_slice());
    }

    #[test]
    fn test_roundtrip_empty() {
        let compressed = compress(b"").unwrap();
        assert_eq!(compressed, vec![0, 0, 0, 0]);
        assert!(decompress(&compressed).unwrap().is_empty());
    }

    #[test]
    fn test_empty_payload_nonzero_index() {
        let err = decompress(&[0, 0, 0, 1]).unwrap_err();
        assert!(matches!(err, TextBenchError::CorruptTransform { .. }));
    }

    #[test]
    fn test_index_past_payload() {
        let mut blob = compress(b"banana").unwrap();
        blob[..4].copy_from_slice(&6u32.to_be_bytes());
        assert!(matches!(
            decompress(&blob),
            Err(TextBenchError::CorruptTransform { .. })
        ));
    }

    #[test]
    fn test_reference_limit() {
        let data = vec![b'x'; BwtConfig::REFERENCE_MAX_INPUT_LEN + 1];
        let err = compress_with(&data, &BwtConfig::REFERENCE).unwrap_err();
        assert!(matches!(err, TextBenchError::InputTooLarge { .. }));
    }

    #[test]
    fn test_decoded_length_limit() {
        let config = BwtConfig::DEFAULT.with_max_input_len(100);
        let blob = compress(&[0u8; 101]).unwrap();
        assert!(matches!(
            decompress_with(&blob, &config),
            Err(TextBenchError::InputTooLarge { len: 101, limit: 100 })
        ));
    }

    #[test]
    fn test_codec_contract() {
        let codec = BwtCodec::default();
        assert_eq!(codec.name(), CODEC_NAME);
        assert_eq!(codec.config().strategy, SortStrategy::PrefixDoubling);

        let text = b"to be or not to be, that is the question";
        let blob = codec.compress(text).unwrap();
        assert_eq!(codec.decompress(&blob).unwrap(), text);

        let reference = BwtCodec::new(BwtConfig::REFERENCE);
        assert_eq!(reference.compress(text).unwrap(), blob);
    }
}

//! # textbench-zstd: Zstandard
//!
//! A single Zstandard frame per input, produced and consumed through the
//! streaming API of the `zstd` crate. The frame is the whole blob; no extra
//! header is added.
//!
//! ```rust
//! use textbench_core::Codec;
//! use textbench_zstd::ZstdCodec;
//!
//! let codec = ZstdCodec::default();
//! let packed = codec.compress(b"to be or not to be").unwrap();
//! assert_eq!(codec.decompress(&packed).unwrap(), b"to be or not to be");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use log::debug;
use std::io::Write;
use textbench_core::{Codec, Result, TextBenchError};
use zstd::stream::{Encoder, copy_decode};

/// Name reported by [`ZstdCodec`].
pub const CODEC_NAME: &str = "zstd";

/// Lowest accepted level.
pub const MIN_LEVEL: i32 = 1;

/// Highest level (the "ultra" range starts above 19).
pub const MAX_LEVEL: i32 = 22;

/// The library's own default.
pub const DEFAULT_LEVEL: i32 = 3;

/// Zstandard behind the suite's [`Codec`] contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZstdCodec {
    level: i32,
}

impl ZstdCodec {
    /// Create a codec at `level` (1-22).
    pub fn new(level: i32) -> Result<Self> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(TextBenchError::codec_failure(
                CODEC_NAME,
                format!("level {} outside {}..={}", level, MIN_LEVEL, MAX_LEVEL),
            ));
        }
        Ok(Self { level })
    }

    /// Compression level.
    pub fn level(&self) -> i32 {
        self.level
    }
}

impl Default for ZstdCodec {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
        }
    }
}

fn failure(err: std::io::Error) -> TextBenchError {
    TextBenchError::codec_failure(CODEC_NAME, err)
}

impl Codec for ZstdCodec {
    fn name(&self) -> &str {
        CODEC_NAME
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut encoder =
            Encoder::new(Vec::with_capacity(input.len() / 2), self.level).map_err(failure)?;
        encoder.write_all(input).map_err(failure)?;
        // `finish` writes the frame epilogue
        let output = encoder.finish().map_err(failure)?;

        debug!(
            "zstd level {}: {} -> {} bytes",
            self.level,
            input.len(),
            output.len()
        );
        Ok(output)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len() * 3);
        copy_decode(input, &mut output).map_err(failure)?;
        Ok(output)
    }
}

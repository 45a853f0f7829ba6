//! # textbench-deflate: zlib and gzip
//!
//! DEFLATE in its two common wrappers, through the pure-Rust backend of
//! `flate2`:
//!
//! - **zlib**: 2-byte header, Adler-32 trailer
//! - **gzip**: 10-byte header, CRC-32 and length trailer
//!
//! Both default to level 9, the best compression DEFLATE offers.
//!
//! ```rust
//! use textbench_core::Codec;
//! use textbench_deflate::DeflateCodec;
//!
//! let codec = DeflateCodec::zlib();
//! let packed = codec.compress(b"It is a truth universally acknowledged").unwrap();
//! assert_eq!(codec.decompress(&packed).unwrap(), b"It is a truth universally acknowledged");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

use flate2::Compression;
use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};
use log::debug;
use std::io::{Read, Write};
use textbench_core::{Codec, Result, TextBenchError};

/// Highest DEFLATE compression level.
pub const MAX_LEVEL: u32 = 9;

/// Level used unless one is given.
pub const DEFAULT_LEVEL: u32 = MAX_LEVEL;

/// Framing around the DEFLATE stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapper {
    /// RFC 1950 zlib stream.
    Zlib,
    /// RFC 1952 gzip member.
    Gzip,
}

impl Wrapper {
    /// Codec name for this wrapper.
    pub fn name(&self) -> &'static str {
        match self {
            Wrapper::Zlib => "zlib",
            Wrapper::Gzip => "gzip",
        }
    }
}

/// DEFLATE behind the suite's [`Codec`] contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeflateCodec {
    wrapper: Wrapper,
    level: u32,
}

impl DeflateCodec {
    /// zlib at the default level.
    pub fn zlib() -> Self {
        Self {
            wrapper: Wrapper::Zlib,
            level: DEFAULT_LEVEL,
        }
    }

    /// gzip at the default level.
    pub fn gzip() -> Self {
        Self {
            wrapper: Wrapper::Gzip,
            level: DEFAULT_LEVEL,
        }
    }

    /// Set the compression level (0-9).
    pub fn with_level(mut self, level: u32) -> Result<Self> {
        if level > MAX_LEVEL {
            return Err(TextBenchError::codec_failure(
                self.wrapper.name(),
                format!("level {} above maximum {}", level, MAX_LEVEL),
            ));
        }
        self.level = level;
        Ok(self)
    }

    /// Framing used by this codec.
    pub fn wrapper(&self) -> Wrapper {
        self.wrapper
    }

    /// Compression level.
    pub fn level(&self) -> u32 {
        self.level
    }

    fn failure(&self, err: std::io::Error) -> TextBenchError {
        TextBenchError::codec_failure(self.wrapper.name(), err)
    }
}

impl Codec for DeflateCodec {
    fn name(&self) -> &str {
        self.wrapper.name()
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let level = Compression::new(self.level);
        let buffer = Vec::with_capacity(input.len() / 2);

        let output = match self.wrapper {
            Wrapper::Zlib => {
                let mut encoder = ZlibEncoder::new(buffer, level);
                encoder.write_all(input).map_err(|e| self.failure(e))?;
                encoder.finish().map_err(|e| self.failure(e))?
            }
            Wrapper::Gzip => {
                let mut encoder = GzEncoder::new(buffer, level);
                encoder.write_all(input).map_err(|e| self.failure(e))?;
                encoder.finish().map_err(|e| self.failure(e))?
            }
        };

        debug!(
            "{} level {}: {} -> {} bytes",
            self.wrapper.name(),
            self.level,
            input.len(),
            output.len()
        );
        Ok(output)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len() * 3);
        let read = match self.wrapper {
            Wrapper::Zlib => ZlibDecoder::new(input).read_to_end(&mut output),
            Wrapper::Gzip => GzDecoder::new(input).read_to_end(&mut output),
        };
        read.map_err(|e| self.failure(e))?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &[u8] = b"It is a truth universally acknowledged, that a single man in \
        possession of a good fortune, must be in want of a wife.\n";

    #[test]
    fn test_zlib_roundtrip() {
        let codec = DeflateCodec::zlib();
        let data = TEXT.repeat(20);
        let packed = codec.compress(&data).unwrap();
        assert_eq!(packed[0], 0x78);
        assert!(packed.len() < data.len() / 5);
        assert_eq!(codec.decompress(&packed).unwrap(), data);
    }

    #[test]
    fn test_gzip_roundtrip() {
        let codec = DeflateCodec::gzip();
        let packed = codec.compress(TEXT).unwrap();
        assert_eq!(&packed[..2], &[0x1f, 0x8b]);
        assert_eq!(codec.decompress(&packed).unwrap(), TEXT);
    }

    #[test]
    fn test_empty_roundtrip() {
        for codec in [DeflateCodec::zlib(), DeflateCodec::gzip()] {
            let packed = codec.compress(b"").unwrap();
            assert!(!packed.is_empty());
            assert!(codec.decompress(&packed).unwrap().is_empty());
        }
    }

    #[test]
    fn test_levels() {
        let codec = DeflateCodec::zlib().with_level(1).unwrap();
        assert_eq!(codec.level(), 1);
        assert_eq!(codec.decompress(&codec.compress(TEXT).unwrap()).unwrap(), TEXT);

        let err = DeflateCodec::gzip().with_level(10).unwrap_err();
        assert!(matches!(err, TextBenchError::CodecFailure { .. }));
    }

    #[test]
    fn test_corrupt_input() {
        let err = DeflateCodec::zlib().decompress(b"not a zlib stream").unwrap_err();
        assert!(err.to_string().starts_with("zlib failure"));

        let err = DeflateCodec::gzip().decompress(b"not a gzip member").unwrap_err();
        assert!(err.to_string().starts_with("gzip failure"));
    }

    #[test]
    fn test_wrappers_not_interchangeable() {
        let packed = DeflateCodec::gzip().compress(TEXT).unwrap();
        assert!(DeflateCodec::zlib().decompress(&packed).is_err());
    }
}
